//! Measurement — a single timestamped numeric reading from a sensor device.

use serde::{Deserialize, Serialize};

use crate::error::{DomusError, ValidationError};
use crate::id::DeviceId;
use crate::time::Timestamp;

/// A timestamped numeric reading produced by a sensor device.
///
/// Values are only semantically meaningful for sensor devices; actuators
/// are not expected to have measurement rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub device_id: DeviceId,
    pub value: f64,
    pub recorded_at: Timestamp,
}

impl Measurement {
    /// Create a builder for constructing a [`Measurement`].
    #[must_use]
    pub fn builder() -> MeasurementBuilder {
        MeasurementBuilder::default()
    }
}

/// Step-by-step builder for [`Measurement`].
#[derive(Debug, Default)]
pub struct MeasurementBuilder {
    device_id: Option<DeviceId>,
    value: Option<f64>,
    recorded_at: Option<Timestamp>,
}

impl MeasurementBuilder {
    #[must_use]
    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Consume the builder and return a [`Measurement`].
    ///
    /// `recorded_at` defaults to the current time when not provided.
    ///
    /// # Errors
    ///
    /// Returns [`DomusError::Validation`] if the device reference is missing.
    pub fn build(self) -> Result<Measurement, DomusError> {
        Ok(Measurement {
            device_id: self.device_id.ok_or(ValidationError::MissingDevice)?,
            value: self.value.unwrap_or_default(),
            recorded_at: self.recorded_at.unwrap_or_else(crate::time::now),
        })
    }
}

/// Minimum, maximum, and unweighted mean of a room's temperature readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_build_measurement_with_all_fields() {
        let recorded = now();
        let measurement = Measurement::builder()
            .device_id(DeviceId::new(3))
            .value(21.5)
            .recorded_at(recorded)
            .build()
            .unwrap();

        assert_eq!(measurement.device_id, DeviceId::new(3));
        assert!((measurement.value - 21.5).abs() < f64::EPSILON);
        assert_eq!(measurement.recorded_at, recorded);
    }

    #[test]
    fn should_default_recorded_at_to_now() {
        let before = now();
        let measurement = Measurement::builder()
            .device_id(DeviceId::new(1))
            .value(55.0)
            .build()
            .unwrap();
        let after = now();

        assert!(measurement.recorded_at >= before);
        assert!(measurement.recorded_at <= after);
    }

    #[test]
    fn should_return_validation_error_when_device_is_missing() {
        let result = Measurement::builder().value(1.0).build();
        assert!(matches!(
            result,
            Err(DomusError::Validation(ValidationError::MissingDevice))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let measurement = Measurement::builder()
            .device_id(DeviceId::new(8))
            .value(19.25)
            .build()
            .unwrap();
        let json = serde_json::to_string(&measurement).unwrap();
        let parsed: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, measurement);
    }

    #[test]
    fn should_roundtrip_summary_through_serde_json() {
        let summary = TemperatureSummary {
            min: 18.0,
            max: 22.0,
            avg: 20.0,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: TemperatureSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
