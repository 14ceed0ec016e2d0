//! Device — a sensor that produces measurements, or an actuator that doesn't.

use serde::{Deserialize, Serialize};

use crate::error::{DomusError, ValidationError};
use crate::id::{DeviceId, RoomId};

/// What a device is and whether it produces measurements.
///
/// The variants mirror the `type` tags stored in the device table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    TemperatureSensor,
    HumiditySensor,
    Actuator,
}

impl DeviceKind {
    /// The tag persisted in the store's `type` column.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TemperatureSensor => "temperature_sensor",
            Self::HumiditySensor => "humidity_sensor",
            Self::Actuator => "actuator",
        }
    }

    /// Whether devices of this kind produce measurement rows.
    #[must_use]
    pub fn is_sensor(&self) -> bool {
        matches!(self, Self::TemperatureSensor | Self::HumiditySensor)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceKind {
    type Err = UnknownDeviceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature_sensor" => Ok(Self::TemperatureSensor),
            "humidity_sensor" => Ok(Self::HumiditySensor),
            "actuator" => Ok(Self::Actuator),
            other => Err(UnknownDeviceKind(other.to_string())),
        }
    }
}

/// A stored `type` tag that matches no known [`DeviceKind`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind: {0}")]
pub struct UnknownDeviceKind(pub String);

/// A sensor or actuator, optionally placed in a room.
///
/// Unplaced devices (`room_id: None`) fall out of room joins and never
/// appear in per-room query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub room_id: Option<RoomId>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomusError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), DomusError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<DeviceKind>,
    room_id: Option<RoomId>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`DomusError::Validation`] if `id` or `kind` is missing, or
    /// if `name` is missing or empty.
    pub fn build(self) -> Result<Device, DomusError> {
        let device = Device {
            id: self.id.ok_or(ValidationError::MissingId)?,
            name: self.name.unwrap_or_default(),
            kind: self.kind.ok_or(ValidationError::MissingKind)?,
            room_id: self.room_id,
        };
        device.validate()?;
        Ok(device)
    }
}
