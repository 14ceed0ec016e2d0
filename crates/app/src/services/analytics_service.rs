//! Analytics service — the stateless query façade over recorded measurements.

use std::collections::HashMap;

use chrono::NaiveDate;

use domus_domain::device::Device;
use domus_domain::error::DomusError;
use domus_domain::measurement::TemperatureSummary;
use domus_domain::time::Timestamp;

use crate::ports::AnalyticsRepository;

/// Application service answering descriptive queries about rooms and
/// devices. Stateless: each call is independent of prior calls.
pub struct AnalyticsService<R> {
    repo: R,
}

impl<R: AnalyticsRepository> AnalyticsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Retrieve the most recent (i.e. current) value reading for the given
    /// device.
    ///
    /// Returns `None` if the device is an actuator or no readings have
    /// been recorded for it yet.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub async fn most_recent_reading(&self, device: &Device) -> Result<Option<f64>, DomusError> {
        self.repo.most_recent_reading(device.id).await
    }

    /// Retrieve the name of the room holding the lowest recorded value.
    ///
    /// All device kinds participate, not just temperature sensors. Returns
    /// `None` when no measurements exist at all.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn coldest_room(&self) -> Result<Option<String>, DomusError> {
        self.repo.coldest_room().await
    }

    /// Retrieve the device's measurement values recorded within the
    /// inclusive `[from, to]` range, in insertion order.
    ///
    /// An empty list is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub async fn readings_in_timespan(
        &self,
        device: &Device,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<f64>, DomusError> {
        self.repo.readings_in_timespan(device.id, from, to).await
    }

    /// Summarize temperature readings per room as (min, max, avg), keyed
    /// by room name.
    ///
    /// Rooms whose only measurements come from non-temperature devices are
    /// absent from the result.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn temperature_summary_by_room(
        &self,
    ) -> Result<HashMap<String, TemperatureSummary>, DomusError> {
        self.repo.temperature_summary_by_room().await
    }

    /// Determine during which hours of the given day the room saw more
    /// than three humidity readings each strictly above the day's baseline
    /// humidity average.
    ///
    /// Hours are returned deduplicated, in ascending order; an empty list
    /// is a normal outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self), fields(room = %room_name))]
    pub async fn hours_above_average_humidity(
        &self,
        room_name: &str,
        day: NaiveDate,
    ) -> Result<Vec<u8>, DomusError> {
        self.repo.hours_above_average_humidity(room_name, day).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domus_domain::device::DeviceKind;
    use domus_domain::id::DeviceId;
    use domus_domain::time::now;
    use std::future::Future;

    /// Canned-answer repository standing in for the SQL adapter.
    #[derive(Default)]
    struct StubAnalyticsRepo {
        recent: Option<f64>,
        coldest: Option<String>,
        readings: Vec<f64>,
        summary: HashMap<String, TemperatureSummary>,
        hours: Vec<u8>,
    }

    impl AnalyticsRepository for StubAnalyticsRepo {
        fn most_recent_reading(
            &self,
            _device_id: DeviceId,
        ) -> impl Future<Output = Result<Option<f64>, DomusError>> + Send {
            let result = self.recent;
            async move { Ok(result) }
        }

        fn coldest_room(&self) -> impl Future<Output = Result<Option<String>, DomusError>> + Send {
            let result = self.coldest.clone();
            async move { Ok(result) }
        }

        fn readings_in_timespan(
            &self,
            _device_id: DeviceId,
            _from: Timestamp,
            _to: Timestamp,
        ) -> impl Future<Output = Result<Vec<f64>, DomusError>> + Send {
            let result = self.readings.clone();
            async move { Ok(result) }
        }

        fn temperature_summary_by_room(
            &self,
        ) -> impl Future<Output = Result<HashMap<String, TemperatureSummary>, DomusError>> + Send
        {
            let result = self.summary.clone();
            async move { Ok(result) }
        }

        fn hours_above_average_humidity(
            &self,
            _room_name: &str,
            _day: NaiveDate,
        ) -> impl Future<Output = Result<Vec<u8>, DomusError>> + Send {
            let result = self.hours.clone();
            async move { Ok(result) }
        }
    }

    fn sensor() -> Device {
        Device::builder()
            .id(DeviceId::new(1))
            .name("Bedroom Thermometer")
            .kind(DeviceKind::TemperatureSensor)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_none_when_device_has_no_readings() {
        let svc = AnalyticsService::new(StubAnalyticsRepo::default());
        let result = svc.most_recent_reading(&sensor()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_latest_reading_when_present() {
        let svc = AnalyticsService::new(StubAnalyticsRepo {
            recent: Some(21.5),
            ..StubAnalyticsRepo::default()
        });
        let result = svc.most_recent_reading(&sensor()).await.unwrap();
        assert_eq!(result, Some(21.5));
    }

    #[tokio::test]
    async fn should_return_none_when_no_measurements_exist_for_coldest_room() {
        let svc = AnalyticsService::new(StubAnalyticsRepo::default());
        assert!(svc.coldest_room().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_pass_through_coldest_room_name() {
        let svc = AnalyticsService::new(StubAnalyticsRepo {
            coldest: Some("Basement".to_string()),
            ..StubAnalyticsRepo::default()
        });
        assert_eq!(svc.coldest_room().await.unwrap().as_deref(), Some("Basement"));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_readings_in_timespan() {
        let svc = AnalyticsService::new(StubAnalyticsRepo::default());
        let result = svc
            .readings_in_timespan(&sensor(), now(), now())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_pass_through_summary_entries() {
        let mut summary = HashMap::new();
        summary.insert(
            "Kitchen".to_string(),
            TemperatureSummary {
                min: 18.0,
                max: 22.0,
                avg: 20.0,
            },
        );
        let svc = AnalyticsService::new(StubAnalyticsRepo {
            summary,
            ..StubAnalyticsRepo::default()
        });

        let result = svc.temperature_summary_by_room().await.unwrap();
        let kitchen = result.get("Kitchen").unwrap();
        assert!((kitchen.avg - 20.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_pass_through_humid_hours() {
        let svc = AnalyticsService::new(StubAnalyticsRepo {
            hours: vec![9, 14, 15],
            ..StubAnalyticsRepo::default()
        });
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let result = svc.hours_above_average_humidity("Bathroom", day).await.unwrap();
        assert_eq!(result, vec![9, 14, 15]);
    }
}
