//! Analytics port — the descriptive measurement queries.
//!
//! Every operation maps to exactly one read-only query against the store
//! and is side-effect free. "No matching data" is an empty or `None`
//! result, never an error; only store-level failures surface as
//! [`DomusError::Storage`].

use std::collections::HashMap;
use std::future::Future;

use chrono::NaiveDate;

use domus_domain::error::DomusError;
use domus_domain::id::DeviceId;
use domus_domain::measurement::TemperatureSummary;
use domus_domain::time::Timestamp;

/// Read-only analytics queries over recorded measurements.
pub trait AnalyticsRepository {
    /// Latest measurement value for the device, ordered by recording time
    /// parsed as a date-time (not compared as text). `None` when the
    /// device has no measurement rows.
    fn most_recent_reading(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<f64>, DomusError>> + Send;

    /// Name of the room holding the globally minimum recorded value,
    /// across all device kinds. `None` when there are no measurements.
    /// When several rooms tie, whichever row the aggregate yields wins;
    /// the choice is unspecified.
    fn coldest_room(&self) -> impl Future<Output = Result<Option<String>, DomusError>> + Send;

    /// Measurement values for the device recorded within the inclusive
    /// `[from, to]` range, compared as date-times, in insertion order.
    fn readings_in_timespan(
        &self,
        device_id: DeviceId,
        from: Timestamp,
        to: Timestamp,
    ) -> impl Future<Output = Result<Vec<f64>, DomusError>> + Send;

    /// Per-room (min, max, avg) over measurements from temperature-sensor
    /// devices, keyed by room name. Rooms without temperature-sensor
    /// measurements are absent from the map.
    fn temperature_summary_by_room(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, TemperatureSummary>, DomusError>> + Send;

    /// Hours of the given day (0–23, ascending, deduplicated) during which
    /// the room saw more than three humidity readings each strictly above
    /// the day's baseline humidity average.
    fn hours_above_average_humidity(
        &self,
        room_name: &str,
        day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<u8>, DomusError>> + Send;
}
