//! `SQLite` implementation of [`AnalyticsRepository`].
//!
//! Timestamps are stored as RFC 3339 text; every comparison and ordering
//! goes through `DATETIME(...)` so values sort chronologically rather
//! than as raw strings. All values reach the queries as bound parameters.

use std::collections::HashMap;
use std::future::Future;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use domus_app::ports::AnalyticsRepository;
use domus_domain::error::DomusError;
use domus_domain::id::DeviceId;
use domus_domain::measurement::TemperatureSummary;
use domus_domain::time::Timestamp;

use crate::error::StorageError;

/// Device whose readings provide the humidity baseline: the hourly
/// comparison runs against this device's daily average regardless of
/// which room is being queried.
const BASELINE_HUMIDITY_DEVICE: DeviceId = DeviceId::new(21);

const TEMPERATURE_KIND: &str = "temperature_sensor";
const HUMIDITY_KIND: &str = "humidity_sensor";

const SELECT_MOST_RECENT: &str = r"
    SELECT value FROM measurements
    WHERE device = ?
    ORDER BY DATETIME(time_stamp) DESC
    LIMIT 1
";

const SELECT_COLDEST_ROOM: &str = r"
    SELECT r.name, MIN(m.value)
    FROM measurements m
    INNER JOIN devices d ON d.id = m.device
    INNER JOIN rooms r ON r.id = d.room
";

const SELECT_IN_TIMESPAN: &str = r"
    SELECT value FROM measurements
    WHERE device = ?
      AND DATETIME(time_stamp) BETWEEN DATETIME(?) AND DATETIME(?)
";

const SELECT_TEMPERATURE_SUMMARY: &str = r"
    SELECT r.name, MIN(m.value), MAX(m.value), AVG(m.value)
    FROM measurements m
    INNER JOIN devices d ON d.id = m.device
    INNER JOIN rooms r ON r.id = d.room
    WHERE d.type = ?
    GROUP BY r.name
";

const SELECT_HUMID_HOURS: &str = r"
    SELECT CAST(STRFTIME('%H', DATETIME(m.time_stamp)) AS INTEGER) AS hour
    FROM measurements m
    INNER JOIN devices d ON d.id = m.device
    INNER JOIN rooms r ON r.id = d.room
    WHERE r.name = ?
      AND d.type = ?
      AND DATE(m.time_stamp) = DATE(?)
      AND m.value > (
          SELECT AVG(value) FROM measurements
          WHERE device = ? AND DATE(time_stamp) = DATE(?)
      )
    GROUP BY hour
    HAVING COUNT(m.value) > 3
    ORDER BY hour
";

/// `SQLite`-backed analytics queries.
pub struct SqliteAnalyticsRepository {
    pool: SqlitePool,
}

impl SqliteAnalyticsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AnalyticsRepository for SqliteAnalyticsRepository {
    fn most_recent_reading(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<f64>, DomusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<(f64,)> = sqlx::query_as(SELECT_MOST_RECENT)
                .bind(device_id.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|(value,)| value))
        }
    }

    fn coldest_room(&self) -> impl Future<Output = Result<Option<String>, DomusError>> + Send {
        let pool = self.pool.clone();
        async move {
            // The bare aggregate always yields one row; both columns are
            // NULL when the measurements table is empty.
            let row: Option<(Option<String>, Option<f64>)> = sqlx::query_as(SELECT_COLDEST_ROOM)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.and_then(|(name, _)| name))
        }
    }

    fn readings_in_timespan(
        &self,
        device_id: DeviceId,
        from: Timestamp,
        to: Timestamp,
    ) -> impl Future<Output = Result<Vec<f64>, DomusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(f64,)> = sqlx::query_as(SELECT_IN_TIMESPAN)
                .bind(device_id.value())
                .bind(from.to_rfc3339())
                .bind(to.to_rfc3339())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|(value,)| value).collect())
        }
    }

    fn temperature_summary_by_room(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, TemperatureSummary>, DomusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(String, f64, f64, f64)> = sqlx::query_as(SELECT_TEMPERATURE_SUMMARY)
                .bind(TEMPERATURE_KIND)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|(name, min, max, avg)| (name, TemperatureSummary { min, max, avg }))
                .collect())
        }
    }

    fn hours_above_average_humidity(
        &self,
        room_name: &str,
        day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<u8>, DomusError>> + Send {
        let pool = self.pool.clone();
        let room_name = room_name.to_string();
        let day = day.format("%Y-%m-%d").to_string();
        async move {
            let rows: Vec<(u8,)> = sqlx::query_as(SELECT_HUMID_HOURS)
                .bind(&room_name)
                .bind(HUMIDITY_KIND)
                .bind(&day)
                .bind(BASELINE_HUMIDITY_DEVICE.value())
                .bind(&day)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|(hour,)| hour).collect())
        }
    }
}
