//! # domus-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the port traits defined in `domus-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Bootstrap the schema on fresh stores (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Every operation executes within its own acquired-connection scope:
//! the pool hands out a connection for the duration of a query and takes
//! it back on all exit paths, so no shared cursor state survives a call.
//!
//! ## Dependency rule
//! Depends on `domus-app` (for port traits) and `domus-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod analytics_repo;
pub mod device_repo;
pub mod error;
pub mod pool;
pub mod room_repo;

pub use analytics_repo::SqliteAnalyticsRepository;
pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
