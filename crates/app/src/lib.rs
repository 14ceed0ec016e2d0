//! # domus-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AnalyticsRepository` — the descriptive measurement queries
//!   - `RoomRepository` — read-only room lookups
//!   - `DeviceRepository` — read-only device lookups
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AnalyticsService` — the stateless query façade
//!   - `RoomService` / `DeviceService` — registry lookups
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `domus-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
