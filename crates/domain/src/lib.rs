//! # domus-domain
//!
//! Pure domain model for the domus smart-home analytics layer.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (named physical spaces containing devices)
//! - Define **Devices** (sensors that produce measurements, actuators that don't)
//! - Define **Measurements** (timestamped numeric readings) and the
//!   aggregate shapes derived from them
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod measurement;
pub mod room;
