//! Storage port — read-only repository traits for the registry tables.
//!
//! Rooms, devices, and measurements are created and mutated outside this
//! system (ingestion writes measurement rows over time); these ports only
//! read, so no create/update/delete methods exist.

use std::future::Future;

use domus_domain::device::Device;
use domus_domain::error::DomusError;
use domus_domain::id::{DeviceId, RoomId};
use domus_domain::room::Room;

/// Read-only lookups over stored rooms.
pub trait RoomRepository {
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, DomusError>> + Send;

    /// Look up a room by its name. Room names are unique per the store
    /// schema, so at most one row matches.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Room>, DomusError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, DomusError>> + Send;
}

/// Read-only lookups over stored devices.
pub trait DeviceRepository {
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DomusError>> + Send;

    fn get_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, DomusError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DomusError>> + Send;
}
