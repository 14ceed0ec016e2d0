//! Device service — read-only use-cases for device lookups.

use domus_domain::device::Device;
use domus_domain::error::{DomusError, NotFoundError};
use domus_domain::id::{DeviceId, RoomId};

use crate::ports::DeviceRepository;

/// Application service for device lookups.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DomusError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DomusError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the devices placed in the given room.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn devices_in_room(&self, room_id: RoomId) -> Result<Vec<Device>, DomusError> {
        self.repo.get_by_room(room_id).await
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DomusError> {
        self.repo.get_all().await
    }
}
