//! Room — a named physical space containing zero or more devices.

use serde::{Deserialize, Serialize};

use crate::error::{DomusError, ValidationError};
use crate::id::RoomId;

/// A named physical space such as a kitchen, bathroom, or garage.
///
/// Room names are unique within a store; lookups by name rely on that
/// invariant and return at most one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
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

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`DomusError::Validation`] if `id` is missing or `name` is
    /// missing or empty. Identifiers are assigned by the store, so a room
    /// cannot exist without one.
    pub fn build(self) -> Result<Room, DomusError> {
        let room = Room {
            id: self.id.ok_or(ValidationError::MissingId)?,
            name: self.name.unwrap_or_default(),
        };
        room.validate()?;
        Ok(room)
    }
}
