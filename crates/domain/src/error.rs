//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`DomusError`]
//! via `#[from]` (or an explicit `From` impl for boxed storage errors).

/// Top-level error for all domus operations.
#[derive(Debug, thiserror::Error)]
pub enum DomusError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup by identifier matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed (connectivity, malformed query, schema).
    /// Propagated verbatim to the caller; no recovery is attempted.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations reported by builders and `validate` methods.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A `name` field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// An identifier was required but not provided.
    #[error("identifier must be provided")]
    MissingId,

    /// A device kind was required but not provided.
    #[error("device kind must be provided")]
    MissingKind,

    /// A measurement was built without a device reference.
    #[error("device reference must be provided")]
    MissingDevice,
}

/// A lookup by identifier found no matching record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (`"Room"`, `"Device"`, …).
    pub entity: &'static str,
    /// The identifier that matched nothing.
    pub id: String,
}
