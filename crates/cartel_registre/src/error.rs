//! Error types for registry loading.
//!
//! Queries against a built registry never fail. Only turning an external
//! snapshot into a [`Registry`](crate::Registry) can.

use cartel_carton::CompactString;

/// Error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Two containers share an id.
    #[error("Duplicate container id `{0}`")]
    DuplicateContainer(CompactString),

    /// Two components share an id.
    #[error("Duplicate component id `{0}`")]
    DuplicateComponent(CompactString),

    /// A container id is referenced but never declared.
    #[error("Unknown container `{id}` referenced by {referrer}")]
    UnknownContainer {
        id: CompactString,
        referrer: CompactString,
    },

    /// A registration points at an undeclared component.
    #[error("Unknown component `{id}` registered as `{name}`")]
    UnknownComponent {
        id: CompactString,
        name: CompactString,
    },
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;
