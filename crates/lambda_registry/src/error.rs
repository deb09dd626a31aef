//! Registry-level errors.

use std::fmt;

/// Errors `register` and the `.morph` loader can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `register` was called with a hash already present whose content
    /// differs from the incoming morphism's definition.
    RegistryConflict { hash: String },
    /// A morphism failed to parse or violated the fixed `.morph` format.
    InvalidMorphism { reason: String },
    /// A registry identifier was referenced but is absent from the registry.
    UnknownIdentifier { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::RegistryConflict { hash } => {
                write!(f, "registry conflict: hash {} already present with different content", hash)
            }
            RegistryError::InvalidMorphism { reason } => write!(f, "invalid morphism: {}", reason),
            RegistryError::UnknownIdentifier { name } => write!(f, "unknown identifier: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
