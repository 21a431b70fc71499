//! # Mesh Errors
//!
//! Error types for primitive generation and buffer utilities.
//!
//! ## Error Policy
//!
//! - Parameters are validated before any buffer is allocated
//! - A builder either returns a complete complex or an error, never a partial one
//! - Errors carry the offending parameter or attribute for debugging

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A builder option is outside its valid domain.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Attribute buffers disagree on vertex count or element width.
    #[error("Attribute {attribute} length mismatch: expected {expected} vertices, found {found}")]
    AttributeLengthMismatch {
        attribute: usize,
        expected: usize,
        found: usize,
    },

    /// An index references a vertex that does not exist.
    #[error("Index out of bounds: {index} (vertex count: {vertex_count})")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// Invalid cell topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: u64, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(parameter = name, %message, "rejected primitive parameter");
        Self::InvalidParameter { name, message }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("segments", "must be at least 3, got 2");
        assert!(err.to_string().contains("segments"));
        assert!(err.to_string().contains("at least 3"));

        let err = MeshError::AttributeLengthMismatch {
            attribute: 1,
            expected: 4,
            found: 3,
        };
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
