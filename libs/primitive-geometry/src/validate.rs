//! # Parameter Validation
//!
//! Shared checks used by every options struct before generation starts.

use crate::error::{MeshError, MeshResult};
use config::constants::{is_full_turn, FULL_TURN, MAX_VERTICES};

/// Rejects non-finite and non-positive values.
pub(crate) fn positive(name: &'static str, value: f64) -> MeshResult<f64> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}

/// Rejects non-finite and negative values.
pub(crate) fn non_negative(name: &'static str, value: f64) -> MeshResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be finite and non-negative, got {}", value),
        ));
    }
    Ok(value)
}

/// Rejects non-finite values.
pub(crate) fn finite(name: &'static str, value: f64) -> MeshResult<f64> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(value)
}

/// Rejects counts below `min`.
pub(crate) fn at_least(name: &'static str, value: u32, min: u32) -> MeshResult<u32> {
    if value < min {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be at least {}, got {}", min, value),
        ));
    }
    Ok(value)
}

/// Validates an angular range: positive and at most one full turn.
pub(crate) fn angle_range(name: &'static str, theta: f64) -> MeshResult<f64> {
    positive(name, theta)?;
    if theta > FULL_TURN && !is_full_turn(theta) {
        return Err(MeshError::invalid_parameter(
            name,
            format!("must not exceed a full turn, got {}", theta),
        ));
    }
    Ok(theta.min(FULL_TURN))
}

/// Rejects quad cells for topologies that need triangle fans.
pub(crate) fn no_quad_fans(name: &'static str, quads: bool, has_fan: bool) -> MeshResult<()> {
    if quads && has_fan {
        return Err(MeshError::invalid_parameter(
            name,
            "quad cells cannot represent fan-triangulated caps or apexes",
        ));
    }
    Ok(())
}

/// Checks a predicted vertex count against [`MAX_VERTICES`].
///
/// Callers compute the count with checked arithmetic; `None` means it overflowed.
pub(crate) fn vertex_budget(count: Option<u64>) -> MeshResult<u64> {
    match count {
        Some(count) if count <= MAX_VERTICES as u64 => Ok(count),
        Some(count) => Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        }),
        None => Err(MeshError::TooManyVertices {
            count: u64::MAX,
            max: MAX_VERTICES,
        }),
    }
}
