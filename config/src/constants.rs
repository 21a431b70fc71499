//! # Geometry Constants
//!
//! Centralized constants for the primitive geometry kernel. All default
//! tessellation counts, precision values and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Geometry**: Mathematical constants shared by the builders

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for deciding whether an angular range covers a full turn and whether
/// a vertex sits on a pole.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of angular samples for profiles and solids of revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_SEGMENTS), 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default number of samples around the tube of a torus.
pub const DEFAULT_MINOR_SEGMENTS: u32 = 16;

/// Default number of latitude bands in one hemispherical capsule cap.
pub const DEFAULT_CAP_SEGMENTS: u32 = 8;

/// Default number of icosahedron subdivision levels.
///
/// Two levels give 320 faces and 162 vertices.
pub const DEFAULT_SUBDIVISIONS: u32 = 2;

/// Default ratio between the inner and outer profile of an annulus.
pub const DEFAULT_INNER_RATIO: f64 = 0.5;

/// Minimum number of samples a closed profile needs to enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_PROFILE_SEGMENTS;
///
/// let requested = 2;
/// assert!(requested < MIN_PROFILE_SEGMENTS);
/// ```
pub const MIN_PROFILE_SEGMENTS: u32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated complex.
///
/// Safety limit to prevent memory exhaustion from runaway segment or
/// subdivision counts. Checked before any buffer is allocated.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// // Seven icosphere subdivisions stay inside the limit.
/// let seven_levels = 10 * 4u64.pow(7) + 2;
/// assert!(seven_levels < MAX_VERTICES as u64);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// One full turn in radians.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// The golden ratio, used for the icosahedron corner coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::GOLDEN_RATIO;
///
/// assert!((GOLDEN_RATIO * GOLDEN_RATIO - GOLDEN_RATIO - 1.0).abs() < 1e-12);
/// ```
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns true if an angular range covers a whole turn.
///
/// # Example
///
/// ```rust
/// use config::constants::{is_full_turn, FULL_TURN};
///
/// assert!(is_full_turn(FULL_TURN));
/// assert!(!is_full_turn(FULL_TURN / 2.0));
/// ```
#[inline]
pub fn is_full_turn(theta: f64) -> bool {
    approx_equal(theta, FULL_TURN) || theta > FULL_TURN
}
