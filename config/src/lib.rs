//! # Config Crate
//!
//! Centralized configuration constants for the primitive geometry kernel.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SEGMENTS, MIN_PROFILE_SEGMENTS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Use resolution defaults for tessellation
//! let segments: Option<u32> = None;
//! let segments = segments.unwrap_or(DEFAULT_SEGMENTS);
//! assert!(segments >= MIN_PROFILE_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **GPU-Friendly**: Limits keep index buffers addressable with 32 bits
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
