//! # Planar Profiles
//!
//! Samples a [`Mapping`] at uniform angles and turns the boundary into a
//! filled disc, an outline or a ring.
//!
//! ## Sampling
//!
//! `segments` spans cover `[theta_offset, theta_offset + theta]`:
//! - full turn, `closed`: `segments + 1` samples, the last duplicating the
//!   first so parameters run to 1.0 (seam)
//! - full turn, not `closed`: `segments` samples, the loop closes in topology
//! - partial arc: `segments + 1` samples including both ends

pub mod annulus;
pub mod mapping;
pub mod shapes;

pub use annulus::{create_annulus, AnnulusOptions};
pub use mapping::{Mapping, ShapeParams};
pub use shapes::{
    create_astroid, create_diamond, create_disc, create_ellipse, create_reuleux, create_shape,
    create_squircle, create_superellipse,
};

use crate::error::MeshResult;
use crate::validate;
use config::constants::{is_full_turn, DEFAULT_SEGMENTS, FULL_TURN, MIN_PROFILE_SEGMENTS};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Options shared by every planar profile.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::profile::ProfileOptions;
///
/// let options = ProfileOptions { segments: 8, sx: 2.0, ..Default::default() };
/// assert_eq!(options.sy(), 2.0); // sy defaults to sx
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileOptions {
    /// Number of spans along the boundary.
    pub segments: u32,
    /// Spans along the inner boundary of an annulus (defaults to `segments`).
    pub inner_segments: Option<u32>,
    /// Angular range in radians.
    pub theta: f64,
    /// Angle of the first sample in radians.
    pub theta_offset: f64,
    /// Lamé exponent override.
    pub m: Option<f64>,
    /// Horizontal scale.
    pub sx: f64,
    /// Vertical scale (defaults to `sx`).
    pub sy: Option<f64>,
    /// Fill the boundary with a fan around a centroid vertex.
    pub merge_centroid: bool,
    /// Duplicate the first sample at the end of a full turn.
    pub closed: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            inner_segments: None,
            theta: FULL_TURN,
            theta_offset: 0.0,
            m: None,
            sx: 1.0,
            sy: None,
            merge_centroid: false,
            closed: false,
        }
    }
}

impl ProfileOptions {
    /// Vertical scale, falling back to `sx`.
    pub fn sy(&self) -> f64 {
        self.sy.unwrap_or(self.sx)
    }

    /// Inner span count, falling back to `segments`.
    pub fn inner_segments(&self) -> u32 {
        self.inner_segments.unwrap_or(self.segments)
    }

    /// Resolved shape parameters for `mapping`.
    pub fn params(&self, mapping: Mapping) -> ShapeParams {
        mapping.params(self.sx, self.sy(), self.m)
    }

    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::at_least("segments", self.segments, MIN_PROFILE_SEGMENTS)?;
        if let Some(inner) = self.inner_segments {
            validate::at_least("innerSegments", inner, MIN_PROFILE_SEGMENTS)?;
        }
        validate::angle_range("theta", self.theta)?;
        validate::finite("thetaOffset", self.theta_offset)?;
        if let Some(m) = self.m {
            validate::positive("m", m)?;
        }
        validate::positive("sx", self.sx)?;
        validate::positive("sy", self.sy())?;
        // Boundary plus seam duplicate plus centroid.
        validate::vertex_budget(u64::from(self.segments).checked_add(2))?;
        Ok(())
    }
}

/// How the ends of a sampled boundary relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// Partial arc; the ends are distinct.
    Open,
    /// Full turn; the last sample connects back to the first.
    Periodic,
    /// Full turn; the last sample duplicates the first.
    Seam,
}

/// A sampled boundary curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
    angles: Vec<f64>,
    params: Vec<f64>,
    closure: Closure,
}

impl Profile {
    /// Boundary points in sample order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Sample angles in radians.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Normalized sample parameters in `[0, 1]`.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How the ends relate.
    pub fn closure(&self) -> Closure {
        self.closure
    }

    /// Returns true if topology must wrap the last sample to the first.
    pub fn is_periodic(&self) -> bool {
        self.closure == Closure::Periodic
    }

    /// Number of spans between consecutive samples.
    pub fn spans(&self) -> usize {
        match self.closure {
            Closure::Periodic => self.len(),
            Closure::Open | Closure::Seam => self.len().saturating_sub(1),
        }
    }

    /// Outward unit normals from central differences.
    ///
    /// Assumes counter-clockwise sampling, so the outward normal of tangent
    /// `t` is `(t.y, -t.x)`. Open ends use one-sided differences.
    pub fn normals(&self) -> Vec<DVec2> {
        let n = self.len();
        let unique = if self.closure == Closure::Seam { n - 1 } else { n };
        let wraps = self.closure != Closure::Open;

        let mut normals: Vec<DVec2> = (0..unique)
            .map(|i| {
                let (prev, next) = if wraps {
                    ((i + unique - 1) % unique, (i + 1) % unique)
                } else {
                    (i.saturating_sub(1), (i + 1).min(unique - 1))
                };
                let tangent = self.points[next] - self.points[prev];
                DVec2::new(tangent.y, -tangent.x).normalize_or_zero()
            })
            .collect();

        if self.closure == Closure::Seam {
            normals.push(normals[0]);
        }
        normals
    }
}

/// Samples `mapping` according to `options`.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::profile::{sample_profile, Mapping, ProfileOptions};
///
/// let options = ProfileOptions { segments: 4, ..Default::default() };
/// let profile = sample_profile(Mapping::Ellipse, &options).unwrap();
/// assert_eq!(profile.len(), 4);
/// assert!(profile.is_periodic());
/// ```
pub fn sample_profile(mapping: Mapping, options: &ProfileOptions) -> MeshResult<Profile> {
    options.validate()?;
    Ok(sample_validated(
        mapping,
        &options.params(mapping),
        options.segments,
        options.theta,
        options.theta_offset,
        options.closed,
    ))
}

/// Samples without validation; callers validate their own options first.
pub(crate) fn sample_validated(
    mapping: Mapping,
    params: &ShapeParams,
    segments: u32,
    theta: f64,
    theta_offset: f64,
    closed: bool,
) -> Profile {
    let closure = match (is_full_turn(theta), closed) {
        (true, true) => Closure::Seam,
        (true, false) => Closure::Periodic,
        (false, _) => Closure::Open,
    };
    let count = match closure {
        Closure::Periodic => segments as usize,
        Closure::Open | Closure::Seam => segments as usize + 1,
    };

    let mut points = Vec::with_capacity(count);
    let mut angles = Vec::with_capacity(count);
    let mut params_out = Vec::with_capacity(count);

    for i in 0..count {
        let t = i as f64 / segments as f64;
        let angle = theta_offset + theta * t;
        let point = if closure == Closure::Seam && i == segments as usize {
            points[0]
        } else {
            mapping.evaluate(angle, params)
        };
        points.push(point);
        angles.push(angle);
        params_out.push(t);
    }

    Profile {
        points,
        angles,
        params: params_out,
        closure,
    }
}

/// Planar UV centered at (0.5, 0.5): the `sx × sy` box maps onto `[0, 1]²`.
pub(crate) fn planar_uv(point: DVec2, sx: f64, sy: f64) -> DVec2 {
    DVec2::new(0.5 + 0.5 * point.x / sx, 0.5 + 0.5 * point.y / sy)
}
