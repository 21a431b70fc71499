//! # Capsule
//!
//! A cylindrical body of length `height` with a hemisphere on each end. The
//! hemispheres are latitude rings from the equator to a pole vertex, and
//! their equators are the body's end rings.

use super::{lathe_budget, latitude_ring, Lathe, Pole, Ring};
use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::profile::{sample_validated, Mapping};
use crate::topology::CellKind;
use crate::validate;
use config::constants::{DEFAULT_CAP_SEGMENTS, DEFAULT_SEGMENTS, FULL_TURN, MIN_PROFILE_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Options for [`create_capsule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CapsuleOptions {
    /// Radius of the body and both hemispheres.
    pub radius: f64,
    /// Length of the cylindrical body; total length is `height + 2 * radius`.
    pub height: f64,
    /// Columns around the axis.
    pub segments: u32,
    /// Latitude bands per hemisphere.
    pub cap_segments: u32,
    /// Rings along the body.
    pub height_segments: u32,
    /// Duplicate the seam column so `u` reaches 1.0.
    pub closed: bool,
}

impl Default for CapsuleOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            segments: DEFAULT_SEGMENTS,
            cap_segments: DEFAULT_CAP_SEGMENTS,
            height_segments: 1,
            closed: false,
        }
    }
}

impl CapsuleOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("radius", self.radius)?;
        validate::positive("height", self.height)?;
        validate::at_least("segments", self.segments, MIN_PROFILE_SEGMENTS)?;
        validate::at_least("capSegments", self.cap_segments, 1)?;
        validate::at_least("heightSegments", self.height_segments, 1)?;
        self.vertex_count()?;
        Ok(())
    }

    fn vertex_count(&self) -> MeshResult<u64> {
        // Both equators plus the body's interior rings and each cap's interior rings.
        let rings = 2 * u64::from(self.cap_segments) + u64::from(self.height_segments) - 1;
        lathe_budget(self.segments, self.closed, rings, 2)
    }
}

/// Creates a capsule along +Y, centered on the origin.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::revolution::{create_capsule, CapsuleOptions};
///
/// let options = CapsuleOptions { segments: 8, cap_segments: 2, ..Default::default() };
/// let capsule = create_capsule(&options).unwrap();
/// // 4 rings of 8 plus 2 poles
/// assert_eq!(capsule.vertex_count(), 34);
/// ```
pub fn create_capsule(options: &CapsuleOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    let count = options.vertex_count()?;

    let section = sample_validated(
        Mapping::Ellipse,
        &Mapping::Ellipse.params(1.0, 1.0, None),
        options.segments,
        FULL_TURN,
        0.0,
        options.closed,
    );

    let (r, h) = (options.radius, options.height);
    let half = h / 2.0;
    let total = h + 2.0 * r;
    let v_at = |y: f64| (y + half + r) / total;
    let caps = f64::from(options.cap_segments);

    // Bottom hemisphere up to and including its equator.
    let bottom = (1..=options.cap_segments).map(|i| {
        let beta = -FRAC_PI_2 + FRAC_PI_2 * f64::from(i) / caps;
        let ring = latitude_ring(r, -half, beta, 0.0);
        Ring { v: v_at(ring.y), ..ring }
    });
    // Body rings above the bottom equator, up to and including the top equator.
    let body = (1..=options.height_segments).map(|k| {
        let y = -half + h * f64::from(k) / f64::from(options.height_segments);
        Ring {
            radius: r,
            y,
            slope: DVec2::X,
            v: v_at(y),
        }
    });
    // Top hemisphere above its equator.
    let top = (1..options.cap_segments).map(|i| {
        let beta = FRAC_PI_2 * f64::from(i) / caps;
        let ring = latitude_ring(r, half, beta, 0.0);
        Ring { v: v_at(ring.y), ..ring }
    });

    let lathe = Lathe::new(&section)
        .rings(bottom.chain(body).chain(top))
        .bottom_pole(Pole {
            y: -half - r,
            normal: DVec3::NEG_Y,
            v: 0.0,
        })
        .top_pole(Pole {
            y: half + r,
            normal: DVec3::Y,
            v: 1.0,
        });

    let mut mesh = MeshBuilder::with_capacity(count as usize, CellKind::Triangles);
    lathe.build_into(&mut mesh);
    mesh.build("capsule")
}
