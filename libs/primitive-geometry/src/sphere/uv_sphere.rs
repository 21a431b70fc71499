//! # Latitude/Longitude Spheres
//!
//! Spheres and ellipsoids built on the lathe: `rings` latitude bands between
//! two single pole vertices.

use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::profile::{sample_validated, Mapping};
use crate::revolution::{lathe_budget, latitude_ring, Lathe, Pole};
use crate::topology::CellKind;
use crate::validate;
use config::constants::{DEFAULT_MINOR_SEGMENTS, DEFAULT_SEGMENTS, FULL_TURN, MIN_PROFILE_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Options for [`create_sphere`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SphereOptions {
    pub radius: f64,
    /// Columns around the axis.
    pub segments: u32,
    /// Latitude bands from pole to pole.
    pub rings: u32,
    /// Duplicate the seam column so `u` reaches 1.0.
    pub closed: bool,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: DEFAULT_SEGMENTS,
            rings: DEFAULT_MINOR_SEGMENTS,
            closed: false,
        }
    }
}

impl SphereOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("radius", self.radius)?;
        validate_tessellation(self.segments, self.rings, self.closed)
    }
}

/// Options for [`create_ellipsoid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EllipsoidOptions {
    /// Semi-axis along X.
    pub sx: f64,
    /// Semi-axis along Y (the pole axis).
    pub sy: f64,
    /// Semi-axis along Z.
    pub sz: f64,
    pub segments: u32,
    pub rings: u32,
    pub closed: bool,
}

impl Default for EllipsoidOptions {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 0.5,
            sz: 1.0,
            segments: DEFAULT_SEGMENTS,
            rings: DEFAULT_MINOR_SEGMENTS,
            closed: false,
        }
    }
}

impl EllipsoidOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("sx", self.sx)?;
        validate::positive("sy", self.sy)?;
        validate::positive("sz", self.sz)?;
        validate_tessellation(self.segments, self.rings, self.closed)
    }
}

fn validate_tessellation(segments: u32, rings: u32, closed: bool) -> MeshResult<()> {
    validate::at_least("segments", segments, MIN_PROFILE_SEGMENTS)?;
    validate::at_least("rings", rings, 2)?;
    lathe_budget(segments, closed, u64::from(rings) - 1, 2)?;
    Ok(())
}

/// Creates a latitude/longitude sphere around +Y.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::sphere::{create_sphere, SphereOptions};
///
/// let options = SphereOptions { segments: 8, rings: 4, ..Default::default() };
/// let sphere = create_sphere(&options).unwrap();
/// assert_eq!(sphere.vertex_count(), 3 * 8 + 2);
/// ```
pub fn create_sphere(options: &SphereOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    globe(
        options.segments,
        options.rings,
        options.closed,
        DVec3::splat(options.radius),
        "sphere",
    )
}

/// Creates an axis-aligned ellipsoid. Normals follow the surface gradient.
pub fn create_ellipsoid(options: &EllipsoidOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    globe(
        options.segments,
        options.rings,
        options.closed,
        DVec3::new(options.sx, options.sy, options.sz),
        "ellipsoid",
    )
}

/// Unit sphere lathe scaled by `scale`.
fn globe(
    segments: u32,
    rings: u32,
    closed: bool,
    scale: DVec3,
    primitive: &'static str,
) -> MeshResult<SimplicialComplex> {
    let count = lathe_budget(segments, closed, u64::from(rings) - 1, 2)?;
    let section = sample_validated(
        Mapping::Ellipse,
        &Mapping::Ellipse.params(1.0, 1.0, None),
        segments,
        FULL_TURN,
        0.0,
        closed,
    );

    let bands = f64::from(rings);
    let latitudes = (1..rings).map(|i| {
        let t = f64::from(i) / bands;
        latitude_ring(1.0, 0.0, -FRAC_PI_2 + PI * t, t)
    });

    let lathe = Lathe::new(&section)
        .rings(latitudes)
        .bottom_pole(Pole {
            y: -1.0,
            normal: DVec3::NEG_Y,
            v: 0.0,
        })
        .top_pole(Pole {
            y: 1.0,
            normal: DVec3::Y,
            v: 1.0,
        })
        .scale(scale);

    let mut mesh = MeshBuilder::with_capacity(count as usize, CellKind::Triangles);
    lathe.build_into(&mut mesh);
    mesh.build(primitive)
}
