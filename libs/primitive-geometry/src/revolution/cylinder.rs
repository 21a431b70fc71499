//! # Cylinder and Cone
//!
//! A straight sweep along +Y, centered on the origin. The cross-section is
//! any [`Mapping`], so squircle prisms come for free. A zero top radius
//! collapses the top ring into a single apex vertex.

use super::{lathe_budget, Lathe, Pole, Ring};
use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::profile::{sample_validated, Mapping, Profile};
use crate::topology::{fan_cells, CellKind, Winding};
use crate::validate;
use config::constants::{approx_zero, DEFAULT_SEGMENTS, FULL_TURN, MIN_PROFILE_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Options for [`create_cylinder`] and [`create_cone`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CylinderOptions {
    /// Bottom radius.
    pub radius: f64,
    /// Top radius. Cylinders default to `radius`, cones to 0.
    pub radius_top: Option<f64>,
    /// Length along +Y.
    pub height: f64,
    /// Columns around the axis.
    pub segments: u32,
    /// Rings along the axis.
    pub height_segments: u32,
    /// Close the ends with flat fans.
    pub caps: bool,
    /// Duplicate the seam column so `u` reaches 1.0.
    pub closed: bool,
    /// Emit quad cells. Not available with caps or an apex.
    pub quads: bool,
    /// Cross-section shape.
    pub cross_section: Mapping,
    /// Lamé exponent override for the cross-section.
    pub m: Option<f64>,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            radius_top: None,
            height: 1.0,
            segments: DEFAULT_SEGMENTS,
            height_segments: 1,
            caps: true,
            closed: false,
            quads: false,
            cross_section: Mapping::Ellipse,
            m: None,
        }
    }
}

impl CylinderOptions {
    /// Checks every field, given the resolved top radius.
    fn validate_with_top(&self, radius_top: f64) -> MeshResult<()> {
        validate::positive("radius", self.radius)?;
        validate::non_negative("radiusTop", radius_top)?;
        validate::positive("height", self.height)?;
        validate::at_least("segments", self.segments, MIN_PROFILE_SEGMENTS)?;
        validate::at_least("heightSegments", self.height_segments, 1)?;
        if let Some(m) = self.m {
            validate::positive("m", m)?;
        }
        validate::no_quad_fans("quads", self.quads, self.caps || approx_zero(radius_top))?;
        self.vertex_count(radius_top)?;
        Ok(())
    }

    /// Lateral rings and poles, then the duplicated cap rings and centers.
    fn vertex_count(&self, radius_top: f64) -> MeshResult<u64> {
        let apex = approx_zero(radius_top);
        let stacks = u64::from(self.height_segments);
        let ring_count = if apex { stacks } else { stacks + 1 };
        let caps: u64 = match (self.caps, apex) {
            (false, _) => 0,
            (true, true) => 1,
            (true, false) => 2,
        };
        let lateral = lathe_budget(self.segments, self.closed, ring_count, u32::from(apex))?;
        let cap_ring = u64::from(self.segments) + u64::from(self.closed) + 1;
        validate::vertex_budget(caps.checked_mul(cap_ring).and_then(|n| n.checked_add(lateral)))
    }

    /// Checks every field for a cylinder.
    pub fn validate(&self) -> MeshResult<()> {
        self.validate_with_top(self.radius_top.unwrap_or(self.radius))
    }
}

/// Creates a cylinder (or frustum when `radius_top` differs from `radius`).
///
/// # Example
///
/// ```rust
/// use primitive_geometry::revolution::{create_cylinder, CylinderOptions};
///
/// let options = CylinderOptions { segments: 4, caps: false, ..Default::default() };
/// let tube = create_cylinder(&options).unwrap();
/// assert_eq!(tube.vertex_count(), 8);
/// assert_eq!(tube.cell_count(), 8);
/// ```
pub fn create_cylinder(options: &CylinderOptions) -> MeshResult<SimplicialComplex> {
    let radius_top = options.radius_top.unwrap_or(options.radius);
    sweep(options, radius_top, "cylinder")
}

/// Creates a cone; `radius_top` defaults to 0, giving a single apex vertex.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::revolution::{create_cone, CylinderOptions};
///
/// let options = CylinderOptions { segments: 4, caps: false, ..Default::default() };
/// let cone = create_cone(&options).unwrap();
/// assert_eq!(cone.vertex_count(), 5);
/// assert_eq!(cone.cell_count(), 4);
/// ```
pub fn create_cone(options: &CylinderOptions) -> MeshResult<SimplicialComplex> {
    let radius_top = options.radius_top.unwrap_or(0.0);
    sweep(options, radius_top, "cone")
}

fn sweep(
    options: &CylinderOptions,
    radius_top: f64,
    primitive: &'static str,
) -> MeshResult<SimplicialComplex> {
    options.validate_with_top(radius_top)?;
    // Cap rings duplicate the end rings so their normals stay flat.
    let count = options.vertex_count(radius_top)?;
    let apex = approx_zero(radius_top);
    let stacks = options.height_segments;
    let ring_count = if apex { stacks } else { stacks + 1 };

    let section = sample_validated(
        options.cross_section,
        &options.cross_section.params(1.0, 1.0, options.m),
        options.segments,
        FULL_TURN,
        0.0,
        options.closed,
    );

    let (h, r0) = (options.height, options.radius);
    let half = h / 2.0;
    // Normal of the lateral surface in the (radial, vertical) half plane.
    let slope = DVec2::new(h, r0 - radius_top);
    let rings = (0..ring_count).map(|k| {
        let t = f64::from(k) / f64::from(stacks);
        Ring {
            radius: r0 + (radius_top - r0) * t,
            y: -half + h * t,
            slope,
            v: t,
        }
    });

    let mut lathe = Lathe::new(&section).rings(rings);
    if apex {
        lathe = lathe.top_pole(Pole {
            y: half,
            normal: DVec3::Y,
            v: 1.0,
        });
    }

    let kind = CellKind::from_quads(options.quads);
    let mut mesh = MeshBuilder::with_capacity(count as usize, kind);
    lathe.build_into(&mut mesh);

    if options.caps {
        add_cap(&mut mesh, &section, r0, -half, false);
        if !apex {
            add_cap(&mut mesh, &section, radius_top, half, true);
        }
    }

    mesh.build(primitive)
}

/// Flat fan closing one end. The top cap faces +Y, the bottom cap -Y.
fn add_cap(mesh: &mut MeshBuilder, section: &Profile, radius: f64, y: f64, top: bool) {
    let normal = if top { DVec3::Y } else { DVec3::NEG_Y };
    let center = mesh.add_vertex(DVec3::new(0.0, y, 0.0), normal, DVec2::splat(0.5));

    let ring: Vec<u32> = section
        .points()
        .iter()
        .map(|q| {
            let uv = DVec2::new(0.5 + 0.5 * q.x, 0.5 + 0.5 * q.y);
            mesh.add_vertex(DVec3::new(radius * q.x, y, radius * q.y), normal, uv)
        })
        .collect();

    let winding = if top {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    };
    mesh.extend_cells(&fan_cells(center, &ring, section.is_periodic(), winding));
}
