//! # Torus
//!
//! A circle of `minor_radius` swept around a circle of `major_radius` in the
//! XZ plane. Rows follow the path angle `u`, columns the section angle `v`:
//!
//! ```text
//! p(u, v) = (R + r cos v) (cos u, 0, sin u) + r sin v · Y
//! ```

use crate::complex::SimplicialComplex;
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuilder;
use crate::topology::{grid_cells, CellKind, GridLayout, Winding};
use crate::validate;
use config::constants::{
    is_full_turn, DEFAULT_MINOR_SEGMENTS, DEFAULT_SEGMENTS, FULL_TURN, MIN_PROFILE_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Options for [`create_torus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TorusOptions {
    /// Radius of the sweep path.
    pub major_radius: f64,
    /// Radius of the cross-section.
    pub minor_radius: f64,
    /// Spans around the cross-section.
    pub segments: u32,
    /// Spans along the sweep path.
    pub path_segments: u32,
    /// Swept angle in radians; less than a full turn leaves open ends.
    pub arc: f64,
    /// Duplicate the seam row and column so UVs reach 1.0.
    pub closed: bool,
    /// Emit quad cells.
    pub quads: bool,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            segments: DEFAULT_MINOR_SEGMENTS,
            path_segments: DEFAULT_SEGMENTS,
            arc: FULL_TURN,
            closed: false,
            quads: false,
        }
    }
}

impl TorusOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        let major = validate::positive("majorRadius", self.major_radius)?;
        let minor = validate::positive("minorRadius", self.minor_radius)?;
        if minor >= major {
            return Err(MeshError::invalid_parameter(
                "minorRadius",
                format!("must be smaller than majorRadius ({}), got {}", major, minor),
            ));
        }
        validate::at_least("segments", self.segments, MIN_PROFILE_SEGMENTS)?;
        validate::at_least("pathSegments", self.path_segments, MIN_PROFILE_SEGMENTS)?;
        validate::angle_range("arc", self.arc)?;
        self.vertex_count()?;
        Ok(())
    }

    fn vertex_count(&self) -> MeshResult<u64> {
        let rows = u64::from(self.path_segments) + u64::from(self.closed || !is_full_turn(self.arc));
        let columns = u64::from(self.segments) + u64::from(self.closed);
        validate::vertex_budget(rows.checked_mul(columns))
    }

    fn layout(&self) -> GridLayout {
        GridLayout::new(self.path_segments, self.segments)
            .wrap_rows(is_full_turn(self.arc) && !self.closed)
            .wrap_columns(!self.closed)
    }
}

/// Creates a torus around +Y, centered on the origin.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::revolution::{create_torus, TorusOptions};
///
/// let options = TorusOptions {
///     major_radius: 2.0,
///     minor_radius: 1.0,
///     segments: 4,
///     path_segments: 4,
///     quads: true,
///     ..Default::default()
/// };
/// let torus = create_torus(&options).unwrap();
/// assert_eq!(torus.vertex_count(), 16);
/// assert_eq!(torus.cell_count(), 16);
/// ```
pub fn create_torus(options: &TorusOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    let count = options.vertex_count()?;
    let layout = options.layout();

    let kind = CellKind::from_quads(options.quads);
    let mut mesh = MeshBuilder::with_capacity(count as usize, kind);
    let (major, minor) = (options.major_radius, options.minor_radius);
    let path_spans = f64::from(options.path_segments);
    let section_spans = f64::from(options.segments);

    for row in 0..layout.vertex_rows() {
        let s = f64::from(row) / path_spans;
        let (sin_u, cos_u) = (options.arc * s).sin_cos();
        let direction = DVec3::new(cos_u, 0.0, sin_u);

        for column in 0..layout.vertex_columns() {
            let t = f64::from(column) / section_spans;
            let (sin_v, cos_v) = (FULL_TURN * t).sin_cos();
            let normal = direction * cos_v + DVec3::Y * sin_v;
            let position = direction * major + normal * minor;
            mesh.add_vertex(position, normal, DVec2::new(s, t));
        }
    }

    mesh.extend_cells(&grid_cells(&layout, Winding::CounterClockwise, kind));
    mesh.build("torus")
}
