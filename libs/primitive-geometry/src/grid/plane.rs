//! Planes and quads in the XY plane, centered on the origin, facing +Z.

use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::topology::{grid_cells, CellKind, GridLayout, Winding};
use crate::validate;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Options for [`create_plane`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaneOptions {
    /// Width along X.
    pub sx: f64,
    /// Height along Y.
    pub sy: f64,
    /// Cells along X.
    pub nx: u32,
    /// Cells along Y.
    pub ny: u32,
    pub quads: bool,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            nx: 1,
            ny: 1,
            quads: false,
        }
    }
}

impl PlaneOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("sx", self.sx)?;
        validate::positive("sy", self.sy)?;
        validate::at_least("nx", self.nx, 1)?;
        validate::at_least("ny", self.ny, 1)?;
        let columns = u64::from(self.nx) + 1;
        let rows = u64::from(self.ny) + 1;
        validate::vertex_budget(columns.checked_mul(rows))?;
        Ok(())
    }
}

/// Options for [`create_quad`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuadOptions {
    pub sx: f64,
    pub sy: f64,
    pub quads: bool,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            quads: false,
        }
    }
}

impl QuadOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("sx", self.sx)?;
        validate::positive("sy", self.sy)?;
        Ok(())
    }
}

/// Creates an `nx × ny` grid of `(nx + 1) × (ny + 1)` vertices.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::grid::{create_plane, PlaneOptions};
///
/// let options = PlaneOptions { nx: 2, ny: 3, quads: true, ..Default::default() };
/// let plane = create_plane(&options).unwrap();
/// assert_eq!(plane.vertex_count(), 12);
/// assert_eq!(plane.cell_count(), 6);
/// ```
pub fn create_plane(options: &PlaneOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    plane(options, "plane")
}

/// Creates a single `sx × sy` quad (four vertices).
pub fn create_quad(options: &QuadOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    let plane_options = PlaneOptions {
        sx: options.sx,
        sy: options.sy,
        nx: 1,
        ny: 1,
        quads: options.quads,
    };
    plane(&plane_options, "quad")
}

fn plane(options: &PlaneOptions, primitive: &'static str) -> MeshResult<SimplicialComplex> {
    // Rows run along +Y and columns along +X, so CCW cells face +Z.
    let layout = GridLayout::new(options.ny, options.nx);
    let count = layout.vertex_rows() as usize * layout.vertex_columns() as usize;

    let kind = CellKind::from_quads(options.quads);
    let mut mesh = MeshBuilder::with_capacity(count, kind);
    for row in 0..layout.vertex_rows() {
        let v = f64::from(row) / f64::from(options.ny);
        for column in 0..layout.vertex_columns() {
            let u = f64::from(column) / f64::from(options.nx);
            let position = DVec3::new(options.sx * (u - 0.5), options.sy * (v - 0.5), 0.0);
            mesh.add_vertex(position, DVec3::Z, DVec2::new(u, v));
        }
    }

    mesh.extend_cells(&grid_cells(&layout, Winding::CounterClockwise, kind));
    mesh.build(primitive)
}
