//! Axis-aligned box with shared corner vertices.

use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::topology::CellKind;
use crate::validate;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Options for [`create_box`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxOptions {
    pub sx: f64,
    pub sy: f64,
    pub sz: f64,
    pub quads: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            sz: 1.0,
            quads: false,
        }
    }
}

impl BoxOptions {
    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("sx", self.sx)?;
        validate::positive("sy", self.sy)?;
        validate::positive("sz", self.sz)?;
        Ok(())
    }
}

// Corner ordering:
// 0: (-, -, -)  1: (+, -, -)  2: (+, +, -)  3: (-, +, -)
// 4: (-, -, +)  5: (+, -, +)  6: (+, +, +)  7: (-, +, +)
const CORNERS: [[f64; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

// Counter-clockwise seen from outside.
const FACES: [[u32; 4]; 6] = [
    [0, 3, 2, 1], // -Z
    [4, 5, 6, 7], // +Z
    [0, 1, 5, 4], // -Y
    [2, 3, 7, 6], // +Y
    [3, 0, 4, 7], // -X
    [1, 2, 6, 5], // +X
];

/// Creates an `sx × sy × sz` box centered on the origin.
///
/// The eight corners are shared between faces, so each corner normal is the
/// average of its three face normals, `(±1, ±1, ±1) / √3`, whatever the
/// proportions of the box.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::grid::{create_box, BoxOptions};
///
/// let cube = create_box(&BoxOptions { quads: true, ..Default::default() }).unwrap();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.cell_count(), 6);
/// ```
pub fn create_box(options: &BoxOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    let size = DVec3::new(options.sx, options.sy, options.sz);

    let kind = CellKind::from_quads(options.quads);
    let mut mesh = MeshBuilder::with_capacity(CORNERS.len(), kind);
    for corner in CORNERS {
        let unit = DVec3::from_array(corner);
        let position = unit * size;
        let uv = DVec2::new(unit.x + 0.5, unit.y + 0.5);
        mesh.add_vertex(position, unit.signum().normalize(), uv);
    }
    for [a, b, c, d] in FACES {
        mesh.add_quad(a, b, c, d);
    }
    mesh.build("box")
}
