//! # Icosphere
//!
//! Recursive 1-to-4 subdivision of a regular icosahedron. Edge midpoints are
//! shared between the two faces of an edge through a cache keyed by the
//! sorted endpoint pair, so `k` levels give `10 · 4^k + 2` vertices and
//! `20 · 4^k` faces.

use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::topology::CellKind;
use crate::validate;
use config::constants::{DEFAULT_SUBDIVISIONS, GOLDEN_RATIO};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Options for [`create_icosphere`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IcosphereOptions {
    pub radius: f64,
    /// Subdivision levels; each multiplies the face count by 4.
    pub subdivisions: u32,
}

impl Default for IcosphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

impl IcosphereOptions {
    /// Checks every field before generation, including the vertex budget.
    pub fn validate(&self) -> MeshResult<()> {
        validate::positive("radius", self.radius)?;
        validate::vertex_budget(vertex_count(self.subdivisions))?;
        Ok(())
    }
}

/// `10 · 4^k + 2`, or `None` on overflow.
fn vertex_count(subdivisions: u32) -> Option<u64> {
    4u64.checked_pow(subdivisions)
        .and_then(|n| n.checked_mul(10))
        .and_then(|n| n.checked_add(2))
}

const FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron() -> Vec<DVec3> {
    let t = GOLDEN_RATIO;
    vec![
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(DVec3::normalize)
    .collect()
}

/// Per-call midpoint cache. Lives only for one [`create_icosphere`] call.
struct Subdivider {
    positions: Vec<DVec3>,
    midpoints: HashMap<u64, u32>,
}

impl Subdivider {
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = (u64::from(a.min(b)) << 32) | u64::from(a.max(b));
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }
        let index = self.positions.len() as u32;
        let mid = (self.positions[a as usize] + self.positions[b as usize]) * 0.5;
        self.positions.push(mid);
        self.midpoints.insert(key, index);
        index
    }

    fn subdivide(&mut self, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
        let mut next = Vec::with_capacity(faces.len() * 4);
        for &[a, b, c] in faces {
            let ab = self.midpoint(a, b);
            let bc = self.midpoint(b, c);
            let ca = self.midpoint(c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        next
    }
}

/// Creates a sphere by subdividing an icosahedron.
///
/// Positions are projected onto the sphere after the last level. UVs come
/// from longitude and latitude; the seam is not split, and the poles (if any
/// vertex lands there) take `u = 0.5`.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::sphere::{create_icosphere, IcosphereOptions};
///
/// let sphere = create_icosphere(&IcosphereOptions { radius: 1.0, subdivisions: 1 }).unwrap();
/// assert_eq!(sphere.vertex_count(), 42);
/// assert_eq!(sphere.cell_count(), 80);
/// ```
pub fn create_icosphere(options: &IcosphereOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;

    let mut subdivider = Subdivider {
        positions: icosahedron(),
        midpoints: HashMap::new(),
    };
    let mut faces = FACES.to_vec();
    for level in 1..=options.subdivisions {
        faces = subdivider.subdivide(&faces);
        tracing::trace!(
            level,
            faces = faces.len(),
            vertices = subdivider.positions.len(),
            "subdivided icosphere"
        );
    }

    let positions = subdivider.positions;
    let mut mesh = MeshBuilder::with_capacity(positions.len(), CellKind::Triangles);
    for p in positions {
        let normal = p.normalize();
        mesh.add_vertex(normal * options.radius, normal, spherical_uv(normal));
    }
    let cells: Vec<u32> = faces.iter().flatten().copied().collect();
    mesh.extend_cells(&cells);
    mesh.build("icosphere")
}

/// Longitude and latitude of a unit vector mapped to `[0, 1]²`.
pub(crate) fn spherical_uv(n: DVec3) -> DVec2 {
    let v = 0.5 + n.y.clamp(-1.0, 1.0).asin() / PI;
    let horizontal = DVec2::new(n.x, n.z);
    let u = if horizontal.length_squared() < 1e-24 {
        0.5
    } else {
        0.5 + n.z.atan2(n.x) / (2.0 * PI)
    };
    DVec2::new(u, v)
}
