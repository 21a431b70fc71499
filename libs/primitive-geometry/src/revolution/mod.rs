//! # Solids of Revolution
//!
//! Sweeps a cross-section profile along a path. Cylinders, cones, capsules
//! and latitude/longitude spheres share one lathe: a stack of rings around
//! the +Y axis with optional single-vertex poles. The torus sweeps around a
//! circle and has its own doubly periodic grid.
//!
//! ## Lathe layout
//!
//! Vertices are emitted bottom pole, rings from bottom to top, top pole.
//! Within a ring, column `c` sits at angle `φ` with `x = cos φ`, `z = sin φ`.

pub mod capsule;
pub mod cylinder;
pub mod torus;

pub use capsule::{create_capsule, CapsuleOptions};
pub use cylinder::{create_cone, create_cylinder, CylinderOptions};
pub use torus::{create_torus, TorusOptions};

use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::profile::Profile;
use crate::topology::{fan_cells, grid_cells, GridLayout, Winding};
use crate::validate;
use glam::{DVec2, DVec3};

/// One horizontal ring of a lathe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ring {
    /// Scale applied to the cross-section.
    pub radius: f64,
    /// Height of the ring.
    pub y: f64,
    /// Surface normal in the (radial, vertical) half plane.
    pub slope: DVec2,
    /// Texture coordinate along the axis.
    pub v: f64,
}

/// A single vertex closing a lathe on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pole {
    pub y: f64,
    pub normal: DVec3,
    pub v: f64,
}

/// Ring stack swept around +Y.
#[derive(Debug, Clone)]
pub(crate) struct Lathe<'a> {
    section: &'a Profile,
    rings: Vec<Ring>,
    bottom: Option<Pole>,
    top: Option<Pole>,
    scale: DVec3,
}

impl<'a> Lathe<'a> {
    pub fn new(section: &'a Profile) -> Self {
        Self {
            section,
            rings: Vec::new(),
            bottom: None,
            top: None,
            scale: DVec3::ONE,
        }
    }

    pub fn rings(mut self, rings: impl IntoIterator<Item = Ring>) -> Self {
        self.rings.extend(rings);
        self
    }

    pub fn bottom_pole(mut self, pole: Pole) -> Self {
        self.bottom = Some(pole);
        self
    }

    pub fn top_pole(mut self, pole: Pole) -> Self {
        self.top = Some(pole);
        self
    }

    /// Non-uniform scale; normals follow the inverse transpose.
    pub fn scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.rings.len() * self.section.len()
            + usize::from(self.bottom.is_some())
            + usize::from(self.top.is_some())
    }

    /// Emits vertices and cells. Rings are stitched clockwise in parameter
    /// space, which is outward for this layout.
    pub fn build_into(&self, mesh: &mut MeshBuilder) {
        let bottom = self.bottom.map(|pole| self.add_pole(mesh, pole));

        let base = mesh.vertex_count() as u32;
        let points = self.section.points();
        let normals = self.section.normals();
        let params = self.section.params();
        for ring in &self.rings {
            for ((q, n), u) in points.iter().zip(&normals).zip(params) {
                let position = DVec3::new(ring.radius * q.x, ring.y, ring.radius * q.y);
                let normal = DVec3::new(
                    ring.slope.x * n.x,
                    ring.slope.y * q.dot(*n),
                    ring.slope.x * n.y,
                );
                mesh.add_vertex(
                    position * self.scale,
                    self.transform_normal(normal),
                    DVec2::new(*u, ring.v),
                );
            }
        }

        let top = self.top.map(|pole| self.add_pole(mesh, pole));

        let columns = self.section.spans() as u32;
        let periodic = self.section.is_periodic();
        if self.rings.len() > 1 {
            let layout = GridLayout::new(self.rings.len() as u32 - 1, columns)
                .wrap_columns(periodic)
                .with_base(base);
            mesh.extend_cells(&grid_cells(&layout, Winding::Clockwise, mesh.kind()));
        }

        let width = self.section.len() as u32;
        if let Some(pole) = bottom {
            let ring: Vec<u32> = (base..base + width).collect();
            mesh.extend_cells(&fan_cells(pole, &ring, periodic, Winding::CounterClockwise));
        }
        if let (Some(pole), Some(last)) = (top, self.rings.len().checked_sub(1)) {
            let start = base + last as u32 * width;
            let ring: Vec<u32> = (start..start + width).collect();
            mesh.extend_cells(&fan_cells(pole, &ring, periodic, Winding::Clockwise));
        }
    }

    fn add_pole(&self, mesh: &mut MeshBuilder, pole: Pole) -> u32 {
        mesh.add_vertex(
            DVec3::new(0.0, pole.y, 0.0) * self.scale,
            self.transform_normal(pole.normal),
            DVec2::new(0.5, pole.v),
        )
    }

    fn transform_normal(&self, normal: DVec3) -> DVec3 {
        (normal / self.scale).normalize_or_zero()
    }
}

/// Predicts a lathe's vertex count from its options, before sampling.
pub(crate) fn lathe_budget(segments: u32, closed: bool, rings: u64, poles: u32) -> MeshResult<u64> {
    let columns = u64::from(segments) + u64::from(closed);
    validate::vertex_budget(
        rings
            .checked_mul(columns)
            .and_then(|n| n.checked_add(u64::from(poles))),
    )
}

/// Latitude ring on a sphere of `radius` centered at `center_y`, at angle
/// `beta` from the equator.
pub(crate) fn latitude_ring(radius: f64, center_y: f64, beta: f64, v: f64) -> Ring {
    let (sin, cos) = beta.sin_cos();
    Ring {
        radius: radius * cos,
        y: center_y + radius * sin,
        slope: DVec2::new(cos, sin),
        v,
    }
}
