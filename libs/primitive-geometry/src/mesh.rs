//! # Mesh Builder
//!
//! Accumulates vertices and cells for one builder call, then assembles the
//! immutable [`SimplicialComplex`].

use crate::complex::{ComplexParts, SimplicialComplex};
use crate::error::MeshResult;
use crate::topology::cells::push_quad;
use crate::topology::CellKind;
use glam::{DVec2, DVec3};

/// Per-call vertex and cell accumulator.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when the complex is assembled.
#[derive(Debug, Clone)]
pub(crate) struct MeshBuilder {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    cells: Vec<u32>,
    edges: Option<Vec<u32>>,
    kind: CellKind,
}

impl MeshBuilder {
    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, kind: CellKind) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            cells: Vec::new(),
            edges: None,
            kind,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Cell stride emitted by this builder.
    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a quad, split into two triangles unless the builder emits quads.
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        push_quad(&mut self.cells, [a, b, c, d], self.kind);
    }

    /// Appends pre-built cells of the builder's stride.
    pub fn extend_cells(&mut self, cells: &[u32]) {
        self.cells.extend_from_slice(cells);
    }

    /// Sets explicit edges (outlines have edges but no cells).
    pub fn set_edges(&mut self, edges: Vec<u32>) {
        self.edges = Some(edges);
    }

    /// Assembles the complex, validating indices and attribute lengths.
    pub fn build(self, primitive: &'static str) -> MeshResult<SimplicialComplex> {
        let parts = ComplexParts {
            positions: flatten3(&self.positions),
            cells: self.cells,
            normals: Some(flatten3(&self.normals)),
            uvs: Some(self.uvs.iter().flat_map(|uv| [uv.x as f32, uv.y as f32]).collect()),
            edges: self.edges,
            quads: self.kind == CellKind::Quads,
        };
        let complex = SimplicialComplex::from_parts(parts)?;

        tracing::debug!(
            primitive,
            vertices = complex.vertex_count(),
            cells = complex.cell_count(),
            stride = complex.cell_stride(),
            "generated simplicial complex"
        );
        Ok(complex)
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
