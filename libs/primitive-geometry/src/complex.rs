//! # Simplicial Complex
//!
//! The single output type of every builder: flat, GPU-ready buffers whose
//! index bounds and attribute lengths are checked on construction.

use crate::error::{MeshError, MeshResult};
use crate::topology::{
    extract_edges, extract_unique_edges, index_width, interleave, Attribute, IndexBuffer,
    IndexWidth,
};
use serde::Serialize;

/// Raw buffers for assembling a [`SimplicialComplex`].
///
/// Indices are given as `u32` and narrowed on assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexParts {
    /// Flat `x, y, z` triples.
    pub positions: Vec<f32>,
    /// Flat cells, 3 or 4 indices each.
    pub cells: Vec<u32>,
    /// Flat unit normals, same layout as positions.
    pub normals: Option<Vec<f32>>,
    /// Flat `u, v` pairs.
    pub uvs: Option<Vec<f32>>,
    /// Flat index pairs.
    pub edges: Option<Vec<u32>>,
    /// Cells have stride 4.
    pub quads: bool,
}

/// A mesh as flat vertex buffers plus index buffers.
///
/// Immutable once returned: accessors only borrow, and transformations such
/// as [`SimplicialComplex::with_edges`] consume the value and return a new one.
/// All index buffers share the width chosen by [`index_width`].
///
/// # Example
///
/// ```rust
/// use primitive_geometry::{ComplexParts, SimplicialComplex};
///
/// let complex = SimplicialComplex::from_parts(ComplexParts {
///     positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     cells: vec![0, 1, 2],
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(complex.vertex_count(), 3);
/// assert_eq!(complex.cell_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplicialComplex {
    positions: Vec<f32>,
    cells: IndexBuffer,
    #[serde(skip_serializing_if = "Option::is_none")]
    normals: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uvs: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<IndexBuffer>,
    quads: bool,
}

impl SimplicialComplex {
    /// Validates raw buffers and assembles a complex.
    ///
    /// Checks:
    /// - positions form whole triples
    /// - normals and uvs match the vertex count
    /// - cells form whole faces and every index addresses a vertex
    /// - edges form whole pairs and every index addresses a vertex
    pub fn from_parts(parts: ComplexParts) -> MeshResult<Self> {
        if parts.positions.len() % 3 != 0 {
            return Err(MeshError::invalid_topology(format!(
                "position buffer length {} is not a multiple of 3",
                parts.positions.len()
            )));
        }
        let vertex_count = parts.positions.len() / 3;

        if let Some(normals) = &parts.normals {
            if normals.len() != parts.positions.len() {
                return Err(MeshError::AttributeLengthMismatch {
                    attribute: 1,
                    expected: vertex_count,
                    found: normals.len() / 3,
                });
            }
        }
        if let Some(uvs) = &parts.uvs {
            if uvs.len() != vertex_count * 2 {
                return Err(MeshError::AttributeLengthMismatch {
                    attribute: 2,
                    expected: vertex_count,
                    found: uvs.len() / 2,
                });
            }
        }

        let stride = if parts.quads { 4 } else { 3 };
        check_indices(&parts.cells, stride, vertex_count, "cell")?;
        if let Some(edges) = &parts.edges {
            check_indices(edges, 2, vertex_count, "edge")?;
        }

        let width = index_width(vertex_count);
        let cells = IndexBuffer::with_width(&parts.cells, width)?;
        let edges = parts
            .edges
            .as_deref()
            .map(|edges| IndexBuffer::with_width(edges, width))
            .transpose()?;

        Ok(Self {
            positions: parts.positions,
            cells,
            normals: parts.normals,
            uvs: parts.uvs,
            edges,
            quads: parts.quads,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len() / self.cell_stride()
    }

    /// Indices per cell: 4 for quads, otherwise 3.
    #[inline]
    pub fn cell_stride(&self) -> usize {
        if self.quads {
            4
        } else {
            3
        }
    }

    /// Returns true if cells are quads.
    #[inline]
    pub fn is_quads(&self) -> bool {
        self.quads
    }

    /// Width shared by the cell and edge buffers.
    pub fn index_width(&self) -> IndexWidth {
        self.cells.width()
    }

    /// Flat `x, y, z` positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat cell indices.
    pub fn cells(&self) -> &IndexBuffer {
        &self.cells
    }

    /// Flat unit normals, when present.
    pub fn normals(&self) -> Option<&[f32]> {
        self.normals.as_deref()
    }

    /// Flat `u, v` coordinates, when present.
    pub fn uvs(&self) -> Option<&[f32]> {
        self.uvs.as_deref()
    }

    /// Flat edge index pairs, when present.
    pub fn edges(&self) -> Option<&IndexBuffer> {
        self.edges.as_ref()
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        let p = self.positions.get(start..start.checked_add(3)?)?;
        Some([p[0], p[1], p[2]])
    }

    /// Normal of vertex `index`.
    pub fn normal(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        let n = self.normals.as_ref()?.get(start..start.checked_add(3)?)?;
        Some([n[0], n[1], n[2]])
    }

    /// Indices of cell `index`.
    pub fn cell(&self, index: usize) -> Option<Vec<u32>> {
        let stride = self.cell_stride();
        (index < self.cell_count()).then(|| {
            (index * stride..(index + 1) * stride)
                .filter_map(|i| self.cells.get(i))
                .collect()
        })
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty complex.
    pub fn bounding_box(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut points = self.positions.chunks_exact(3);
        let first = points.next()?;
        let mut min = [first[0], first[1], first[2]];
        let mut max = min;

        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        Some((min, max))
    }

    /// Returns the complex with one edge pair per face edge.
    pub fn with_edges(self) -> MeshResult<Self> {
        let edges = extract_edges(&self.cells.to_u32_vec(), self.cell_stride(), self.vertex_count())?;
        self.replace_edges(edges)
    }

    /// Returns the complex with each undirected edge listed once.
    pub fn with_unique_edges(self) -> MeshResult<Self> {
        let edges =
            extract_unique_edges(&self.cells.to_u32_vec(), self.cell_stride(), self.vertex_count())?;
        self.replace_edges(edges)
    }

    /// Interleaves positions, normals and uvs (those present) per vertex.
    pub fn interleaved(&self) -> MeshResult<Vec<f32>> {
        let mut attributes = vec![Attribute::new(&self.positions, 3)];
        if let Some(normals) = &self.normals {
            attributes.push(Attribute::new(normals, 3));
        }
        if let Some(uvs) = &self.uvs {
            attributes.push(Attribute::new(uvs, 2));
        }
        interleave(&attributes)
    }

    /// Returns the raw buffers, with indices widened to `u32`.
    pub fn into_parts(self) -> ComplexParts {
        ComplexParts {
            positions: self.positions,
            cells: self.cells.to_u32_vec(),
            normals: self.normals,
            uvs: self.uvs,
            edges: self.edges.map(|e| e.to_u32_vec()),
            quads: self.quads,
        }
    }

    fn replace_edges(self, edges: Vec<u32>) -> MeshResult<Self> {
        let edges = IndexBuffer::with_width(&edges, self.index_width())?;
        Ok(Self {
            edges: Some(edges),
            ..self
        })
    }
}

fn check_indices(
    indices: &[u32],
    stride: usize,
    vertex_count: usize,
    what: &str,
) -> MeshResult<()> {
    if indices.len() % stride != 0 {
        return Err(MeshError::invalid_topology(format!(
            "{} buffer length {} is not a multiple of {}",
            what,
            indices.len(),
            stride
        )));
    }
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::IndexOutOfBounds {
            index,
            vertex_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(quads: bool) -> ComplexParts {
        ComplexParts {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            cells: if quads {
                vec![0, 1, 2, 3]
            } else {
                vec![0, 1, 2, 0, 2, 3]
            },
            normals: Some(vec![0.0, 0.0, 1.0].repeat(4)),
            uvs: Some(vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]),
            edges: None,
            quads,
        }
    }

    #[test]
    fn test_from_parts_counts() {
        let complex = SimplicialComplex::from_parts(square(false)).unwrap();
        assert_eq!(complex.vertex_count(), 4);
        assert_eq!(complex.cell_count(), 2);
        assert_eq!(complex.index_width(), IndexWidth::U8);
        assert_eq!(complex.cell(1), Some(vec![0, 2, 3]));
        assert_eq!(complex.cell(2), None);
    }

    #[test]
    fn test_from_parts_rejects_ragged_positions() {
        let mut parts = square(false);
        parts.positions.pop();
        assert!(matches!(
            SimplicialComplex::from_parts(parts),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_short_normals() {
        let mut parts = square(false);
        parts.normals = Some(vec![0.0, 0.0, 1.0]);
        assert!(matches!(
            SimplicialComplex::from_parts(parts),
            Err(MeshError::AttributeLengthMismatch { attribute: 1, .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_out_of_bounds_cell() {
        let mut parts = square(false);
        parts.cells[5] = 4;
        assert!(matches!(
            SimplicialComplex::from_parts(parts),
            Err(MeshError::IndexOutOfBounds { index: 4, vertex_count: 4 })
        ));
    }

    #[test]
    fn test_from_parts_rejects_wrong_stride() {
        let mut parts = square(true);
        parts.quads = false;
        assert!(SimplicialComplex::from_parts(parts).is_err());
    }

    #[test]
    fn test_with_edges_quad() {
        let complex = SimplicialComplex::from_parts(square(true))
            .unwrap()
            .with_edges()
            .unwrap();
        let edges = complex.edges().unwrap().to_u32_vec();
        assert_eq!(edges, vec![0, 1, 1, 2, 2, 3, 3, 0]);
    }

    #[test]
    fn test_with_unique_edges_triangles() {
        let complex = SimplicialComplex::from_parts(square(false))
            .unwrap()
            .with_unique_edges()
            .unwrap();
        // 4 boundary edges + 1 diagonal
        assert_eq!(complex.edges().unwrap().len(), 10);
    }

    #[test]
    fn test_vertex_lookup_past_end() {
        let complex = SimplicialComplex::from_parts(square(false)).unwrap();
        assert_eq!(complex.position(3), Some([0.0, 1.0, 0.0]));
        assert_eq!(complex.position(4), None);
        assert_eq!(complex.position(usize::MAX), None);
        assert_eq!(complex.normal(usize::MAX / 2), None);
    }

    #[test]
    fn test_bounding_box() {
        let complex = SimplicialComplex::from_parts(square(false)).unwrap();
        assert_eq!(complex.bounding_box(), Some(([0.0, 0.0, 0.0], [1.0, 1.0, 0.0])));

        let empty = SimplicialComplex::from_parts(ComplexParts::default()).unwrap();
        assert_eq!(empty.bounding_box(), None);
    }

    #[test]
    fn test_interleaved() {
        let complex = SimplicialComplex::from_parts(square(false)).unwrap();
        let packed = complex.interleaved().unwrap();
        assert_eq!(packed.len(), 4 * 8);
        assert_eq!(&packed[8..16], &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_into_parts_preserves_buffers() {
        let parts = square(true);
        let complex = SimplicialComplex::from_parts(parts.clone()).unwrap();
        assert_eq!(complex.into_parts(), parts);
    }

    #[test]
    fn test_serialize_camel_case() {
        let complex = SimplicialComplex::from_parts(square(true)).unwrap();
        let json = serde_json::to_value(&complex).unwrap();
        assert_eq!(json["cells"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(json["quads"], serde_json::json!(true));
        assert!(json.get("edges").is_none());
    }
}
