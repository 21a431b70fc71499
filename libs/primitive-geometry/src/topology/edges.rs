//! # Edge Extraction
//!
//! Wireframe edges from a flat cell buffer.

use crate::error::{MeshError, MeshResult};
use std::collections::HashSet;

/// Emits one index pair per edge of every face.
///
/// Consecutive vertices of each face form an edge and the last wraps to the
/// first. Edges shared by neighboring faces are emitted once per face; this
/// is what wireframe rendering expects and drawing them twice is harmless.
/// Use [`extract_unique_edges`] for a deduplicated list.
///
/// Only index bounds are checked.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::extract_edges;
///
/// let edges = extract_edges(&[0, 1, 2, 3], 4, 4).unwrap();
/// assert_eq!(edges, vec![0, 1, 1, 2, 2, 3, 3, 0]);
/// ```
pub fn extract_edges(cells: &[u32], stride: usize, vertex_count: usize) -> MeshResult<Vec<u32>> {
    check_cells(cells, stride, vertex_count)?;

    let mut edges = Vec::with_capacity(cells.len() * 2);
    for face in cells.chunks_exact(stride) {
        for (i, &start) in face.iter().enumerate() {
            edges.push(start);
            edges.push(face[(i + 1) % stride]);
        }
    }
    Ok(edges)
}

/// Emits each undirected edge once as a `(min, max)` pair, in first-seen order.
///
/// Degenerate edges (both ends the same vertex) are dropped.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::extract_unique_edges;
///
/// // Two triangles sharing the diagonal 0-2.
/// let edges = extract_unique_edges(&[0, 1, 2, 0, 2, 3], 3, 4).unwrap();
/// assert_eq!(edges, vec![0, 1, 1, 2, 0, 2, 2, 3, 0, 3]);
/// ```
pub fn extract_unique_edges(
    cells: &[u32],
    stride: usize,
    vertex_count: usize,
) -> MeshResult<Vec<u32>> {
    let all = extract_edges(cells, stride, vertex_count)?;

    let mut seen = HashSet::with_capacity(all.len() / 2);
    let mut edges = Vec::with_capacity(all.len() / 2);
    for pair in all.chunks_exact(2) {
        let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        if a != b && seen.insert((a, b)) {
            edges.push(a);
            edges.push(b);
        }
    }
    Ok(edges)
}

fn check_cells(cells: &[u32], stride: usize, vertex_count: usize) -> MeshResult<()> {
    if stride < 2 {
        return Err(MeshError::invalid_topology(format!(
            "face stride must be at least 2, got {}",
            stride
        )));
    }
    if cells.len() % stride != 0 {
        return Err(MeshError::invalid_topology(format!(
            "cell buffer length {} is not a multiple of stride {}",
            cells.len(),
            stride
        )));
    }
    if let Some(&index) = cells.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::IndexOutOfBounds {
            index,
            vertex_count,
        });
    }
    Ok(())
}
