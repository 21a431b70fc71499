//! # Buffer & Topology Utilities
//!
//! Index-width selection, cell generation, edge extraction and attribute
//! interleaving. Every primitive builder assembles its buffers with these.

pub mod cells;
pub mod edges;
pub mod interleave;

pub use cells::{fan_cells, grid_cells, CellKind, GridLayout, Winding};
pub use edges::{extract_edges, extract_unique_edges};
pub use interleave::{interleave, Attribute};

use crate::error::{MeshError, MeshResult};
use serde::Serialize;

/// Unsigned integer width used by every index buffer of a complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
}

impl IndexWidth {
    /// Size of one index in bytes.
    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::U8 => 1,
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
        }
    }

    /// Largest index this width can hold.
    pub fn max_index(self) -> u32 {
        match self {
            IndexWidth::U8 => u8::MAX as u32,
            IndexWidth::U16 => u16::MAX as u32,
            IndexWidth::U32 => u32::MAX,
        }
    }
}

/// Chooses the narrowest index width that can address `vertex_count` vertices.
///
/// The largest index is `vertex_count - 1`, so 256 vertices still fit in `u8`.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::{index_width, IndexWidth};
///
/// assert_eq!(index_width(5), IndexWidth::U8);
/// assert_eq!(index_width(257), IndexWidth::U16);
/// assert_eq!(index_width(70_000), IndexWidth::U32);
/// ```
pub fn index_width(vertex_count: usize) -> IndexWidth {
    let max_index = vertex_count.saturating_sub(1);
    if max_index <= u8::MAX as usize {
        IndexWidth::U8
    } else if max_index <= u16::MAX as usize {
        IndexWidth::U16
    } else {
        IndexWidth::U32
    }
}

/// A flat index buffer stored at the width chosen by [`index_width`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IndexBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Narrows `indices` to `width`.
    ///
    /// Fails if an index does not fit, which means it cannot address a vertex
    /// of the complex the width was chosen for.
    pub fn with_width(indices: &[u32], width: IndexWidth) -> MeshResult<Self> {
        if let Some(&index) = indices.iter().find(|&&i| i > width.max_index()) {
            return Err(MeshError::invalid_topology(format!(
                "index {} does not fit in {:?} (max {})",
                index,
                width,
                width.max_index()
            )));
        }
        Ok(match width {
            IndexWidth::U8 => IndexBuffer::U8(indices.iter().map(|&i| i as u8).collect()),
            IndexWidth::U16 => IndexBuffer::U16(indices.iter().map(|&i| i as u16).collect()),
            IndexWidth::U32 => IndexBuffer::U32(indices.to_vec()),
        })
    }

    /// Width of the stored indices.
    pub fn width(&self) -> IndexWidth {
        match self {
            IndexBuffer::U8(_) => IndexWidth::U8,
            IndexBuffer::U16(_) => IndexWidth::U16,
            IndexBuffer::U32(_) => IndexWidth::U32,
        }
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U8(v) => v.len(),
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.width().bytes()
    }

    /// Returns the index at `position`, widened to `u32`.
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            IndexBuffer::U8(v) => v.get(position).map(|&i| i as u32),
            IndexBuffer::U16(v) => v.get(position).map(|&i| i as u32),
            IndexBuffer::U32(v) => v.get(position).copied(),
        }
    }

    /// Iterates over the indices widened to `u32`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            IndexBuffer::U8(v) => Box::new(v.iter().map(|&i| i as u32)),
            IndexBuffer::U16(v) => Box::new(v.iter().map(|&i| i as u32)),
            IndexBuffer::U32(v) => Box::new(v.iter().copied()),
        }
    }

    /// Copies the indices into a `u32` vector.
    pub fn to_u32_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}
