//! # Attribute Interleaving
//!
//! Packs several per-vertex attribute buffers into one vertex buffer.

use crate::error::{MeshError, MeshResult};

/// One per-vertex attribute: a flat buffer and its element width.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    /// Flat values, `width` per vertex.
    pub data: &'a [f32],
    /// Components per vertex (3 for positions, 2 for uvs).
    pub width: usize,
}

impl<'a> Attribute<'a> {
    pub fn new(data: &'a [f32], width: usize) -> Self {
        Self { data, width }
    }

    fn vertex_count(&self) -> Option<usize> {
        if self.width == 0 || self.data.len() % self.width != 0 {
            None
        } else {
            Some(self.data.len() / self.width)
        }
    }
}

/// Interleaves attributes so each vertex's values are contiguous, in the
/// order the attributes are given.
///
/// Fails before allocating if any attribute's length is not a multiple of its
/// width or if vertex counts disagree.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::{interleave, Attribute};
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
/// let uvs = [0.0, 0.0, 1.0, 0.0];
/// let packed = interleave(&[Attribute::new(&positions, 3), Attribute::new(&uvs, 2)]).unwrap();
/// assert_eq!(packed, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn interleave(attributes: &[Attribute<'_>]) -> MeshResult<Vec<f32>> {
    let Some(first) = attributes.first() else {
        return Ok(Vec::new());
    };

    let expected = first.vertex_count().ok_or(MeshError::AttributeLengthMismatch {
        attribute: 0,
        expected: first.data.len() / first.width.max(1),
        found: first.data.len(),
    })?;

    for (attribute, buffer) in attributes.iter().enumerate().skip(1) {
        match buffer.vertex_count() {
            Some(count) if count == expected => {}
            _ => {
                return Err(MeshError::AttributeLengthMismatch {
                    attribute,
                    expected,
                    found: if buffer.width == 0 {
                        buffer.data.len()
                    } else {
                        buffer.data.len() / buffer.width
                    },
                })
            }
        }
    }

    let stride: usize = attributes.iter().map(|a| a.width).sum();
    let mut packed = Vec::with_capacity(expected * stride);
    for vertex in 0..expected {
        for buffer in attributes {
            let start = vertex * buffer.width;
            packed.extend_from_slice(&buffer.data[start..start + buffer.width]);
        }
    }
    Ok(packed)
}
