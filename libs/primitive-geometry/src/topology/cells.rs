//! # Cell Generation
//!
//! Index lists for regular parameter grids and triangle fans.
//!
//! Grid vertices are laid out row-major. Column `c` of row `r` sits at
//! `base + r * vertex_columns + c`. A wrapped direction reuses its first
//! row/column instead of storing a duplicate, so the last cell stitches back
//! to index 0 of that direction.

use serde::{Deserialize, Serialize};

/// Cell stride of a complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    /// Three indices per cell.
    #[default]
    Triangles,
    /// Four indices per cell.
    Quads,
}

impl CellKind {
    /// Selects the kind from a `quads` option flag.
    pub fn from_quads(quads: bool) -> Self {
        if quads {
            CellKind::Quads
        } else {
            CellKind::Triangles
        }
    }

    /// Number of indices per cell.
    pub fn stride(self) -> usize {
        match self {
            CellKind::Triangles => 3,
            CellKind::Quads => 4,
        }
    }
}

/// Orientation of cells in parameter space.
///
/// `CounterClockwise` walks a cell as `(r, c) → (r, c+1) → (r+1, c+1) → (r+1, c)`,
/// so the face normal is `∂column × ∂row` of the embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    #[default]
    CounterClockwise,
    Clockwise,
}

/// A rectangular parameter domain of `rows × columns` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of cell rows.
    pub rows: u32,
    /// Number of cell columns.
    pub columns: u32,
    /// The last row of cells stitches back to the first vertex row.
    pub wrap_rows: bool,
    /// The last column of cells stitches back to the first vertex column.
    pub wrap_columns: bool,
    /// Index of the first grid vertex.
    pub base: u32,
}

impl GridLayout {
    /// An open grid (no wrapping) starting at vertex 0.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            wrap_rows: false,
            wrap_columns: false,
            base: 0,
        }
    }

    /// Sets column wrapping.
    pub fn wrap_columns(mut self, wrap: bool) -> Self {
        self.wrap_columns = wrap;
        self
    }

    /// Sets row wrapping.
    pub fn wrap_rows(mut self, wrap: bool) -> Self {
        self.wrap_rows = wrap;
        self
    }

    /// Sets the index of the first grid vertex.
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Vertices stored per row.
    #[inline]
    pub fn vertex_columns(&self) -> u32 {
        if self.wrap_columns {
            self.columns
        } else {
            self.columns + 1
        }
    }

    /// Vertex rows stored.
    #[inline]
    pub fn vertex_rows(&self) -> u32 {
        if self.wrap_rows {
            self.rows
        } else {
            self.rows + 1
        }
    }

    /// Number of vertices the grid addresses.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_rows() * self.vertex_columns()
    }

    /// Number of cells (quads) in the grid.
    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Vertex index at (`row`, `column`), wrapping where enabled.
    #[inline]
    pub fn index(&self, row: u32, column: u32) -> u32 {
        let row = row % self.vertex_rows();
        let column = column % self.vertex_columns();
        self.base + row * self.vertex_columns() + column
    }
}

/// Builds quad or triangle cells covering a grid.
///
/// Each quad `[a, b, c, d]` splits into `[a, b, c]` and `[a, c, d]` when
/// `kind` is [`CellKind::Triangles`].
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::{grid_cells, CellKind, GridLayout, Winding};
///
/// let cells = grid_cells(&GridLayout::new(1, 1), Winding::CounterClockwise, CellKind::Quads);
/// assert_eq!(cells, vec![0, 1, 3, 2]);
/// ```
pub fn grid_cells(layout: &GridLayout, winding: Winding, kind: CellKind) -> Vec<u32> {
    let mut cells = Vec::with_capacity(layout.cell_count() as usize * 6);

    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let a = layout.index(row, column);
            let b = layout.index(row, column + 1);
            let c = layout.index(row + 1, column + 1);
            let d = layout.index(row + 1, column);

            let quad = match winding {
                Winding::CounterClockwise => [a, b, c, d],
                Winding::Clockwise => [a, d, c, b],
            };
            push_quad(&mut cells, quad, kind);
        }
    }

    cells
}

/// Builds a triangle fan from `center` to consecutive `ring` vertices.
///
/// `CounterClockwise` emits `(center, ring[i], ring[i + 1])`; `Clockwise`
/// swaps the ring vertices. A periodic ring also closes `ring[last] → ring[0]`.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::topology::{fan_cells, Winding};
///
/// let cells = fan_cells(0, &[1, 2, 3], true, Winding::CounterClockwise);
/// assert_eq!(cells, vec![0, 1, 2, 0, 2, 3, 0, 3, 1]);
/// ```
pub fn fan_cells(center: u32, ring: &[u32], periodic: bool, winding: Winding) -> Vec<u32> {
    let n = ring.len();
    let spans = if periodic { n } else { n.saturating_sub(1) };
    let mut cells = Vec::with_capacity(spans * 3);

    for i in 0..spans {
        let current = ring[i];
        let next = ring[(i + 1) % n];
        match winding {
            Winding::CounterClockwise => cells.extend_from_slice(&[center, current, next]),
            Winding::Clockwise => cells.extend_from_slice(&[center, next, current]),
        }
    }

    cells
}

/// Appends a quad as one cell or two triangles.
pub(crate) fn push_quad(cells: &mut Vec<u32>, [a, b, c, d]: [u32; 4], kind: CellKind) {
    match kind {
        CellKind::Quads => cells.extend_from_slice(&[a, b, c, d]),
        CellKind::Triangles => cells.extend_from_slice(&[a, b, c, a, c, d]),
    }
}
