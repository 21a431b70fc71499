//! # Annulus
//!
//! A ring between an outer profile and a smaller inner profile of the same
//! mapping. Equal span counts give a quad strip; unequal counts are stitched
//! with triangles by advancing whichever boundary lags in parameter.

use super::{planar_uv, sample_validated, Mapping, Profile, ProfileOptions};
use crate::complex::SimplicialComplex;
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuilder;
use crate::topology::{grid_cells, CellKind, GridLayout, Winding};
use crate::validate;
use config::constants::DEFAULT_INNER_RATIO;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Options for [`create_annulus`].
///
/// `merge_centroid` in the outer profile options does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnulusOptions {
    /// Outer profile, including `inner_segments`.
    #[serde(flatten)]
    pub profile: ProfileOptions,
    /// Inner horizontal scale (defaults to half of `sx`).
    pub inner_sx: Option<f64>,
    /// Inner vertical scale (defaults to keeping the outer aspect ratio).
    pub inner_sy: Option<f64>,
    /// Emit quad cells (requires `inner_segments == segments`).
    pub quads: bool,
}

impl Default for AnnulusOptions {
    fn default() -> Self {
        Self {
            profile: ProfileOptions::default(),
            inner_sx: None,
            inner_sy: None,
            quads: false,
        }
    }
}

impl AnnulusOptions {
    /// Inner horizontal scale.
    pub fn inner_sx(&self) -> f64 {
        self.inner_sx
            .unwrap_or(self.profile.sx * DEFAULT_INNER_RATIO)
    }

    /// Inner vertical scale.
    pub fn inner_sy(&self) -> f64 {
        self.inner_sy
            .unwrap_or(self.profile.sy() * self.inner_sx() / self.profile.sx)
    }

    /// Checks every field before generation.
    pub fn validate(&self) -> MeshResult<()> {
        self.profile.validate()?;
        let inner_sx = validate::positive("innerSx", self.inner_sx())?;
        let inner_sy = validate::positive("innerSy", self.inner_sy())?;
        if inner_sx >= self.profile.sx {
            return Err(MeshError::invalid_parameter(
                "innerSx",
                format!("must be smaller than sx ({}), got {}", self.profile.sx, inner_sx),
            ));
        }
        if inner_sy >= self.profile.sy() {
            return Err(MeshError::invalid_parameter(
                "innerSy",
                format!("must be smaller than sy ({}), got {}", self.profile.sy(), inner_sy),
            ));
        }
        if self.quads && self.profile.inner_segments() != self.profile.segments {
            return Err(MeshError::invalid_parameter(
                "quads",
                "quad cells require innerSegments to equal segments",
            ));
        }
        let outer = u64::from(self.profile.segments) + 1;
        let inner = u64::from(self.profile.inner_segments()) + 1;
        validate::vertex_budget(outer.checked_add(inner))?;
        Ok(())
    }
}

/// Creates a ring between two profiles of `mapping`.
///
/// Outer vertices come first, then inner vertices. UVs are planar over the
/// outer `sx × sy` box.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::profile::{create_annulus, AnnulusOptions, Mapping, ProfileOptions};
///
/// let options = AnnulusOptions {
///     profile: ProfileOptions { segments: 8, ..Default::default() },
///     quads: true,
///     ..Default::default()
/// };
/// let ring = create_annulus(Mapping::Ellipse, &options).unwrap();
/// assert_eq!(ring.vertex_count(), 16);
/// assert_eq!(ring.cell_count(), 8);
/// ```
pub fn create_annulus(mapping: Mapping, options: &AnnulusOptions) -> MeshResult<SimplicialComplex> {
    options.validate()?;
    let profile = &options.profile;

    let outer = sample_validated(
        mapping,
        &profile.params(mapping),
        profile.segments,
        profile.theta,
        profile.theta_offset,
        profile.closed,
    );
    let inner_params = mapping.params(options.inner_sx(), options.inner_sy(), profile.m);
    let inner = sample_validated(
        mapping,
        &inner_params,
        profile.inner_segments(),
        profile.theta,
        profile.theta_offset,
        profile.closed,
    );

    let kind = CellKind::from_quads(options.quads);
    let mut mesh = MeshBuilder::with_capacity(outer.len() + inner.len(), kind);
    let (sx, sy) = (profile.sx, profile.sy());
    for p in outer.points().iter().chain(inner.points()) {
        mesh.add_vertex(p.extend(0.0), DVec3::Z, planar_uv(*p, sx, sy));
    }

    if outer.len() == inner.len() {
        // Row 0 is the outer boundary, row 1 the inner one.
        let layout = GridLayout::new(1, outer.spans() as u32).wrap_columns(outer.is_periodic());
        mesh.extend_cells(&grid_cells(&layout, Winding::CounterClockwise, kind));
    } else {
        mesh.extend_cells(&stitch(&outer, &inner));
    }

    mesh.build("annulus")
}

/// Triangulates between boundaries with different sample counts.
fn stitch(outer: &Profile, inner: &Profile) -> Vec<u32> {
    let inner_base = outer.len() as u32;
    let (outer_spans, inner_spans) = (outer.spans(), inner.spans());
    let outer_at = |k: usize| (k % outer.len()) as u32;
    let inner_at = |k: usize| inner_base + (k % inner.len()) as u32;

    let mut cells = Vec::with_capacity((outer_spans + inner_spans) * 3);
    let (mut i, mut j) = (0, 0);
    while i < outer_spans || j < inner_spans {
        let advance_outer = if i == outer_spans {
            false
        } else if j == inner_spans {
            true
        } else {
            (i + 1) as f64 / outer_spans as f64 <= (j + 1) as f64 / inner_spans as f64
        };

        if advance_outer {
            cells.extend_from_slice(&[outer_at(i), outer_at(i + 1), inner_at(j)]);
            i += 1;
        } else {
            cells.extend_from_slice(&[outer_at(i), inner_at(j + 1), inner_at(j)]);
            j += 1;
        }
    }
    cells
}
