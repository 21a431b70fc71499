//! # Planar Shapes
//!
//! Discs, outlines and the named superellipse/constant-width shapes, all in
//! the XY plane facing +Z.

use super::{planar_uv, sample_profile, Mapping, Profile, ProfileOptions};
use crate::complex::SimplicialComplex;
use crate::error::MeshResult;
use crate::mesh::MeshBuilder;
use crate::topology::{fan_cells, CellKind, Winding};
use glam::{DVec2, DVec3};

/// Creates a planar shape following `mapping`.
///
/// With `merge_centroid` the boundary is fan-triangulated around a centroid
/// vertex at the origin (appended after the boundary vertices). Without it
/// the result is an outline: boundary vertices, no cells, and one edge per
/// boundary span.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::profile::{create_shape, Mapping, ProfileOptions};
///
/// let options = ProfileOptions { segments: 6, merge_centroid: true, ..Default::default() };
/// let hexagon = create_shape(Mapping::Ellipse, &options).unwrap();
/// assert_eq!(hexagon.vertex_count(), 7);
/// assert_eq!(hexagon.cell_count(), 6);
/// ```
pub fn create_shape(mapping: Mapping, options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    let profile = sample_profile(mapping, options)?;
    if options.merge_centroid {
        filled(&profile, options, "shape")
    } else {
        outline(&profile, options)
    }
}

/// Creates a filled disc: an ellipse fan-triangulated around its centroid.
///
/// Cells are `(centroid, p[i], p[i + 1])`, wrapping for a full turn.
/// `merge_centroid` is implied.
///
/// # Example
///
/// ```rust
/// use primitive_geometry::profile::{create_disc, ProfileOptions};
///
/// let disc = create_disc(&ProfileOptions { segments: 4, ..Default::default() }).unwrap();
/// assert_eq!(disc.vertex_count(), 5);
/// assert_eq!(disc.cell_count(), 4);
/// ```
pub fn create_disc(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    let profile = sample_profile(Mapping::Ellipse, options)?;
    filled(&profile, options, "disc")
}

/// Ellipse (m = 2); `sx`/`sy` set the semi-axes.
pub fn create_ellipse(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Ellipse, options)
}

/// Squircle (m = 4).
pub fn create_squircle(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Squircle, options)
}

/// Superellipse with the exponent from `options.m` (default 3).
pub fn create_superellipse(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Superellipse, options)
}

/// Astroid (m = 2/3).
pub fn create_astroid(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Astroid, options)
}

/// Diamond (m = 1).
pub fn create_diamond(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Diamond, options)
}

/// Reuleux triangle.
pub fn create_reuleux(options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    create_shape(Mapping::Reuleux, options)
}

fn add_boundary(mesh: &mut MeshBuilder, profile: &Profile, options: &ProfileOptions) -> Vec<u32> {
    let (sx, sy) = (options.sx, options.sy());
    profile
        .points()
        .iter()
        .map(|&p| mesh.add_vertex(p.extend(0.0), DVec3::Z, planar_uv(p, sx, sy)))
        .collect()
}

fn filled(
    profile: &Profile,
    options: &ProfileOptions,
    primitive: &'static str,
) -> MeshResult<SimplicialComplex> {
    let mut mesh = MeshBuilder::with_capacity(profile.len() + 1, CellKind::Triangles);
    let ring = add_boundary(&mut mesh, profile, options);
    let centroid = mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::splat(0.5));

    mesh.extend_cells(&fan_cells(
        centroid,
        &ring,
        profile.is_periodic(),
        Winding::CounterClockwise,
    ));
    mesh.build(primitive)
}

fn outline(profile: &Profile, options: &ProfileOptions) -> MeshResult<SimplicialComplex> {
    let mut mesh = MeshBuilder::with_capacity(profile.len(), CellKind::Triangles);
    let ring = add_boundary(&mut mesh, profile, options);

    let edges = (0..profile.spans())
        .flat_map(|i| [ring[i], ring[(i + 1) % ring.len()]])
        .collect();
    mesh.set_edges(edges);
    mesh.build("outline")
}
