//! # Primitive Geometry
//!
//! Procedural mesh primitives as flat, GPU-ready buffers.
//! Every builder turns an options value into an immutable [`SimplicialComplex`].
//!
//! ## Architecture
//!
//! ```text
//! options → profile / revolution / sphere / grid → MeshBuilder → SimplicialComplex
//!                          ↓
//!                      topology (index width, cells, edges, interleaving)
//! ```
//!
//! ## Conventions
//!
//! - Y is up; solids of revolution turn around +Y and are centered on the origin
//! - Planar shapes lie in the XY plane facing +Z
//! - Faces are counter-clockwise seen from outside
//! - Geometry is computed in f64 and exported as f32
//!
//! ## Usage
//!
//! ```rust
//! use primitive_geometry::profile::{create_disc, ProfileOptions};
//!
//! let disc = create_disc(&ProfileOptions { segments: 4, ..Default::default() }).unwrap();
//! assert_eq!(disc.vertex_count(), 5);
//! assert_eq!(disc.cell_count(), 4);
//! ```

pub mod complex;
pub mod error;
pub mod grid;
mod mesh;
pub mod profile;
pub mod revolution;
pub mod sphere;
pub mod topology;
mod validate;

pub use complex::{ComplexParts, SimplicialComplex};
pub use error::{MeshError, MeshResult};
pub use grid::{create_box, create_plane, create_quad, BoxOptions, PlaneOptions, QuadOptions};
pub use profile::{
    create_annulus, create_disc, create_shape, sample_profile, AnnulusOptions, Mapping, Profile,
    ProfileOptions,
};
pub use revolution::{
    create_capsule, create_cone, create_cylinder, create_torus, CapsuleOptions, CylinderOptions,
    TorusOptions,
};
pub use sphere::{
    create_ellipsoid, create_icosphere, create_sphere, EllipsoidOptions, IcosphereOptions,
    SphereOptions,
};
pub use topology::{extract_edges, extract_unique_edges, index_width, interleave, IndexBuffer, IndexWidth};
