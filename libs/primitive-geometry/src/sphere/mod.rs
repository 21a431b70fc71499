//! # Spheres
//!
//! Two tessellations: the subdivided icosahedron, with near-uniform
//! triangles, and the latitude/longitude sphere (plus ellipsoid), with
//! rows that map cleanly onto UV space.

pub mod icosphere;
pub mod uv_sphere;

pub use icosphere::{create_icosphere, IcosphereOptions};
pub use uv_sphere::{create_ellipsoid, create_sphere, EllipsoidOptions, SphereOptions};

#[cfg(test)]
mod tests;
