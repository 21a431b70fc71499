//! # Grid Primitives
//!
//! Box, plane and quad: direct vertex and index construction.

pub mod cube;
pub mod plane;

pub use cube::{create_box, BoxOptions};
pub use plane::{create_plane, create_quad, PlaneOptions, QuadOptions};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use glam::DVec3;

    fn vec(v: [f32; 3]) -> DVec3 {
        DVec3::new(v[0] as f64, v[1] as f64, v[2] as f64)
    }

    #[test]
    fn test_box_faces_are_planar_and_outward() {
        let options = BoxOptions {
            sx: 2.0,
            sy: 1.0,
            sz: 3.0,
            quads: true,
        };
        let cube = create_box(&options).unwrap();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.cell_count(), 6);
        assert!(cube.is_quads());

        for i in 0..6 {
            let cell = cube.cell(i).unwrap();
            let p: Vec<DVec3> = cell.iter().map(|&v| vec(cube.position(v as usize).unwrap())).collect();
            let normal = (p[1] - p[0]).cross(p[2] - p[0]);
            assert!(normal.dot(p[3] - p[0]).abs() < 1e-9, "face {} is not planar", i);
            let center = (p[0] + p[1] + p[2] + p[3]) / 4.0;
            assert!(normal.dot(center) > 0.0, "face {} points inward", i);
        }
    }

    #[test]
    fn test_box_corner_normals_ignore_proportions() {
        let options = BoxOptions {
            sx: 10.0,
            sy: 1.0,
            sz: 0.1,
            quads: true,
        };
        let cube = create_box(&options).unwrap();
        let diagonal = 1.0 / 3.0_f64.sqrt();
        for i in 0..cube.vertex_count() {
            let p = vec(cube.position(i).unwrap());
            let n = vec(cube.normal(i).unwrap());
            assert!((n.x - diagonal * p.x.signum()).abs() < 1e-6);
            assert!((n.y - diagonal * p.y.signum()).abs() < 1e-6);
            assert!((n.z - diagonal * p.z.signum()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_box_triangulated() {
        let cube = create_box(&BoxOptions::default()).unwrap();
        assert_eq!(cube.cell_count(), 12);
        let (min, max) = cube.bounding_box().unwrap();
        assert_eq!(min, [-0.5, -0.5, -0.5]);
        assert_eq!(max, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_box_rejects_flat() {
        let options = BoxOptions {
            sz: 0.0,
            ..Default::default()
        };
        assert!(create_box(&options).is_err());
    }

    #[test]
    fn test_plane_grid() {
        let options = PlaneOptions {
            sx: 4.0,
            sy: 2.0,
            nx: 4,
            ny: 2,
            ..Default::default()
        };
        let plane = create_plane(&options).unwrap();
        assert_eq!(plane.vertex_count(), 15);
        assert_eq!(plane.cell_count(), 16);
        assert_eq!(plane.position(0), Some([-2.0, -1.0, 0.0]));
        assert_eq!(plane.position(14), Some([2.0, 1.0, 0.0]));

        let uvs = plane.uvs().unwrap();
        assert_eq!(&uvs[28..30], &[1.0, 1.0]);
        for i in 0..plane.vertex_count() {
            assert_eq!(plane.normal(i), Some([0.0, 0.0, 1.0]));
        }

        // Counter-clockwise from +Z.
        let cell = plane.cell(0).unwrap();
        let p: Vec<DVec3> = cell.iter().map(|&v| vec(plane.position(v as usize).unwrap())).collect();
        assert!((p[1] - p[0]).cross(p[2] - p[0]).z > 0.0);
    }

    #[test]
    fn test_quad() {
        let quad = create_quad(&QuadOptions {
            quads: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.cells().to_u32_vec(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_plane_rejects_zero_cells() {
        let options = PlaneOptions {
            nx: 0,
            ..Default::default()
        };
        assert!(create_plane(&options).is_err());
    }

    #[test]
    fn test_plane_rejects_oversized_grid() {
        let options = PlaneOptions {
            nx: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            create_plane(&options),
            Err(MeshError::TooManyVertices { .. })
        ));

        let options = PlaneOptions {
            nx: 4_000,
            ny: 4_000,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(MeshError::TooManyVertices { .. })
        ));
    }
}
