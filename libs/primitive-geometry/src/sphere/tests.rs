use super::icosphere::spherical_uv;
use super::*;
use crate::error::MeshError;
use approx::assert_abs_diff_eq;
use glam::DVec3;

fn vec(v: [f32; 3]) -> DVec3 {
    DVec3::new(v[0] as f64, v[1] as f64, v[2] as f64)
}

#[test]
fn test_icosphere_counts() {
    for k in 0..4u32 {
        let sphere = create_icosphere(&IcosphereOptions {
            radius: 1.0,
            subdivisions: k,
        })
        .unwrap();
        assert_eq!(sphere.cell_count(), 20 * 4usize.pow(k));
        assert_eq!(sphere.vertex_count(), 10 * 4usize.pow(k) + 2);
    }
}

#[test]
fn test_icosphere_vertices_on_sphere() {
    let sphere = create_icosphere(&IcosphereOptions {
        radius: 2.5,
        subdivisions: 2,
    })
    .unwrap();
    for i in 0..sphere.vertex_count() {
        let p = vec(sphere.position(i).unwrap());
        let n = vec(sphere.normal(i).unwrap());
        assert_abs_diff_eq!(p.length(), 2.5, epsilon = 1e-5);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert!(n.dot(p / 2.5) > 0.9999);
    }
}

#[test]
fn test_icosphere_faces_outward() {
    let sphere = create_icosphere(&IcosphereOptions {
        radius: 1.0,
        subdivisions: 1,
    })
    .unwrap();
    for i in 0..sphere.cell_count() {
        let cell = sphere.cell(i).unwrap();
        let p: Vec<DVec3> = cell.iter().map(|&v| vec(sphere.position(v as usize).unwrap())).collect();
        let face = (p[1] - p[0]).cross(p[2] - p[0]);
        let centroid = (p[0] + p[1] + p[2]) / 3.0;
        assert!(face.dot(centroid) > 0.0);
    }
}

#[test]
fn test_icosphere_shares_midpoints() {
    // Closed 2-manifold: every edge is shared by exactly two faces.
    let sphere = create_icosphere(&IcosphereOptions {
        radius: 1.0,
        subdivisions: 2,
    })
    .unwrap()
    .with_unique_edges()
    .unwrap();
    let edges = sphere.edges().unwrap().len() / 2;
    assert_eq!(edges, sphere.cell_count() * 3 / 2);
    // Euler characteristic of a sphere.
    assert_eq!(sphere.vertex_count() + sphere.cell_count() - edges, 2);
}

#[test]
fn test_icosphere_rejections() {
    let negative_radius = IcosphereOptions {
        radius: -1.0,
        subdivisions: 1,
    };
    assert!(create_icosphere(&negative_radius).is_err());

    let too_deep = IcosphereOptions {
        radius: 1.0,
        subdivisions: 20,
    };
    assert!(matches!(
        create_icosphere(&too_deep),
        Err(MeshError::TooManyVertices { .. })
    ));
}

#[test]
fn test_icosphere_rejects_negative_subdivisions_from_json() {
    let parsed: Result<IcosphereOptions, _> = serde_json::from_str(r#"{ "subdivisions": -1 }"#);
    assert!(parsed.is_err());
}

#[test]
fn test_spherical_uv() {
    let uv = spherical_uv(DVec3::X);
    assert_abs_diff_eq!(uv.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(uv.y, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(spherical_uv(DVec3::Y).y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(spherical_uv(DVec3::NEG_Y).x, 0.5, epsilon = 1e-12);
}

#[test]
fn test_uv_sphere() {
    let options = SphereOptions {
        radius: 3.0,
        segments: 12,
        rings: 6,
        ..Default::default()
    };
    let sphere = create_sphere(&options).unwrap();
    assert_eq!(sphere.vertex_count(), 5 * 12 + 2);
    // Two pole fans plus quads between the 5 rings.
    assert_eq!(sphere.cell_count(), 2 * 12 + 4 * 12 * 2);
    for i in 0..sphere.vertex_count() {
        let p = vec(sphere.position(i).unwrap());
        assert_abs_diff_eq!(p.length(), 3.0, epsilon = 1e-5);
    }
    let (min, max) = sphere.bounding_box().unwrap();
    assert_abs_diff_eq!(min[1], -3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(max[1], 3.0, epsilon = 1e-6);
}

#[test]
fn test_uv_sphere_faces_outward() {
    let sphere = create_sphere(&SphereOptions {
        segments: 8,
        rings: 4,
        closed: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(sphere.vertex_count(), 3 * 9 + 2);
    for i in 0..sphere.cell_count() {
        let cell = sphere.cell(i).unwrap();
        let p: Vec<DVec3> = cell.iter().map(|&v| vec(sphere.position(v as usize).unwrap())).collect();
        let face = (p[1] - p[0]).cross(p[2] - p[0]);
        let centroid = (p[0] + p[1] + p[2]) / 3.0;
        assert!(face.dot(centroid) > 0.0, "cell {} is inverted", i);
    }
}

#[test]
fn test_ellipsoid_gradient_normals() {
    let options = EllipsoidOptions {
        sx: 2.0,
        sy: 1.0,
        sz: 0.5,
        segments: 8,
        rings: 4,
        ..Default::default()
    };
    let ellipsoid = create_ellipsoid(&options).unwrap();
    for i in 0..ellipsoid.vertex_count() {
        let p = vec(ellipsoid.position(i).unwrap());
        let n = vec(ellipsoid.normal(i).unwrap());
        // On the surface.
        let f = (p.x / 2.0).powi(2) + p.y.powi(2) + (p.z / 0.5).powi(2);
        assert_abs_diff_eq!(f, 1.0, epsilon = 1e-5);
        // Parallel to the gradient p / s².
        let gradient = DVec3::new(p.x / 4.0, p.y, p.z / 0.25).normalize();
        assert!(n.dot(gradient) > 0.9999);
    }
}

#[test]
fn test_sphere_rejects_single_ring() {
    let options = SphereOptions {
        rings: 1,
        ..Default::default()
    };
    assert!(matches!(
        create_sphere(&options),
        Err(MeshError::InvalidParameter { name: "rings", .. })
    ));
}

#[test]
fn test_sphere_rejects_oversized_tessellation() {
    let options = SphereOptions {
        rings: u32::MAX,
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(MeshError::TooManyVertices { .. })
    ));
}
