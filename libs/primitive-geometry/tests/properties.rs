//! Properties every builder guarantees, checked through the public API.

use approx::assert_abs_diff_eq;
use primitive_geometry::profile::{
    create_astroid, create_diamond, create_reuleux, create_squircle, create_superellipse,
};
use primitive_geometry::topology::{extract_edges, interleave, Attribute};
use primitive_geometry::*;

fn assert_well_formed(complex: &SimplicialComplex) {
    assert_eq!(complex.positions().len() % 3, 0);
    let vertex_count = complex.vertex_count() as u32;
    for index in complex.cells().iter() {
        assert!(index < vertex_count, "cell index {} >= {}", index, vertex_count);
    }
    if let Some(edges) = complex.edges() {
        assert_eq!(edges.len() % 2, 0);
        for index in edges.iter() {
            assert!(index < vertex_count, "edge index {} >= {}", index, vertex_count);
        }
    }
    if let Some(normals) = complex.normals() {
        for n in normals.chunks_exact(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_abs_diff_eq!(length, 1.0, epsilon = 1e-5);
        }
    }
    assert_eq!(complex.cells().width(), index_width(complex.vertex_count()));
}

#[test]
fn every_profile_builder_is_well_formed() {
    for segments in [3, 4, 7, 32] {
        for closed in [false, true] {
            for theta in [std::f64::consts::PI, config::constants::FULL_TURN] {
                let options = ProfileOptions {
                    segments,
                    theta,
                    closed,
                    merge_centroid: true,
                    sx: 1.5,
                    sy: Some(0.5),
                    ..Default::default()
                };
                let outline = ProfileOptions {
                    merge_centroid: false,
                    ..options.clone()
                };
                for complex in [
                    create_disc(&options),
                    create_squircle(&options),
                    create_superellipse(&options),
                    create_astroid(&options),
                    create_diamond(&options),
                    create_reuleux(&options),
                    create_shape(Mapping::Rectellipse, &outline),
                    create_shape(Mapping::PietHein, &outline),
                    create_annulus(
                        Mapping::Ellipse,
                        &AnnulusOptions {
                            profile: ProfileOptions {
                                inner_segments: Some(segments + 2),
                                ..options.clone()
                            },
                            ..Default::default()
                        },
                    ),
                ] {
                    assert_well_formed(&complex.unwrap());
                }
            }
        }
    }
}

#[test]
fn every_solid_builder_is_well_formed() {
    let solids = [
        create_cylinder(&CylinderOptions {
            segments: 7,
            height_segments: 3,
            closed: true,
            ..Default::default()
        }),
        create_cone(&CylinderOptions::default()),
        create_capsule(&CapsuleOptions::default()),
        create_torus(&TorusOptions::default()),
        create_sphere(&SphereOptions::default()),
        create_ellipsoid(&EllipsoidOptions::default()),
        create_icosphere(&IcosphereOptions::default()),
        create_box(&BoxOptions::default()),
        create_plane(&PlaneOptions {
            nx: 5,
            ny: 3,
            ..Default::default()
        }),
        create_quad(&QuadOptions::default()),
    ];
    for solid in solids {
        let solid = solid.unwrap();
        assert_well_formed(&solid);
        assert_well_formed(&solid.with_edges().unwrap());
    }
}

#[test]
fn ellipse_samples_lie_on_unit_circle() {
    let profile = sample_profile(Mapping::Ellipse, &ProfileOptions::default()).unwrap();
    for p in profile.points() {
        assert_abs_diff_eq!(p.x * p.x + p.y * p.y, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn squircle_samples_lie_on_quartic() {
    let profile = sample_profile(Mapping::Squircle, &ProfileOptions::default()).unwrap();
    for p in profile.points() {
        assert_abs_diff_eq!(p.x.powi(4) + p.y.powi(4), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn icosphere_counts_and_radius() {
    for k in 0..=3u32 {
        let sphere = create_icosphere(&IcosphereOptions {
            radius: 4.0,
            subdivisions: k,
        })
        .unwrap();
        assert_eq!(sphere.cell_count(), 20 * 4usize.pow(k));
        assert_eq!(sphere.vertex_count(), 10 * 4usize.pow(k) + 2);
        for p in sphere.positions().chunks_exact(3) {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_abs_diff_eq!(r, 4.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn annulus_outer_encloses_inner() {
    let options = AnnulusOptions {
        profile: ProfileOptions {
            segments: 12,
            sx: 2.0,
            ..Default::default()
        },
        inner_sx: Some(1.2),
        ..Default::default()
    };
    let ring = create_annulus(Mapping::Squircle, &options).unwrap();
    let radius = |i: usize| {
        let [x, y, _] = ring.position(i).unwrap();
        (x * x + y * y).sqrt()
    };
    for i in 0..12 {
        assert!(radius(i) > radius(12 + i));
    }
}

#[test]
fn disc_with_four_segments() {
    let disc = create_disc(&ProfileOptions {
        segments: 4,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(disc.vertex_count(), 5);
    assert_eq!(disc.cell_count(), 4);
    assert_eq!(disc.cell_stride(), 3);
    for i in 0..4 {
        assert!(disc.cell(i).unwrap().contains(&4));
    }
}

#[test]
fn torus_with_four_by_four_segments() {
    for quads in [true, false] {
        let torus = create_torus(&TorusOptions {
            major_radius: 2.0,
            minor_radius: 1.0,
            segments: 4,
            path_segments: 4,
            quads,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(torus.vertex_count(), 16);
        assert_eq!(torus.cell_count(), if quads { 16 } else { 32 });
        for p in torus.positions().chunks_exact(3) {
            let from_axis = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!(from_axis >= 1.0 - 1e-5 && from_axis <= 3.0 + 1e-5);
        }
    }
}

#[test]
fn edge_extraction_on_single_quad() {
    let edges = extract_edges(&[0, 1, 2, 3], 4, 4).unwrap();
    assert_eq!(edges, vec![0, 1, 1, 2, 2, 3, 3, 0]);
}

#[test]
fn box_has_eight_vertices_and_six_planar_quads() {
    let cube = create_box(&BoxOptions {
        sx: 1.0,
        sy: 2.0,
        sz: 3.0,
        quads: true,
    })
    .unwrap();
    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.cell_count(), 6);
    for i in 0..6 {
        let p: Vec<[f32; 3]> = cube
            .cell(i)
            .unwrap()
            .iter()
            .map(|&v| cube.position(v as usize).unwrap())
            .collect();
        let sub = |a: [f32; 3], b: [f32; 3]| [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
        let (u, v, w) = (sub(p[1], p[0]), sub(p[2], p[0]), sub(p[3], p[0]));
        let n = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        assert_abs_diff_eq!(n[0] * w[0] + n[1] * w[1] + n[2] * w[2], 0.0, epsilon = 1e-6);
    }
}

#[test]
fn interleaving_rejects_mismatched_attributes() {
    let positions = [0.0; 9];
    let uvs = [0.0; 4];
    let result = interleave(&[Attribute::new(&positions, 3), Attribute::new(&uvs, 2)]);
    assert!(matches!(result, Err(MeshError::AttributeLengthMismatch { .. })));
}

#[test]
fn interleaved_complex_has_eight_floats_per_vertex() {
    let quad = create_quad(&QuadOptions::default()).unwrap();
    let data = quad.interleaved().unwrap();
    assert_eq!(data.len(), 4 * 8);
    // First vertex: position, normal, uv.
    assert_eq!(&data[..8], &[-0.5, -0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn invalid_parameters_fail_before_generation() {
    assert!(create_disc(&ProfileOptions {
        segments: 2,
        ..Default::default()
    })
    .is_err());
    assert!(create_disc(&ProfileOptions {
        sx: -1.0,
        ..Default::default()
    })
    .is_err());
    assert!(create_disc(&ProfileOptions {
        theta: 0.0,
        ..Default::default()
    })
    .is_err());
    assert!(create_icosphere(&IcosphereOptions {
        radius: 0.0,
        subdivisions: 1,
    })
    .is_err());
}

#[test]
fn complex_serializes_camel_case() {
    let quad = create_quad(&QuadOptions::default()).unwrap();
    let json = serde_json::to_value(&quad).unwrap();
    assert_eq!(json["positions"].as_array().unwrap().len(), 12);
    assert_eq!(json["cells"].as_array().unwrap().len(), 6);
    assert_eq!(json["quads"], false);
    assert!(json.get("edges").is_none());
}
