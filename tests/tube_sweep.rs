// tests/tube_sweep.rs
use glam::Vec3;
use hilbert_tube::{CurveError, PolylineCurve, SceneConfig, TubeSpec, sweep};

fn straight_line() -> PolylineCurve {
    PolylineCurve::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]).unwrap()
}

#[test]
fn mesh_sizes_follow_the_spec() {
    let spec = TubeSpec {
        segments: 4,
        radius: 0.5,
        radial_segments: 8,
    };
    let mesh = sweep(&straight_line(), &spec).unwrap();

    // One ring per segment boundary, one duplicated seam vertex per ring.
    assert_eq!(mesh.positions.len(), 5 * 9);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    assert_eq!(mesh.uvs.len(), mesh.positions.len());
    // Two triangles per grid quad.
    assert_eq!(mesh.indices.len(), 4 * 8 * 6);

    let vertex_count = mesh.positions.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < vertex_count));
}

#[test]
fn ring_vertices_sit_on_the_cross_section_circle() {
    let spec = TubeSpec {
        segments: 4,
        radius: 0.5,
        radial_segments: 8,
    };
    let mesh = sweep(&straight_line(), &spec).unwrap();

    // Straight tube along X: ring i is centered at x = 2.5 * i.
    for (v, position) in mesh.positions.iter().enumerate() {
        let ring = v / 9;
        let center = Vec3::new(2.5 * ring as f32, 0.0, 0.0);
        let offset = *position - center;
        assert!(
            (offset.length() - spec.radius).abs() < 1e-4,
            "vertex {v} off the circle: {position:?}"
        );
        // Cross-sections of a straight X tube stay in the ring plane.
        assert!(offset.x.abs() < 1e-4);
    }
}

#[test]
fn normals_are_unit_and_outward() {
    let spec = TubeSpec::default();
    let mesh = sweep(&straight_line(), &spec).unwrap();

    for (v, normal) in mesh.normals.iter().enumerate() {
        assert!((normal.length() - 1.0).abs() < 1e-4);

        let ring = v / (spec.radial_segments as usize + 1);
        let t = ring as f32 / spec.segments as f32;
        let center = Vec3::new(10.0 * t, 0.0, 0.0);
        let outward = (mesh.positions[v] - center).normalize();
        assert!((*normal - outward).length() < 1e-3);
    }
}

#[test]
fn degenerate_specs_are_rejected() {
    let curve = straight_line();
    for spec in [
        TubeSpec {
            segments: 0,
            ..TubeSpec::default()
        },
        TubeSpec {
            radial_segments: 2,
            ..TubeSpec::default()
        },
        TubeSpec {
            radius: 0.0,
            ..TubeSpec::default()
        },
        TubeSpec {
            radius: f32::NAN,
            ..TubeSpec::default()
        },
    ] {
        assert!(
            matches!(sweep(&curve, &spec), Err(CurveError::InvalidParameter(_))),
            "accepted degenerate spec {spec:?}"
        );
    }
}

#[test]
fn hilbert_curve_sweeps_with_the_display_defaults() {
    // End-to-end: config -> path -> curve -> tube, with the default
    // 64/0.35/32 sampling.
    let config = SceneConfig::default();
    let curve = PolylineCurve::new(config.curve_path().unwrap()).unwrap();
    let mesh = sweep(&curve, &TubeSpec::default()).unwrap();

    assert_eq!(mesh.positions.len(), 65 * 33);
    assert_eq!(mesh.indices.len(), 64 * 32 * 6);
    assert!(mesh.positions.iter().all(|p| p.is_finite()));
    assert!(mesh.normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-3));
}
