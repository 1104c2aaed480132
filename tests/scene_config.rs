// tests/scene_config.rs
use glam::Vec3;
use hilbert_tube::{CurveError, SceneConfig, Theme};

#[test]
fn defaults_match_the_display_conventions() {
    let config = SceneConfig::default();
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.iterations, 3);
    assert!(!config.no_zoom);
    assert!(!config.auto_rotate);
    assert!(!config.randomize_start_position);
    assert!(!config.extra_lighting);
}

#[test]
fn recognized_pairs_are_applied_and_unknown_keys_ignored() {
    let config = SceneConfig::from_pairs([
        ("theme", "light"),
        ("iterations", "2"),
        ("autoRotate", "true"),
        ("extraLighting", "true"),
        ("utm_source", "newsletter"),
    ])
    .unwrap();

    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.iterations, 2);
    assert!(config.auto_rotate);
    assert!(config.extra_lighting);
    assert!(!config.no_zoom);
}

#[test]
fn iterations_are_clamped_into_the_supported_range() {
    let config = SceneConfig::from_pairs([("iterations", "9")]).unwrap();
    assert_eq!(config.iterations, 4);

    let config = SceneConfig::from_pairs([("iterations", "0")]).unwrap();
    assert_eq!(config.iterations, 1);
}

#[test]
fn unparsable_values_are_rejected() {
    assert!(matches!(
        SceneConfig::from_pairs([("iterations", "many")]),
        Err(CurveError::InvalidParameter(_))
    ));
    assert!(matches!(
        SceneConfig::from_pairs([("theme", "blue")]),
        Err(CurveError::InvalidParameter(_))
    ));
    assert!(matches!(
        SceneConfig::from_pairs([("noZoom", "yes")]),
        Err(CurveError::InvalidParameter(_))
    ));
}

#[test]
fn derived_step_size_matches_the_display_scaling() {
    let at = |n| SceneConfig {
        iterations: n,
        ..SceneConfig::default()
    };
    assert_eq!(at(1).step_size(), 10.0);
    assert_eq!(at(2).step_size(), 10.0);
    assert_eq!(at(3).step_size(), 5.0);
    assert_eq!(at(4).step_size(), 10.0 / 3.0);
}

#[test]
fn start_position_offsets_by_the_curve_extent() {
    let config = SceneConfig {
        iterations: 1,
        ..SceneConfig::default()
    };
    assert_eq!(config.start_position(), Vec3::new(-10.0, -10.0, 10.0));

    // n = 3: step 5, extent 5 * (2^3 - 1) = 35.
    let config = SceneConfig::default();
    assert_eq!(config.start_position(), Vec3::new(-35.0, -35.0, 35.0));
}

#[test]
fn curve_path_visits_one_point_per_lattice_cell() {
    // 8^n points for n rewrite passes.
    for (n, expected) in [(1, 8), (2, 64), (3, 512)] {
        let config = SceneConfig {
            iterations: n,
            ..SceneConfig::default()
        };
        let path = config.curve_path().unwrap();
        assert_eq!(path.len(), expected);
        assert_eq!(path[0], config.start_position());
    }
}

#[test]
fn explicit_start_positions_are_honored() {
    let config = SceneConfig::default();
    let start = Vec3::new(100.0, 0.0, -100.0);
    let path = config.curve_path_from(start).unwrap();
    assert_eq!(path[0], start);
    assert_eq!(path.len(), 512);
}
