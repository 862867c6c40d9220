//! Unit tests for the scene file parser

use boxspring_core::scene::{parse_scene, SceneError};
use boxspring_core::tests::test_helpers::approx_eq_f32;
use glam::Vec3;

const GOOD_SCENE: &str = r#"
# two masses joined by a spring, falling inside the box
particle at (-0.5, 0.0, 0.0) mass 1.0
particle at (0.5, 0.0, 0.0) mass 1.0 vel (0.0, 0.25, 0.0)
spring (0, 1) rest = 1.0
stiffness = 100.0
damping = 1.0
restitution = 0.5
gravity (0.0, -9.8, 0.0)
simulate dt = 0.01 steps = 100
"#;

#[test]
fn test_parse_full_scene() {
    let scene = parse_scene(GOOD_SCENE).expect("Should parse");

    assert_eq!(scene.particles.len(), 2);
    assert_eq!(scene.particles[0].position, Vec3::new(-0.5, 0.0, 0.0));
    assert_eq!(scene.particles[0].velocity, Vec3::ZERO);
    assert_eq!(scene.particles[1].velocity, Vec3::new(0.0, 0.25, 0.0));
    assert!(approx_eq_f32(scene.particles[1].mass, 1.0, 1e-6));

    assert_eq!(scene.springs.len(), 1);
    assert_eq!(scene.springs[0].a, 0);
    assert_eq!(scene.springs[0].b, 1);
    assert!(approx_eq_f32(scene.springs[0].rest, 1.0, 1e-6));

    assert!(approx_eq_f32(scene.stiffness, 100.0, 1e-6));
    assert!(approx_eq_f32(scene.damping, 1.0, 1e-6));
    assert!(approx_eq_f32(scene.restitution, 0.5, 1e-6));
    assert_eq!(scene.gravity, Vec3::new(0.0, -9.8, 0.0));
    assert!(approx_eq_f32(scene.dt, 0.01, 1e-6));
    assert_eq!(scene.steps, 100);
}

#[test]
fn test_defaults_when_parameters_omitted() {
    let scene = parse_scene(
        "particle at (0.0, 0.0, 0.0) mass 1.0\nsimulate dt = 0.1 steps = 5\n",
    )
    .expect("Should parse");

    assert_eq!(scene.stiffness, 0.0);
    assert_eq!(scene.damping, 0.0);
    assert_eq!(scene.restitution, 1.0);
    assert_eq!(scene.gravity, Vec3::ZERO);
    assert!(scene.springs.is_empty());
}

#[test]
fn test_missing_simulate_line() {
    let result = parse_scene("particle at (0.0, 0.0, 0.0) mass 1.0\n");
    assert!(matches!(result, Err(SceneError::MissingSimulate)));
}

#[test]
fn test_unexpected_token_reports_line() {
    let result = parse_scene("\n\nbogus line here\nsimulate dt = 0.1 steps = 1\n");
    match result {
        Err(SceneError::Syntax { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("bogus"));
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_wrong_vector_arity() {
    let result = parse_scene("particle at (1.0, 2.0) mass 1.0\nsimulate dt = 0.1 steps = 1\n");
    match result {
        Err(SceneError::Syntax { line, .. }) => assert_eq!(line, 1),
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_bad_number_is_rejected() {
    let result = parse_scene("stiffness = lots\nsimulate dt = 0.1 steps = 1\n");
    match result {
        Err(SceneError::Syntax { line, message }) => {
            assert_eq!(line, 1);
            assert!(message.contains("lots"));
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_malformed_simulate_line() {
    let result = parse_scene("simulate dt 0.1 steps 5\n");
    assert!(matches!(result, Err(SceneError::Syntax { line: 1, .. })));
}

#[test]
fn test_trailing_garbage_is_rejected() {
    let result =
        parse_scene("particle at (0.0, 0.0, 0.0) mass 1.0 vel (0.0, 0.0, 0.0) extra\nsimulate dt = 0.1 steps = 1\n");
    assert!(matches!(result, Err(SceneError::Syntax { line: 1, .. })));
}
