//! Unit tests for the reflective bounding cube

use boxspring_core::collision::{resolve_wall_collisions, BOUNDS_HALF_EXTENT};
use boxspring_core::tests::test_helpers::approx_eq_f32;
use boxspring_core::{sim, ParticleSystem, Spring, StepParams};
use glam::Vec3;

#[test]
fn test_clamp_and_reflect_outward_velocity() {
    let mut system = ParticleSystem::new();
    system.push(Vec3::new(1.05, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 1.0);

    resolve_wall_collisions(&mut system, 0.5);

    assert_eq!(system.positions[0].x, BOUNDS_HALF_EXTENT);
    // Outward velocity is reflected and scaled by restitution
    assert!(approx_eq_f32(system.velocities[0].x, -5.0, 1e-5));
}

#[test]
fn test_clamp_without_reflecting_inward_velocity() {
    let mut system = ParticleSystem::new();
    system.push(Vec3::new(1.2, 0.0, 0.0), Vec3::new(-0.5, 0.0, 0.0), 1.0);

    resolve_wall_collisions(&mut system, 0.5);

    // Position is clamped, but a velocity already heading back inside
    // is left alone: no spurious double reflection
    assert_eq!(system.positions[0].x, BOUNDS_HALF_EXTENT);
    assert!(approx_eq_f32(system.velocities[0].x, -0.5, 1e-6));
}

#[test]
fn test_negative_wall_is_symmetric() {
    let mut system = ParticleSystem::new();
    system.push(Vec3::new(0.0, -1.3, 0.0), Vec3::new(0.0, -2.0, 0.0), 1.0);

    resolve_wall_collisions(&mut system, 0.25);

    assert_eq!(system.positions[0].y, -BOUNDS_HALF_EXTENT);
    assert!(approx_eq_f32(system.velocities[0].y, 0.5, 1e-5));
}

#[test]
fn test_axes_resolve_independently() {
    let mut system = ParticleSystem::new();
    // Out of bounds on x and z, inside on y
    system.push(
        Vec3::new(1.5, 0.0, -1.5),
        Vec3::new(1.0, 1.0, -1.0),
        1.0,
    );

    resolve_wall_collisions(&mut system, 1.0);

    assert_eq!(system.positions[0], Vec3::new(1.0, 0.0, -1.0));
    // x and z reflected, y untouched
    assert!(approx_eq_f32(system.velocities[0].x, -1.0, 1e-6));
    assert!(approx_eq_f32(system.velocities[0].y, 1.0, 1e-6));
    assert!(approx_eq_f32(system.velocities[0].z, 1.0, 1e-6));
}

#[test]
fn test_pinned_particle_exempt_even_outside_bounds() {
    let position = Vec3::new(2.0, 2.0, 2.0);
    let mut system = ParticleSystem::new();
    system.push(position, Vec3::new(1.0, 1.0, 1.0), 0.0);

    resolve_wall_collisions(&mut system, 0.5);

    assert_eq!(system.positions[0], position);
}

#[test]
fn test_restitution_scales_rebound_speed() {
    // Free particle released above the floor with gravity off: it
    // drifts down at constant speed v = 1, bounces, and must come back
    // up at exactly v * restitution.
    let mut system = ParticleSystem::new();
    system.push(Vec3::new(0.0, 0.0, 1.5), Vec3::new(0.0, 0.0, -1.0), 1.0);
    let springs: [Spring; 0] = [];
    let params = StepParams {
        restitution: 0.5,
        ..StepParams::new(0.01)
    };

    // 1.5 down to -1.0 at 0.01 per step is well under 300 steps
    let mut bounced = false;
    for _ in 0..300 {
        sim::step(&mut system, &springs, &params).unwrap();
        if system.velocities[0].z > 0.0 {
            bounced = true;
            break;
        }
    }

    assert!(bounced, "Particle should reach the floor and bounce");
    assert!(approx_eq_f32(system.velocities[0].z, 0.5, 1e-5));
}

#[test]
fn test_containment_holds_across_many_steps() {
    let mut system = ParticleSystem::new();
    system.push(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(3.0, -4.0, 5.0),
        1.0,
    );
    let springs: [Spring; 0] = [];
    let params = StepParams {
        dt: 0.01,
        stiffness: 0.0,
        damping: 0.0,
        gravity: Vec3::new(0.0, -9.8, 0.0),
        restitution: 0.9,
    };

    for _ in 0..1000 {
        sim::step(&mut system, &springs, &params).unwrap();
        let p = system.positions[0];
        for axis in 0..3 {
            assert!(
                p[axis] >= -BOUNDS_HALF_EXTENT && p[axis] <= BOUNDS_HALF_EXTENT,
                "axis {} escaped the cube: {}",
                axis,
                p[axis]
            );
        }
    }
}
