//! Reflective confinement to the fixed cube `[-1, 1]^3`.

use crate::system::ParticleSystem;

/// Half-extent of the confining cube. The region is a fixed constant
/// of the simulator, not a parameter.
pub const BOUNDS_HALF_EXTENT: f32 = 1.0;

/// Clamp every mobile particle into the cube, reflecting the velocity
/// component on contact, scaled by `restitution`.
///
/// Each axis is resolved independently; a corner contact is the
/// composition of up to three axis corrections, not an exact
/// geometric bounce against the cube surface. Velocity is reflected
/// only while it still points outward, so a component already heading
/// back inside is never reflected a second time.
///
/// Pinned particles never move, so they are skipped and assumed to
/// start inside the cube.
pub fn resolve_wall_collisions(system: &mut ParticleSystem, restitution: f32) {
    for i in 0..system.len() {
        if system.is_pinned(i) {
            continue;
        }
        for axis in 0..3 {
            let p = system.positions[i][axis];
            if p < -BOUNDS_HALF_EXTENT {
                system.positions[i][axis] = -BOUNDS_HALF_EXTENT;
                let v = system.velocities[i][axis];
                if v < 0.0 {
                    system.velocities[i][axis] = -v * restitution;
                }
            } else if p > BOUNDS_HALF_EXTENT {
                system.positions[i][axis] = BOUNDS_HALF_EXTENT;
                let v = system.velocities[i][axis];
                if v > 0.0 {
                    system.velocities[i][axis] = -v * restitution;
                }
            }
        }
    }
}
