use crate::system::ParticleSystem;
use glam::Vec3;

/// Advance velocities and positions by dt using semi-implicit Euler
/// integration: `v += (F/m) * dt`, then `x += v * dt` with the updated
/// velocity. The ordering is what keeps stiff springs bounded; using
/// the pre-step velocity for the position update would be plain
/// explicit Euler, a different and less stable scheme.
///
/// Pinned particles (mass `<= 0`) are left untouched, velocity and
/// position both.
///
/// The scheme is conditionally stable: a large enough
/// `dt * stiffness / mass` still diverges, and no sub-stepping or
/// stability check happens here.
pub fn integrate(system: &mut ParticleSystem, forces: &[Vec3], dt: f32) {
    for i in 0..system.len() {
        let mass = system.masses[i];
        if mass <= 0.0 {
            continue;
        }
        let accel = forces[i] / mass;
        system.velocities[i] += accel * dt;
        system.positions[i] += system.velocities[i] * dt;
    }
}
