//! Force accumulation over the spring graph plus gravity.

use crate::params::StepParams;
use crate::system::{ParticleSystem, Spring};
use glam::Vec3;

/// Separations at or below this length contribute no spring force.
///
/// Two coincident endpoints have no well-defined spring axis; treating
/// them as a zero contribution avoids dividing by a near-zero length.
/// This is an expected, benign configuration, not an error.
pub const LENGTH_EPSILON: f32 = 1e-8;

/// Compute the net force on every particle for the current
/// configuration: Hooke spring forces, axial velocity-difference
/// damping, and gravity scaled by each particle's mass.
///
/// Pure with respect to the system: positions and velocities are only
/// read. Summation over springs is order-independent up to
/// floating-point rounding. Pinned particles (mass `<= 0`) receive no
/// gravity; spring forces accumulated on them are discarded later by
/// the integrator, which never moves a pinned particle.
pub fn accumulate_forces(
    system: &ParticleSystem,
    springs: &[Spring],
    params: &StepParams,
) -> Vec<Vec3> {
    let mut forces = vec![Vec3::ZERO; system.len()];

    for spring in springs {
        let delta = system.positions[spring.b] - system.positions[spring.a];
        let len = delta.length();
        if len <= LENGTH_EPSILON {
            continue;
        }
        // Unit direction from a toward b.
        let n = delta / len;

        // Hooke: positive when stretched, pulling the endpoints
        // together; negative when compressed, pushing them apart.
        let stretch = len - spring.rest;
        let spring_mag = params.stiffness * stretch;

        // Damping acts along the spring axis only: project the
        // relative velocity onto n. Transverse motion is not damped.
        let rel_vel = system.velocities[spring.b] - system.velocities[spring.a];
        let rel_along = rel_vel.dot(n);
        let damping_mag = params.damping * rel_along;

        let force = n * (spring_mag + damping_mag);
        forces[spring.a] += force;
        forces[spring.b] -= force;
    }

    for (i, force) in forces.iter_mut().enumerate() {
        if system.masses[i] > 0.0 {
            *force += params.gravity * system.masses[i];
        }
    }

    forces
}
