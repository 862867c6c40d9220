use crate::error::SimError;
use glam::Vec3;

/// A damped elastic constraint between two particles.
///
/// Endpoints reference particles by index into the owning
/// [`ParticleSystem`]. Springs are read-only inputs to a step; the
/// simulator never creates, destroys, or mutates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: usize,     // particle index
    pub b: usize,     // particle index
    pub rest: f32,    // rest length, >= 0
}

impl Spring {
    pub fn new(a: usize, b: usize, rest: f32) -> Self {
        Self { a, b, rest }
    }
}

/// The particle state: index-addressed parallel arrays.
///
/// A particle is a point mass with position and velocity, no
/// orientation or size. A mass of `<= 0` pins that particle: it
/// accumulates no force, never moves, and is exempt from collision
/// response. Pinning is per particle; give every particle the same
/// non-positive mass to freeze the whole system.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub masses: Vec<f32>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a system where every particle shares one mass value.
    ///
    /// This reproduces the all-or-nothing model where a single
    /// non-positive mass parameter pins the entire system.
    pub fn with_uniform_mass(positions: Vec<Vec3>, velocities: Vec<Vec3>, mass: f32) -> Self {
        let masses = vec![mass; positions.len()];
        Self {
            positions,
            velocities,
            masses,
        }
    }

    /// Append a particle, returning its index.
    pub fn push(&mut self, position: Vec3, velocity: Vec3, mass: f32) -> usize {
        let idx = self.positions.len();
        self.positions.push(position);
        self.velocities.push(velocity);
        self.masses.push(mass);
        idx
    }

    /// Number of particles, taken from the positions array.
    ///
    /// The parallel arrays are public, so they can drift out of sync;
    /// [`validate`](Self::validate) catches that before a step runs.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether particle `i` is pinned (non-positive mass).
    pub fn is_pinned(&self, i: usize) -> bool {
        self.masses[i] <= 0.0
    }

    /// Check the parallel arrays agree in length.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.positions.len() != self.velocities.len() {
            return Err(SimError::ShapeMismatch {
                positions: self.positions.len(),
                velocities: self.velocities.len(),
            });
        }
        if self.masses.len() != self.positions.len() {
            return Err(SimError::MassShapeMismatch {
                masses: self.masses.len(),
                particles: self.positions.len(),
            });
        }
        Ok(())
    }
}

/// Check every spring references two distinct in-range particles and
/// carries a non-negative rest length.
pub fn validate_springs(springs: &[Spring], particle_count: usize) -> Result<(), SimError> {
    for (idx, spring) in springs.iter().enumerate() {
        for endpoint in [spring.a, spring.b] {
            if endpoint >= particle_count {
                return Err(SimError::SpringIndexOutOfRange {
                    spring: idx,
                    index: endpoint,
                    count: particle_count,
                });
            }
        }
        if spring.a == spring.b {
            return Err(SimError::SelfSpring {
                spring: idx,
                index: spring.a,
            });
        }
        if spring.rest < 0.0 {
            return Err(SimError::NegativeRestLength {
                spring: idx,
                rest: spring.rest,
            });
        }
    }
    Ok(())
}
