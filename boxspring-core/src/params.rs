use crate::error::SimError;
use glam::Vec3;

/// Scalar parameters for one step, constant for that call.
///
/// `restitution` is conventionally in `[0, 1]` but is deliberately not
/// clamped: values outside that range pass through and gain or lose
/// energy on each bounce accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Time step, must be positive.
    pub dt: f32,
    /// Spring constant (Hooke's law), must be non-negative.
    pub stiffness: f32,
    /// Velocity-difference damping coefficient along the spring axis,
    /// must be non-negative.
    pub damping: f32,
    /// Acceleration applied to every unpinned particle.
    pub gravity: Vec3,
    /// Fraction of outward speed retained after a wall bounce.
    pub restitution: f32,
}

impl StepParams {
    /// Parameters with the given time step and everything else inert:
    /// no stiffness, no damping, no gravity, perfectly elastic walls.
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            stiffness: 0.0,
            damping: 0.0,
            gravity: Vec3::ZERO,
            restitution: 1.0,
        }
    }

    /// Fail fast on out-of-range scalars. Restitution and gravity are
    /// intentionally unconstrained.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0) {
            return Err(SimError::NonPositiveTimeStep(self.dt));
        }
        if self.stiffness < 0.0 {
            return Err(SimError::NegativeStiffness(self.stiffness));
        }
        if self.damping < 0.0 {
            return Err(SimError::NegativeDamping(self.damping));
        }
        Ok(())
    }
}
