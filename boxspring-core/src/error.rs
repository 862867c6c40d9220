use crate::scene::SceneError;
use thiserror::Error;

/// Structural and parameter errors detected before a step mutates
/// anything. A step either applies fully or not at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("positions and velocities differ in length ({positions} vs {velocities})")]
    ShapeMismatch { positions: usize, velocities: usize },

    #[error("mass array length {masses} does not match particle count {particles}")]
    MassShapeMismatch { masses: usize, particles: usize },

    #[error("spring {spring} references particle {index}, but the system has {count} particles")]
    SpringIndexOutOfRange {
        spring: usize,
        index: usize,
        count: usize,
    },

    #[error("spring {spring} connects particle {index} to itself")]
    SelfSpring { spring: usize, index: usize },

    #[error("spring {spring} has negative rest length {rest}")]
    NegativeRestLength { spring: usize, rest: f32 },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f32),

    #[error("stiffness must be non-negative, got {0}")]
    NegativeStiffness(f32),

    #[error("damping must be non-negative, got {0}")]
    NegativeDamping(f32),
}

/// Anything that can go wrong between scene source text and a finished
/// run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Sim(#[from] SimError),
}
