//! A discrete-time simulator for point masses joined by damped
//! springs, pulled by gravity, and confined to the cube `[-1, 1]^3`
//! with reflective walls.
//!
//! One call to [`sim::step`] advances the system by one fixed time
//! step: spring and gravity forces are accumulated, the state is
//! integrated with semi-implicit Euler, and every mobile particle is
//! clamped back into the cube with its velocity reflected. The caller
//! owns the state and the step cadence; the simulator keeps nothing
//! between calls.

pub mod collision;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scene;
pub mod sim;
pub mod system;

pub use error::{RunError, SimError};
pub use params::StepParams;
pub use scene::{parse_scene, ParticleDecl, SceneDesc, SceneError};
pub use sim::{
    build_simulation_context, build_simulation_context_from_source, get_particle_states,
    run_source, step, step_simulation, ParticleState, SimulationContext,
};
pub use system::{ParticleSystem, Spring};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
