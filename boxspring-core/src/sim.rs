//! Step orchestration and the scene-driven runtime.

use crate::collision::resolve_wall_collisions;
use crate::error::{RunError, SimError};
use crate::forces::accumulate_forces;
use crate::integrator::integrate;
use crate::params::StepParams;
use crate::scene::{parse_scene, SceneDesc};
use crate::system::{validate_springs, ParticleSystem, Spring};
use glam::Vec3;

/// Check everything a step needs before it mutates anything: array
/// shapes, spring topology, and step parameters. A step either runs to
/// completion or leaves the system untouched.
pub fn validate_step(
    system: &ParticleSystem,
    springs: &[Spring],
    params: &StepParams,
) -> Result<(), SimError> {
    system.validate()?;
    validate_springs(springs, system.len())?;
    params.validate()
}

/// Advance the system by one fixed step: accumulate forces, integrate
/// with semi-implicit Euler, then confine to the bounding cube.
///
/// Positions and velocities are updated in place. Same inputs always
/// produce the same outputs; nothing here depends on hidden state.
pub fn step(
    system: &mut ParticleSystem,
    springs: &[Spring],
    params: &StepParams,
) -> Result<(), SimError> {
    validate_step(system, springs, params)?;

    let forces = accumulate_forces(system, springs, params);
    integrate(system, &forces, params.dt);
    resolve_wall_collisions(system, params.restitution);

    Ok(())
}

/// Position and velocity of one particle, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// A scene instantiated and ready to run: the system, its springs, the
/// step parameters, and how far along the run is.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub system: ParticleSystem,
    pub springs: Vec<Spring>,
    pub params: StepParams,
    pub steps: u32,
    pub current_step: u32,
}

impl SimulationContext {
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.steps
    }
}

/// Build a runnable context from a parsed scene, validating it
/// up front so stepping cannot fail on structure later.
pub fn build_simulation_context(scene: &SceneDesc) -> Result<SimulationContext, SimError> {
    let mut system = ParticleSystem::new();
    for decl in &scene.particles {
        system.push(decl.position, decl.velocity, decl.mass);
    }

    let params = StepParams {
        dt: scene.dt,
        stiffness: scene.stiffness,
        damping: scene.damping,
        gravity: scene.gravity,
        restitution: scene.restitution,
    };

    validate_step(&system, &scene.springs, &params)?;

    Ok(SimulationContext {
        system,
        springs: scene.springs.clone(),
        params,
        steps: scene.steps,
        current_step: 0,
    })
}

/// Parse scene source and build a runnable context from it.
pub fn build_simulation_context_from_source(source: &str) -> Result<SimulationContext, RunError> {
    let scene = parse_scene(source)?;
    Ok(build_simulation_context(&scene)?)
}

/// Advance a context by one step.
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<(), SimError> {
    step(&mut ctx.system, &ctx.springs, &ctx.params)?;
    ctx.current_step += 1;
    Ok(())
}

/// Snapshot the per-particle states in index order.
pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.system
        .positions
        .iter()
        .zip(&ctx.system.velocities)
        .map(|(&position, &velocity)| ParticleState { position, velocity })
        .collect()
}

/// Main entry point: parse a scene, run it to completion, and return
/// the final particle states.
pub fn run_source(source: &str) -> Result<Vec<ParticleState>, RunError> {
    let mut ctx = build_simulation_context_from_source(source)?;
    while !ctx.is_finished() {
        step_simulation(&mut ctx)?;
    }
    Ok(get_particle_states(&ctx))
}
