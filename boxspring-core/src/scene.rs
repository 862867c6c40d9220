//! Line-oriented scene files describing a particle system, its
//! springs, and the step parameters to run it with.
//!
//! ```text
//! # two masses joined by a spring, falling inside the box
//! particle at (-0.5, 0.0, 0.0) mass 1.0
//! particle at (0.5, 0.0, 0.0) mass 1.0 vel (0.0, 0.0, 0.0)
//! spring (0, 1) rest = 1.0
//! stiffness = 100.0
//! damping = 1.0
//! restitution = 0.5
//! gravity (0.0, -9.8, 0.0)
//! simulate dt = 0.01 steps = 100
//! ```
//!
//! `particle` lines append in index order; springs reference particles
//! by those indices. Scalar lines and `gravity` are optional. The
//! `simulate` line is mandatory.

use crate::system::Spring;
use glam::Vec3;
use thiserror::Error;

/// Parse error carrying the 1-based source line it occurred on.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("scene has no 'simulate' line")]
    MissingSimulate,
}

impl SceneError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// A particle as declared in a scene file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDecl {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
}

/// A parsed scene: declarations only, not yet validated against the
/// simulator's structural rules (that happens when a simulation
/// context is built from it).
#[derive(Debug, Clone)]
pub struct SceneDesc {
    pub particles: Vec<ParticleDecl>,
    pub springs: Vec<Spring>,
    pub stiffness: f32,
    pub damping: f32,
    pub restitution: f32,
    pub gravity: Vec3,
    pub dt: f32,
    pub steps: u32,
}

/// Parse a scene from source text.
pub fn parse_scene(source: &str) -> Result<SceneDesc, SceneError> {
    let mut particles = Vec::new();
    let mut springs = Vec::new();
    let mut stiffness = 0.0;
    let mut damping = 0.0;
    let mut restitution = 1.0;
    let mut gravity = Vec3::ZERO;
    let mut simulate = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("particle ") {
            particles.push(parse_particle(rest.trim(), line_no)?);
        } else if let Some(rest) = line.strip_prefix("spring ") {
            springs.push(parse_spring(rest.trim(), line_no)?);
        } else if let Some(rest) = line.strip_prefix("stiffness") {
            stiffness = parse_assigned_f32(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("damping") {
            damping = parse_assigned_f32(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("restitution") {
            restitution = parse_assigned_f32(rest, line_no)?;
        } else if let Some(rest) = line.strip_prefix("gravity") {
            let (v, tail) = take_vec3(rest.trim(), line_no)?;
            expect_end(tail, line_no)?;
            gravity = v;
        } else if let Some(rest) = line.strip_prefix("simulate ") {
            simulate = Some(parse_simulate(rest.trim(), line_no)?);
        } else {
            let token = line.split_whitespace().next().unwrap_or("");
            return Err(SceneError::syntax(
                line_no,
                format!("unexpected token '{}'", token),
            ));
        }
    }

    let (dt, steps) = simulate.ok_or(SceneError::MissingSimulate)?;

    Ok(SceneDesc {
        particles,
        springs,
        stiffness,
        damping,
        restitution,
        gravity,
        dt,
        steps,
    })
}

/// `at (x, y, z) mass m [vel (x, y, z)]`
fn parse_particle(rest: &str, line_no: usize) -> Result<ParticleDecl, SceneError> {
    let rest = rest
        .strip_prefix("at")
        .ok_or_else(|| SceneError::syntax(line_no, "expected 'at' after 'particle'"))?;
    let (position, rest) = take_vec3(rest.trim(), line_no)?;

    let rest = rest
        .trim()
        .strip_prefix("mass")
        .ok_or_else(|| SceneError::syntax(line_no, "expected 'mass' after particle position"))?;
    let (mass_token, rest) = split_first_token(rest.trim());
    let mass = parse_f32(mass_token, line_no)?;

    let mut velocity = Vec3::ZERO;
    let rest = rest.trim();
    if !rest.is_empty() {
        let rest = rest
            .strip_prefix("vel")
            .ok_or_else(|| SceneError::syntax(line_no, "expected 'vel' after particle mass"))?;
        let (v, tail) = take_vec3(rest.trim(), line_no)?;
        expect_end(tail, line_no)?;
        velocity = v;
    }

    Ok(ParticleDecl {
        position,
        velocity,
        mass,
    })
}

/// `(a, b) rest = r`
fn parse_spring(rest: &str, line_no: usize) -> Result<Spring, SceneError> {
    let (inner, rest) = take_parens(rest, line_no)?;
    let endpoints: Vec<&str> = inner.split(',').map(str::trim).collect();
    if endpoints.len() != 2 {
        return Err(SceneError::syntax(
            line_no,
            "expected two particle indices in 'spring (a, b)'",
        ));
    }
    let a = parse_usize(endpoints[0], line_no)?;
    let b = parse_usize(endpoints[1], line_no)?;

    let rest_len = rest
        .trim()
        .strip_prefix("rest")
        .map(|tail| parse_assigned_f32(tail, line_no))
        .ok_or_else(|| SceneError::syntax(line_no, "expected 'rest = <value>' after spring endpoints"))??;

    Ok(Spring::new(a, b, rest_len))
}

/// `dt = <value> steps = <count>`
fn parse_simulate(rest: &str, line_no: usize) -> Result<(f32, u32), SceneError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 6 || tokens[0] != "dt" || tokens[1] != "=" || tokens[3] != "steps" || tokens[4] != "="
    {
        return Err(SceneError::syntax(
            line_no,
            "expected 'simulate dt = <value> steps = <count>'",
        ));
    }
    let dt = parse_f32(tokens[2], line_no)?;
    let steps = tokens[5]
        .parse::<u32>()
        .map_err(|_| SceneError::syntax(line_no, format!("invalid step count '{}'", tokens[5])))?;
    Ok((dt, steps))
}

/// `= <value>` with optional surrounding whitespace.
fn parse_assigned_f32(rest: &str, line_no: usize) -> Result<f32, SceneError> {
    let rest = rest
        .trim()
        .strip_prefix('=')
        .ok_or_else(|| SceneError::syntax(line_no, "expected '=' in assignment"))?;
    let (token, tail) = split_first_token(rest.trim());
    expect_end(tail, line_no)?;
    parse_f32(token, line_no)
}

/// Consume a leading `(x, y, z)` group, returning the vector and the
/// remainder of the line.
fn take_vec3<'a>(rest: &'a str, line_no: usize) -> Result<(Vec3, &'a str), SceneError> {
    let (inner, tail) = take_parens(rest, line_no)?;
    let components: Vec<&str> = inner.split(',').map(str::trim).collect();
    if components.len() != 3 {
        return Err(SceneError::syntax(
            line_no,
            format!("expected three components in '({})'", inner),
        ));
    }
    let x = parse_f32(components[0], line_no)?;
    let y = parse_f32(components[1], line_no)?;
    let z = parse_f32(components[2], line_no)?;
    Ok((Vec3::new(x, y, z), tail))
}

/// Consume a leading parenthesized group.
fn take_parens<'a>(rest: &'a str, line_no: usize) -> Result<(&'a str, &'a str), SceneError> {
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| SceneError::syntax(line_no, "expected '('"))?;
    let close = rest
        .find(')')
        .ok_or_else(|| SceneError::syntax(line_no, "unclosed '('"))?;
    Ok((&rest[..close], &rest[close + 1..]))
}

fn split_first_token(rest: &str) -> (&str, &str) {
    match rest.find(char::is_whitespace) {
        Some(end) => (&rest[..end], &rest[end..]),
        None => (rest, ""),
    }
}

fn expect_end(tail: &str, line_no: usize) -> Result<(), SceneError> {
    if tail.trim().is_empty() {
        Ok(())
    } else {
        Err(SceneError::syntax(
            line_no,
            format!("unexpected trailing input '{}'", tail.trim()),
        ))
    }
}

fn parse_f32(token: &str, line_no: usize) -> Result<f32, SceneError> {
    token
        .parse::<f32>()
        .map_err(|_| SceneError::syntax(line_no, format!("invalid number '{}'", token)))
}

fn parse_usize(token: &str, line_no: usize) -> Result<usize, SceneError> {
    token
        .parse::<usize>()
        .map_err(|_| SceneError::syntax(line_no, format!("invalid particle index '{}'", token)))
}
