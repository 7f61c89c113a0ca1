// src/projectile.rs

//! Projectile simulation: a point pushed along by its velocity while gravity
//! and wind act on the velocity every tick.

use log::{debug, trace};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::tuple::Tuple;

/// A moving body. `position` is a point, `velocity` a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

/// Constant forces applied every tick. Both are vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

/// Advances the projectile by one unit of time.
///
/// # Errors
/// Propagates `InvalidOperation` from the tuple algebra. Well-formed inputs
/// (point position, vector velocity and forces) never produce one.
pub fn tick(env: &Environment, proj: &Projectile) -> Result<Projectile> {
    let position = proj.position.add(&proj.velocity)?;
    let velocity = proj.velocity.add(&env.gravity)?.add(&env.wind)?;
    Ok(Projectile { position, velocity })
}

/// Ticks until the projectile is no longer above the ground (`y <= 0`) or
/// `max_ticks` have elapsed, returning every state after the start.
pub fn fly(env: &Environment, start: Projectile, max_ticks: usize) -> Result<Vec<Projectile>> {
    let mut trajectory = Vec::new();
    let mut proj = start;
    while proj.position.y > 0.0 && trajectory.len() < max_ticks {
        proj = tick(env, &proj)?;
        trace!("Tick {}: position {}", trajectory.len() + 1, proj.position);
        trajectory.push(proj);
    }
    debug!("Flight finished after {} ticks", trajectory.len());
    Ok(trajectory)
}

/// Marks each position on `canvas`, with `y` growing upwards from the bottom
/// row. Positions that land outside the canvas are skipped.
pub fn plot(canvas: &mut Canvas, trajectory: &[Projectile], color: Tuple) {
    let bottom = canvas.height() as i64 - 1;
    for proj in trajectory {
        let x = proj.position.x.round() as i64;
        let Some(y) = bottom.checked_sub(proj.position.y.round() as i64) else {
            debug!("Position {} is too far below the canvas", proj.position);
            continue;
        };
        match canvas.write_pixel(x, y, color) {
            Ok(()) => {}
            Err(Error::InvalidPoint { x, y }) => {
                debug!("Position {} maps off canvas at ({}, {})", proj.position, x, y);
            }
            Err(e) => debug!("Skipping position {}: {}", proj.position, e),
        }
    }
}
