// src/main.rs

use anyhow::Context;
use log::info;
use std::fs::File;
use std::io::BufWriter;

use ray_tracer::{
    color,
    config::CONFIG,
    point,
    projectile::{self, Environment, Projectile},
    vector, Canvas,
};

/// Main entry point for the `projectiles` demo.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting projectiles...");
    let config = &*CONFIG;
    let proj_config = &config.projectile;

    // --- Initial State ---
    let [sx, sy, sz] = proj_config.start;
    let [vx, vy, vz] = proj_config.velocity;
    let velocity = vector(vx, vy, vz)
        .normalize()
        .context("Failed to initialize the velocity")?
        * proj_config.velocity_scale;

    let start = Projectile {
        position: point(sx, sy, sz),
        velocity,
    };

    let [gx, gy, gz] = proj_config.gravity;
    let [wx, wy, wz] = proj_config.wind;
    let env = Environment {
        gravity: vector(gx, gy, gz),
        wind: vector(wx, wy, wz),
    };
    info!(
        "Launching from {} with velocity {}, gravity {}, wind {}",
        start.position, start.velocity, env.gravity, env.wind
    );

    // --- Simulation ---
    let trajectory =
        projectile::fly(&env, start, proj_config.max_ticks).context("Failed to tick")?;
    for proj in &trajectory {
        println!("proj new position: {}", proj.position);
    }
    println!("\nmission accomplished!");

    // --- Rendering ---
    let output = &config.output;
    if let Some(path) = &output.path {
        let mut canvas =
            Canvas::new(output.width, output.height).context("Failed to create the canvas")?;
        let [r, g, b] = output.trail_color;
        projectile::plot(&mut canvas, &trajectory, color(r, g, b));

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        canvas
            .write_ppm(&mut BufWriter::new(file), &output.identifier, output.max_color)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} ticks to {}", trajectory.len(), path.display());
    }

    Ok(())
}
