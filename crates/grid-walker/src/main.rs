//! Random-walk rollout runner for gridworld environments.

mod telemetry;

use anyhow::{Context, Result};
use grid_core::WorldConfig;
use grid_world::{layouts, Grid, GridWorld};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{debug, info};

const EPISODE_STEPS: usize = 200;
const RANDOM_WORLD_SIZE: i32 = 8;
const RANDOM_WALL_DENSITY: f32 = 0.2;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .context("seed must be an unsigned integer")?,
        None => 0,
    };
    let layout = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading layout file {path}"))?;
            WorldConfig::from_json(&json).with_context(|| format!("parsing layout file {path}"))?
        }
        None => layouts::walled_3x4(),
    };

    info!(seed, rows = layout.rows, cols = layout.cols, "starting rollouts");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let world = GridWorld::from_config(&layout)?;
    run_episode("layout", world, &mut rng)?;

    let grid = Grid::random(
        RANDOM_WORLD_SIZE,
        RANDOM_WORLD_SIZE,
        RANDOM_WALL_DENSITY,
        &mut rng,
    );
    run_episode("random", GridWorld::with_grid(grid), &mut rng)?;

    Ok(())
}

fn run_episode(name: &str, mut world: GridWorld, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut visited = HashSet::new();
    visited.insert(world.state());
    let mut blocked = 0usize;

    for _ in 0..EPISODE_STEPS {
        let action = rng.gen_range(0..world.num_actions());
        let before = world.state();
        let step = world.step(action)?;
        if step.state == before {
            blocked += 1;
        }
        visited.insert(step.state);
        debug!(
            episode = name,
            action,
            state = %step.state,
            reward = step.reward,
            done = step.done,
            "step"
        );
    }

    info!(
        episode = name,
        steps = EPISODE_STEPS,
        blocked,
        cells_visited = visited.len(),
        final_state = %world.state(),
        "episode complete"
    );
    Ok(())
}
