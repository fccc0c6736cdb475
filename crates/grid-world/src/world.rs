//! Gridworld environment with a discrete step interface.

use crate::agent::Agent;
use crate::grid::Grid;
use grid_core::{Direction, Error, Position, Result, WorldConfig, ACTION_MAP};
use tracing::trace;

/// Outcome of one environment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Agent position after the step
    pub state: Position,
    /// Immediate reward; the bare environment defines no reward model and
    /// always yields zero
    pub reward: f32,
    /// Episode-end flag; the bare environment never terminates
    pub done: bool,
}

/// A deterministic gridworld with a single agent.
///
/// `step` takes `&mut self` and the queries take `&self`, so each instance
/// has one owner and needs no synchronization. Callers running parallel
/// environments hold one independent instance each.
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Grid,
    agent: Agent,
}

impl GridWorld {
    /// Open `rows x cols` world with border walls only, agent at the origin
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::with_grid(Grid::new(rows, cols))
    }

    /// Build a world from a configuration, agent at the origin
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        Ok(Self::with_grid(Grid::from_config(config)?))
    }

    /// Wrap an existing grid, agent at the origin
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            agent: Agent::new(),
        }
    }

    /// Number of discrete actions
    pub fn num_actions(&self) -> usize {
        ACTION_MAP.len()
    }

    /// Apply one action.
    ///
    /// Resolves the action to a direction and moves the agent one cell
    /// unless a wall or the border blocks the move; a blocked move leaves
    /// the agent in place. Fails only on an action outside the action set,
    /// before any state changes.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let direction = self.resolve(action)?;
        let from = self.agent.position();
        if self.grid.has_wall(from, direction) {
            trace!(action, ?direction, %from, "move blocked");
        } else {
            let to = from.neighbor(direction);
            self.agent.move_to(to);
            trace!(action, ?direction, %from, %to, "agent moved");
        }
        Ok(Step {
            state: self.state(),
            reward: 0.0,
            done: false,
        })
    }

    /// Whether `step(action)` would move the agent from its current cell
    pub fn can_run(&self, action: usize) -> Result<bool> {
        let direction = self.resolve(action)?;
        Ok(!self.grid.has_wall(self.agent.position(), direction))
    }

    /// Current agent position
    pub fn state(&self) -> Position {
        self.agent.position()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn resolve(&self, action: usize) -> Result<Direction> {
        Direction::from_action(action).ok_or(Error::InvalidAction {
            action,
            limit: ACTION_MAP.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const LEFT: usize = 0;
    const RIGHT: usize = 1;
    const UP: usize = 2;
    const DOWN: usize = 3;

    #[test]
    fn test_open_grid_walk() {
        let mut world = GridWorld::new(3, 4);
        assert_eq!(world.state(), Position::new(0, 0));

        let step = world.step(RIGHT).unwrap();
        assert_eq!(step.state, Position::new(0, 1));
        assert_eq!(step.reward, 0.0);
        assert!(!step.done);

        // Up at row 0 runs into the border
        let step = world.step(UP).unwrap();
        assert_eq!(step.state, Position::new(0, 1));

        let step = world.step(LEFT).unwrap();
        assert_eq!(step.state, Position::new(0, 0));
    }

    #[test]
    fn test_invalid_action_is_rejected_before_mutation() {
        let mut world = GridWorld::new(3, 4);
        world.step(RIGHT).unwrap();
        let before = world.state();

        assert!(matches!(
            world.step(4),
            Err(Error::InvalidAction { action: 4, .. })
        ));
        assert!(matches!(
            world.can_run(7),
            Err(Error::InvalidAction { action: 7, .. })
        ));
        assert_eq!(world.state(), before);
    }

    #[test]
    fn test_blocked_move_is_idempotent() {
        let mut world = GridWorld::new(3, 4);
        assert!(!world.can_run(UP).unwrap());
        for _ in 0..5 {
            let step = world.step(UP).unwrap();
            assert_eq!(step.state, Position::new(0, 0));
        }
    }

    #[test]
    fn test_walled_layout_blocks_moves() {
        let mut world = GridWorld::from_config(&layouts::walled_3x4()).unwrap();

        let step = world.step(RIGHT).unwrap();
        assert_eq!(step.state, Position::new(0, 1));

        // Walls to the right of and below (0, 1)
        assert!(!world.can_run(RIGHT).unwrap());
        assert!(!world.can_run(DOWN).unwrap());
        assert_eq!(world.step(RIGHT).unwrap().state, Position::new(0, 1));
        assert_eq!(world.step(DOWN).unwrap().state, Position::new(0, 1));
        assert!(world.can_run(LEFT).unwrap());
    }

    #[test]
    fn test_rightmost_column_blocks_further_right() {
        let mut world = GridWorld::new(3, 4);
        world.step(DOWN).unwrap();
        for _ in 0..3 {
            world.step(RIGHT).unwrap();
        }
        assert_eq!(world.state(), Position::new(1, 3));
        assert!(!world.can_run(RIGHT).unwrap());
        assert_eq!(world.step(RIGHT).unwrap().state, Position::new(1, 3));
    }

    #[test]
    fn test_state_is_a_copy() {
        let mut world = GridWorld::new(3, 4);
        let mut state = world.state();
        state.row = 99;
        state.col = 99;
        assert_eq!(world.state(), Position::new(0, 0));
        assert_eq!(world.step(RIGHT).unwrap().state, Position::new(0, 1));
    }

    #[test]
    fn test_num_actions() {
        let world = GridWorld::new(2, 2);
        assert_eq!(world.num_actions(), 4);
    }

    proptest! {
        #[test]
        fn prop_step_agrees_with_can_run(
            rows in 1i32..6,
            cols in 1i32..6,
            wall_density in 0.0f32..0.6,
            seed in any::<u64>(),
            actions in proptest::collection::vec(0usize..4, 0..40),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut world = GridWorld::with_grid(Grid::random(rows, cols, wall_density, &mut rng));

            for action in actions {
                let before = world.state();
                let movable = world.can_run(action).unwrap();
                let step = world.step(action).unwrap();

                prop_assert_eq!(step.reward, 0.0);
                prop_assert!(!step.done);
                if movable {
                    let direction = Direction::from_action(action).unwrap();
                    prop_assert_eq!(step.state, before.neighbor(direction));
                } else {
                    prop_assert_eq!(step.state, before);
                }
                prop_assert!(world.grid().in_bounds(step.state));
                prop_assert_eq!(world.state(), step.state);
            }
        }

        #[test]
        fn prop_blocked_actions_stay_blocked(
            rows in 1i32..6,
            cols in 1i32..6,
            wall_density in 0.0f32..1.0,
            seed in any::<u64>(),
            action in 0usize..4,
            repeats in 1usize..10,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut world = GridWorld::with_grid(Grid::random(rows, cols, wall_density, &mut rng));

            if !world.can_run(action).unwrap() {
                let before = world.state();
                for _ in 0..repeats {
                    prop_assert_eq!(world.step(action).unwrap().state, before);
                }
            }
        }
    }
}
