//! 2D grid geometry with wall lookups.

use grid_core::{Direction, Position, Result, WorldConfig};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// A bounded 2D grid with walls between adjacent cells.
///
/// Walls live on a lattice of `(2 * rows + 1) x (2 * cols + 1)` booleans:
/// cell `(r, c)` sits at lattice entry `(2r + 1, 2c + 1)` and the wall slot
/// between two adjacent cells is the midpoint of their lattice entries. The
/// border ring is filled at construction, so the out-of-bounds check and the
/// wall check are the same lookup. Walls are fixed once the grid is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    walls: Vec<bool>,
}

impl Grid {
    /// Create a grid with border walls only
    pub fn new(rows: i32, cols: i32) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let lattice_rows = 2 * rows + 1;
        let lattice_cols = 2 * cols + 1;
        let mut walls = vec![false; (lattice_rows * lattice_cols) as usize];
        for lr in 0..lattice_rows {
            for lc in 0..lattice_cols {
                if lr == 0 || lr == lattice_rows - 1 || lc == 0 || lc == lattice_cols - 1 {
                    walls[(lr * lattice_cols + lc) as usize] = true;
                }
            }
        }
        Self { rows, cols, walls }
    }

    /// Build a grid from a validated configuration
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::new(config.rows, config.cols);
        for wall in &config.walls {
            grid.add_wall(wall.position, wall.direction);
        }
        debug!(
            rows = config.rows,
            cols = config.cols,
            walls = grid.wall_count(),
            "built grid from config"
        );
        Ok(grid)
    }

    /// Generate a grid with interior walls scattered at `wall_density`
    pub fn random(rows: i32, cols: i32, wall_density: f32, rng: &mut ChaCha8Rng) -> Self {
        let mut grid = Self::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let position = Position::new(row, col);
                for direction in [Direction::Right, Direction::Down] {
                    if grid.in_bounds(position.neighbor(direction))
                        && rng.gen::<f32>() < wall_density
                    {
                        grid.add_wall(position, direction);
                    }
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `position` names a cell inside the grid
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.rows).contains(&position.row) && (0..self.cols).contains(&position.col)
    }

    /// Whether a step from `position` along `direction` is blocked.
    ///
    /// True iff the target cell is outside the grid or a wall separates it
    /// from `position`.
    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        if !self.in_bounds(position) {
            return true;
        }
        self.walls[self.wall_slot(position, direction)]
    }

    /// Count of blocked interior wall slots
    pub fn wall_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row, col);
                for direction in [Direction::Right, Direction::Down] {
                    if self.in_bounds(position.neighbor(direction))
                        && self.has_wall(position, direction)
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    // Walls never change after construction, so placement stays private to
    // the constructors.
    fn add_wall(&mut self, position: Position, direction: Direction) {
        debug_assert!(self.in_bounds(position));
        let slot = self.wall_slot(position, direction);
        self.walls[slot] = true;
    }

    fn wall_slot(&self, position: Position, direction: Direction) -> usize {
        let (drow, dcol) = direction.to_delta();
        let lattice_row = 2 * position.row + 1 + drow;
        let lattice_col = 2 * position.col + 1 + dcol;
        (lattice_row * (2 * self.cols + 1) + lattice_col) as usize
    }
}
