//! Configuration types for gridworld construction.

use crate::error::{Error, Result};
use crate::types::{Direction, Position};
use serde::{Deserialize, Serialize};

/// One blocked side of a cell.
///
/// A wall is an undirected edge between two adjacent cells: blocking
/// `(position, Right)` equally blocks the reverse move from the right-hand
/// neighbor. A wall on a border side is allowed and redundant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSpec {
    /// Cell the wall touches
    pub position: Position,
    /// Side of the cell that is blocked
    pub direction: Direction,
}

impl WallSpec {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// World construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Number of rows in the grid
    pub rows: i32,
    /// Number of columns in the grid
    pub cols: i32,
    /// Interior walls between adjacent cells
    #[serde(default)]
    pub walls: Vec<WallSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            walls: Vec::new(),
        }
    }
}

impl WorldConfig {
    /// Check dimensions and wall placements before a grid is built from this
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(Error::InvalidLayout(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        for wall in &self.walls {
            let p = wall.position;
            if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
                return Err(Error::InvalidLayout(format!(
                    "wall at {} lies outside the {}x{} grid",
                    p, self.rows, self.cols
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
