//! Core type definitions for gridworld environments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D cell coordinate, row-major with (0, 0) at the top-left
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn add(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Adjacent cell one step along `direction`
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (drow, dcol) = direction.to_delta();
        self.add(drow, dcol)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction for agent movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Fixed action-to-direction table. Action code `a` resolves to `ACTION_MAP[a]`.
pub const ACTION_MAP: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// (row, col) offset of one step in this direction. Up is toward row 0.
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn all() -> [Direction; 4] {
        ACTION_MAP
    }

    /// Resolve a discrete action code, `None` outside the action set
    pub fn from_action(action: usize) -> Option<Direction> {
        ACTION_MAP.get(action).copied()
    }

    /// Action code of this direction, inverse of [`Direction::from_action`]
    pub fn to_action(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}
