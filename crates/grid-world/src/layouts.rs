//! Ready-made wall layouts.

use grid_core::{Direction, Position, WallSpec, WorldConfig};

/// Fixed 3x4 layout with four interior walls:
///
/// ```text
///  _______
/// |  _|   |
/// | |     |
/// |___|___|
/// ```
pub fn walled_3x4() -> WorldConfig {
    WorldConfig {
        rows: 3,
        cols: 4,
        walls: vec![
            WallSpec::new(Position::new(0, 1), Direction::Right),
            WallSpec::new(Position::new(0, 1), Direction::Down),
            WallSpec::new(Position::new(1, 0), Direction::Right),
            WallSpec::new(Position::new(2, 1), Direction::Right),
        ],
    }
}
