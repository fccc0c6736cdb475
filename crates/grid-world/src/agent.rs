//! Agent state.

use grid_core::Position;

/// The single movable entity in a gridworld.
///
/// The agent starts at the origin and is moved only by the environment, so
/// its position is always a cell inside the grid.
#[derive(Debug, Clone)]
pub struct Agent {
    position: Position,
}

impl Agent {
    pub fn new() -> Self {
        Self {
            position: Position::new(0, 0),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_starts_at_origin() {
        let agent = Agent::new();
        assert_eq!(agent.position(), Position::new(0, 0));
    }

    #[test]
    fn test_move_to() {
        let mut agent = Agent::new();
        agent.move_to(Position::new(2, 1));
        assert_eq!(agent.position(), Position::new(2, 1));
    }
}
