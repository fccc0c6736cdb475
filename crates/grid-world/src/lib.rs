//! Gridworld environment.
//!
//! This module implements a bounded 2D grid with walls between adjacent cells
//! and a single agent driven through a discrete step interface.

pub mod agent;
pub mod grid;
pub mod layouts;
pub mod world;

pub use agent::Agent;
pub use grid::Grid;
pub use world::{GridWorld, Step};
