//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pool;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::Aabb;
pub use state::{
    FallingItem, FloatingLabel, GameEvent, GamePhase, GameState, Player, ScoreReveal,
};
pub use tick::{TickInput, start_button_bounds, start_game, tick};
pub use tween::{Easing, Tween};
