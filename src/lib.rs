//! Seed Catch - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seed pool, catches, game phases)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Field geometry and timings
//! - `platform`: Browser-only DOM helpers (HUD, labels, celebration)

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Fixed game rules; these are not part of [`GameConfig`]
pub mod rules {
    /// Seeds in the batch
    pub const ITEM_COUNT: u32 = 12;
    /// Fall speed is drawn from `MIN_FALL_SPEED..MAX_FALL_SPEED` (field px/s)
    pub const MIN_FALL_SPEED: f32 = 50.0;
    pub const MAX_FALL_SPEED: f32 = 100.0;
    pub const SCORE_PER_CATCH: u32 = 10;
}
