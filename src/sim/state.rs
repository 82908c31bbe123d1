//! Game state and core simulation types
//!
//! Everything one play session mutates lives in [`GameState`], owned by the
//! frame loop and handed to [`super::tick`] by reference.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tween::{Easing, Tween};
use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start control visible, seeds waiting at the top
    NotStarted,
    /// Seeds falling, player steering
    Playing,
    /// Every seed caught or missed (terminal)
    Over,
}

/// A seed falling through the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    /// Centre position
    pub pos: Vec2,
    /// Downward speed (px/s)
    pub vel_y: f32,
    pub active: bool,
}

impl FallingItem {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel_y: 0.0,
            active: true,
        }
    }
}

/// The player-controlled bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre position
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Follow the pointer horizontally, keeping the whole body inside the field
    pub fn steer_to(&mut self, pointer_x: f32, field_width: f32) {
        let half = self.half_width();
        // NaN input leaves the player where it is
        if pointer_x.is_nan() {
            return;
        }
        // A player wider than the field pins to the left bound
        self.pos.x = pointer_x.min(field_width - half).max(half);
    }
}

/// Transient "+10" text that fades out above the catch point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingLabel {
    pub id: u32,
    pub pos: Vec2,
    pub text: String,
    pub fade: Tween,
}

impl FloatingLabel {
    pub fn alpha(&self) -> f32 {
        1.0 - self.fade.value()
    }
}

/// Game-over score count-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReveal {
    pub target: u32,
    pub tween: Tween,
}

impl ScoreReveal {
    pub fn new(target: u32, duration: f32) -> Self {
        Self {
            target,
            tween: Tween::new(duration, Easing::CubicOut),
        }
    }

    /// Score to display this frame
    pub fn displayed(&self) -> u32 {
        if self.tween.is_finished() {
            return self.target;
        }
        (self.target as f32 * self.tween.value()).floor() as u32
    }
}

/// Side effects for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Caught { item_id: u32, pos: Vec2 },
    Missed { item_id: u32 },
    GameOver { score: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub start_control_visible: bool,
    pub player: Player,
    /// Seed batch (sorted by id)
    pub items: Vec<FallingItem>,
    pub labels: Vec<FloatingLabel>,
    /// Present once the session is over
    pub reveal: Option<ScoreReveal>,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::from_valid_config(seed, GameConfig::default())
    }

    /// Create a new session, rejecting layouts the simulation cannot play
    pub fn with_config(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(seed, config))
    }

    fn from_valid_config(seed: u64, config: GameConfig) -> Self {
        let player = Player::new(config.player_start, config.player_size);
        let mut state = Self {
            config,
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            start_control_visible: true,
            player,
            items: Vec::new(),
            labels: Vec::new(),
            reveal: None,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_items();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hand pending events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn active_item_count(&self) -> usize {
        self.items.iter().filter(|i| i.active).count()
    }

}
