//! Game configuration
//!
//! Field geometry, sprite boxes and timings. Defaults reproduce the classic
//! 480x800 board; a JSON file may override any subset of fields. Seed count,
//! fall speeds and scoring are fixed in [`crate::rules`].

use std::ops::Range;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::{ITEM_COUNT, MAX_FALL_SPEED, MIN_FALL_SPEED};

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file")]
    Io(#[from] std::io::Error),
    #[error("malformed config JSON")]
    Parse(#[from] serde_json::Error),
    #[error("play field must have a positive size, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },
    #[error("{count} seeds of width {item_width} do not fit a field {field_width} wide")]
    ItemsDoNotFit {
        count: u32,
        item_width: f32,
        field_width: f32,
    },
    #[error("player of width {player_width} does not fit a field {field_width} wide")]
    PlayerTooWide { player_width: f32, field_width: f32 },
    #[error("{name} must be a finite, non-negative number of seconds")]
    BadDuration { name: &'static str },
}

/// Layout and timing knobs for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,

    /// Horizontal centre of the leftmost seed
    pub item_margin_x: f32,
    /// Seed body size (width, height)
    pub item_size: Vec2,

    /// Player centre at session start
    pub player_start: Vec2,
    /// Player body size (width, height)
    pub player_size: Vec2,

    /// Start control centre and size
    pub start_button_center: Vec2,
    pub start_button_size: Vec2,

    /// "+10" label spawns this far above the player centre
    pub label_offset_y: f32,
    /// Seconds for a label to fade out
    pub label_fade_secs: f32,
    /// Seconds for the game-over score count-up
    pub reveal_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 480.0,
            field_height: 800.0,

            item_margin_x: 12.0,
            item_size: Vec2::new(24.0, 24.0),

            player_start: Vec2::new(240.0, 750.0),
            player_size: Vec2::new(72.0, 60.0),

            start_button_center: Vec2::new(240.0, 400.0),
            start_button_size: Vec2::new(200.0, 80.0),

            label_offset_y: 30.0,
            label_fade_secs: 1.0,
            reveal_secs: 2.0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document; missing keys fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject layouts the simulation cannot play.
    ///
    /// Comparisons are written negated so NaN fields fail them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0)
            || !self.field_width.is_finite()
            || !self.field_height.is_finite()
        {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.item_size.x > 0.0 && self.item_size.y > 0.0)
            || !(self.item_size.x <= self.field_width)
            || !(self.item_margin_x >= self.item_size.x / 2.0)
            || !(self.item_margin_x * 2.0 <= self.field_width)
        {
            return Err(ConfigError::ItemsDoNotFit {
                count: ITEM_COUNT,
                item_width: self.item_size.x,
                field_width: self.field_width,
            });
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0)
            || !(self.player_size.x <= self.field_width)
        {
            return Err(ConfigError::PlayerTooWide {
                player_width: self.player_size.x,
                field_width: self.field_width,
            });
        }
        for (name, secs) in [
            ("label_fade_secs", self.label_fade_secs),
            ("reveal_secs", self.reveal_secs),
        ] {
            if !(secs >= 0.0) || !secs.is_finite() {
                return Err(ConfigError::BadDuration { name });
            }
        }
        Ok(())
    }

    pub fn fall_speed_range(&self) -> Range<f32> {
        MIN_FALL_SPEED..MAX_FALL_SPEED
    }

    /// Upper bound on how long the slowest seed takes to leave the field
    pub fn max_fall_secs(&self) -> f32 {
        (self.field_height + self.item_size.y) / MIN_FALL_SPEED
    }

    /// Horizontal centre of seed `index`, spread evenly between the margins
    pub fn item_x(&self, index: u32) -> f32 {
        let span = self.field_width - 2.0 * self.item_margin_x;
        self.item_margin_x + span * index as f32 / (ITEM_COUNT - 1) as f32
    }

    /// Allowed range for the player's centre x
    pub fn player_x_bounds(&self) -> (f32, f32) {
        let half = self.player_size.x / 2.0;
        (half, self.field_width - half)
    }
}
