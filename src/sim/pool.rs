//! Seed batch and scoring rules
//!
//! Seeds are deactivated either by a catch (scores) or by falling past the
//! bottom edge (does not score). The session ends once none are active.

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use super::state::{FallingItem, FloatingLabel, GameEvent, GameState};
use super::tween::{Easing, Tween};
use crate::rules::{ITEM_COUNT, SCORE_PER_CATCH};

impl GameState {
    /// Lay out a fresh batch of seeds along the top edge, at rest
    pub fn spawn_items(&mut self) {
        self.items.clear();
        for i in 0..ITEM_COUNT {
            let id = self.next_entity_id();
            let x = self.config.item_x(i);
            self.items.push(FallingItem::new(id, Vec2::new(x, 0.0)));
        }
    }

    /// Give every seed an independent fall speed drawn from the fixed range
    pub fn release_items(&mut self) {
        let mut rng = self.rng_state.to_rng();
        let range = self.config.fall_speed_range();
        for item in &mut self.items {
            item.vel_y = rng.random_range(range.clone());
        }
        self.rng_state.stream += 1;
    }

    /// Stop every seed where it is
    pub fn halt_items(&mut self) {
        for item in &mut self.items {
            item.vel_y = 0.0;
        }
    }

    /// Move active seeds down by their velocity
    pub fn integrate_items(&mut self, dt: f32) {
        for item in self.items.iter_mut().filter(|i| i.active) {
            item.pos.y += item.vel_y * dt;
        }
    }

    pub fn player_bounds(&self) -> Aabb {
        Aabb::from_center_size(self.player.pos, self.player.size)
    }

    pub fn item_bounds(&self, item: &FallingItem) -> Aabb {
        Aabb::from_center_size(item.pos, self.config.item_size)
    }

    /// Ids of active seeds touching the player, in ascending id order
    pub fn touching_items(&self) -> Vec<u32> {
        let player = self.player_bounds();
        self.items
            .iter()
            .filter(|i| i.active && player.overlaps(&self.item_bounds(i)))
            .map(|i| i.id)
            .collect()
    }

    /// Catch seed `item_id`: deactivate it, score, and float a label.
    ///
    /// Returns false (and changes nothing) if the seed is unknown or inactive.
    pub fn catch(&mut self, item_id: u32) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == item_id && i.active) else {
            return false;
        };
        item.active = false;
        item.vel_y = 0.0;
        let pos = item.pos;

        self.score += SCORE_PER_CATCH;

        let label_id = self.next_entity_id();
        let label_pos = self.player.pos - Vec2::new(0.0, self.config.label_offset_y);
        self.labels.push(FloatingLabel {
            id: label_id,
            pos: label_pos,
            text: format!("+{}", SCORE_PER_CATCH),
            fade: Tween::new(self.config.label_fade_secs, Easing::QuadOut),
        });

        log::debug!("Caught seed {} (score {})", item_id, self.score);
        self.events.push(GameEvent::Caught { item_id, pos });
        true
    }

    /// Catch everything currently touching the player; returns how many
    pub fn catch_touching(&mut self) -> usize {
        self.touching_items()
            .into_iter()
            .filter(|&id| self.catch(id))
            .count()
    }

    /// Deactivate seeds that fell past the bottom edge; returns how many
    pub fn sweep_offscreen(&mut self) -> usize {
        let bottom = self.config.field_height;
        let mut missed = 0;
        for item in self.items.iter_mut().filter(|i| i.active && i.pos.y > bottom) {
            item.active = false;
            log::debug!("Missed seed {}", item.id);
            self.events.push(GameEvent::Missed { item_id: item.id });
            missed += 1;
        }
        missed
    }

    /// True iff no seed is still in play
    pub fn all_inactive(&self) -> bool {
        self.items.iter().all(|i| !i.active)
    }

    /// Advance label fades and drop finished labels
    pub fn update_labels(&mut self, dt: f32) {
        for label in &mut self.labels {
            label.fade.advance(dt);
        }
        self.labels.retain(|l| !l.fade.is_finished());
    }
}
