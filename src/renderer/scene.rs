//! Builds the per-frame vertex list from the game state

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Player, start_button_bounds};

/// Border stroke width in field units
const BORDER_WIDTH: f32 = 4.0;
/// Height of the grass strip along the bottom edge
const GROUND_HEIGHT: f32 = 24.0;
/// Vertices in the busiest frame (start screen, full batch) fit in this
pub const VERTEX_BUDGET: usize = 2048;

/// Everything visible this frame, back to front
pub fn build(state: &GameState) -> Vec<Vertex> {
    let field = Vec2::new(state.config.field_width, state.config.field_height);
    let mut vertices = Vec::with_capacity(VERTEX_BUDGET);

    vertices.extend(shapes::rect(Vec2::ZERO, field, colors::BACKGROUND));
    vertices.extend(shapes::rect(
        Vec2::new(0.0, field.y - GROUND_HEIGHT),
        field,
        colors::GROUND,
    ));

    let seed_radii = state.config.item_size / 2.0;
    for item in state.items.iter().filter(|i| i.active) {
        vertices.extend(shapes::ellipse(item.pos, seed_radii, colors::SEED, 12));
        vertices.extend(shapes::ellipse(
            item.pos - seed_radii * Vec2::new(0.25, 0.3),
            seed_radii * 0.35,
            colors::SEED_HIGHLIGHT,
            8,
        ));
    }

    vertices.extend(bird(&state.player));

    if state.start_control_visible {
        let bounds = start_button_bounds(state);
        vertices.extend(shapes::rect(bounds.min(), bounds.max(), colors::START_BUTTON));
        vertices.extend(shapes::rect_outline(
            bounds.min(),
            bounds.max(),
            4.0,
            colors::START_BUTTON_EDGE,
        ));
        // Play glyph
        let c = bounds.center;
        let r = bounds.half.y * 0.5;
        vertices.extend(shapes::triangle(
            c + Vec2::new(-r * 0.8, -r),
            c + Vec2::new(-r * 0.8, r),
            c + Vec2::new(r, 0.0),
            colors::START_GLYPH,
        ));
    }

    vertices.extend(shapes::rect_outline(
        Vec2::ZERO,
        field,
        BORDER_WIDTH,
        colors::BORDER,
    ));

    vertices
}

/// Bird sprite fitted to the player's body box
fn bird(player: &Player) -> Vec<Vertex> {
    let c = player.pos;
    let half = player.size / 2.0;
    let mut vertices = Vec::with_capacity(128);

    vertices.extend(shapes::ellipse(c, half * 0.9, colors::BIRD_BODY, 20));
    vertices.extend(shapes::ellipse(
        c + Vec2::new(-half.x * 0.25, half.y * 0.1),
        half * Vec2::new(0.45, 0.35),
        colors::BIRD_WING,
        12,
    ));
    vertices.extend(shapes::triangle(
        c + Vec2::new(half.x * 0.75, -half.y * 0.2),
        c + Vec2::new(half.x * 0.75, half.y * 0.15),
        c + Vec2::new(half.x, -half.y * 0.02),
        colors::BIRD_BEAK,
    ));
    vertices.extend(shapes::circle(
        c + Vec2::new(half.x * 0.45, -half.y * 0.35),
        half.y * 0.12,
        colors::BIRD_EYE,
        8,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_start_button_disappears() {
        let mut state = GameState::new(3);
        let before = build(&state).len();
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, crate::consts::SIM_DT);
        let after = build(&state).len();
        assert!(after < before);
    }

    #[test]
    fn test_caught_seeds_not_drawn() {
        let mut state = GameState::new(3);
        let before = build(&state).len();
        let id = state.items[0].id;
        state.catch(id);
        assert!(build(&state).len() < before);
    }

    #[test]
    fn test_busiest_frame_within_budget() {
        let state = GameState::new(3);
        assert!(state.start_control_visible);
        assert!(state.items.iter().all(|i| i.active));
        assert!(build(&state).len() <= VERTEX_BUDGET);
    }

    #[test]
    fn test_vertices_inside_border() {
        let state = GameState::new(3);
        // Resting seeds straddle the top edge
        let margin = state.config.item_size.y / 2.0 + BORDER_WIDTH;
        for v in build(&state) {
            assert!(v.position[0] >= -margin && v.position[0] <= 480.0 + margin);
            assert!(v.position[1] >= -margin && v.position[1] <= 800.0 + margin);
        }
    }
}
