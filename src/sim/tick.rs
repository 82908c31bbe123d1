//! Fixed timestep simulation tick
//!
//! Each tick runs in a fixed order: input, seed movement, catches, off-screen
//! sweep, phase transition, then presentation timers.

use glam::Vec2;

use super::collision::Aabb;
use super::state::{GameEvent, GamePhase, GameState, ScoreReveal};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in field coordinates
    pub pointer: Option<Vec2>,
    /// Pointer (mouse button / touch) held down
    pub pointer_down: bool,
    /// Pointer went down this frame at this position (one-shot)
    pub pressed_at: Option<Vec2>,
    /// Keyboard activation of the start control (one-shot)
    pub start: bool,
    /// Let the simulation steer the player
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::NotStarted => {
            let clicked = input
                .pressed_at
                .is_some_and(|p| start_button_bounds(state).contains(p));
            if input.start || clicked {
                start_game(state);
            }
        }
        GamePhase::Playing => {
            if input.pointer_down {
                if let Some(pointer) = input.pointer {
                    let width = state.config.field_width;
                    state.player.steer_to(pointer.x, width);
                }
            }

            state.integrate_items(dt);
            state.catch_touching();
            state.sweep_offscreen();

            if state.all_inactive() {
                end_game(state);
            }
        }
        GamePhase::Over => {}
    }

    state.update_labels(dt);
    if let Some(reveal) = &mut state.reveal {
        reveal.tween.advance(dt);
    }
}

/// Start control hit area
pub fn start_button_bounds(state: &GameState) -> Aabb {
    Aabb::from_center_size(
        state.config.start_button_center,
        state.config.start_button_size,
    )
}

/// NotStarted -> Playing. Ignored once the start control is gone.
pub fn start_game(state: &mut GameState) {
    if state.phase != GamePhase::NotStarted || !state.start_control_visible {
        return;
    }
    state.start_control_visible = false;
    state.release_items();
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::Started);
    log::info!("Game started with {} seeds", state.items.len());
}

/// Playing -> Over: freeze seeds and begin the score count-up
fn end_game(state: &mut GameState) {
    debug_assert!(state.all_inactive());
    state.phase = GamePhase::Over;
    state.halt_items();
    state.reveal = Some(ScoreReveal::new(state.score, state.config.reveal_secs));
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!("Game over - final score {}", state.score);
}

/// Press start, then park the player under whichever seed lands first
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::NotStarted => input.start = true,
        GamePhase::Playing => {
            let player = state.player_bounds();
            let catch_line = player.min().y - state.config.item_size.y / 2.0;
            let next = state
                .items
                .iter()
                .filter(|i| i.active && i.vel_y > 0.0 && i.pos.y < player.max().y)
                .min_by(|a, b| {
                    let ta = (catch_line - a.pos.y) / a.vel_y;
                    let tb = (catch_line - b.pos.y) / b.vel_y;
                    ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(item) = next {
                input.pointer = Some(Vec2::new(item.pos.x, state.player.pos.y));
                input.pointer_down = true;
            }
        }
        GamePhase::Over => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    /// Run until the session ends or `max_ticks` elapse
    fn run_until_over(state: &mut GameState, input: &TickInput, max_ticks: u32) {
        for _ in 0..max_ticks {
            let was_playing = state.phase == GamePhase::Playing;
            tick(state, input, SIM_DT);
            if was_playing && state.phase == GamePhase::Over {
                return;
            }
        }
    }

    fn start(state: &mut GameState) {
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(state, &input, SIM_DT);
    }

    #[test]
    fn test_tick_not_started_is_idle() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            pointer: Some(Vec2::new(10.0, 700.0)),
            pointer_down: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.player.pos.x, 240.0);
        assert!(state.items.iter().all(|i| i.pos.y == 0.0 && i.active));
    }

    #[test]
    fn test_click_on_start_button() {
        let mut state = GameState::new(12345);

        // Miss the button
        let input = TickInput {
            pressed_at: Some(Vec2::new(20.0, 20.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::NotStarted);

        let input = TickInput {
            pressed_at: Some(Vec2::new(250.0, 410.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.start_control_visible);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
        assert!(state.items.iter().all(|i| (50.0..100.0).contains(&i.vel_y)));
    }

    #[test]
    fn test_second_start_has_no_effect() {
        let mut state = GameState::new(12345);
        start(&mut state);
        let speeds: Vec<f32> = state.items.iter().map(|i| i.vel_y).collect();
        state.drain_events();

        start(&mut state);
        start_game(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.drain_events().is_empty());
        let again: Vec<f32> = state.items.iter().map(|i| i.vel_y).collect();
        assert_eq!(speeds, again);
    }

    #[test]
    fn test_player_follows_pointer_only_while_down() {
        let mut state = GameState::new(12345);
        start(&mut state);

        let hover = TickInput {
            pointer: Some(Vec2::new(100.0, 300.0)),
            pointer_down: false,
            ..Default::default()
        };
        tick(&mut state, &hover, SIM_DT);
        assert_eq!(state.player.pos.x, 240.0);

        let drag = TickInput {
            pointer_down: true,
            ..hover
        };
        tick(&mut state, &drag, SIM_DT);
        assert_eq!(state.player.pos.x, 100.0);
        assert_eq!(state.player.pos.y, 750.0);
    }

    #[test]
    fn test_catch_all_twelve() {
        let mut state = GameState::new(777);
        start(&mut state);

        // Line every seed up over the player
        for item in &mut state.items {
            item.pos.x = 240.0;
        }
        let input = TickInput {
            pointer: Some(Vec2::new(240.0, 750.0)),
            pointer_down: true,
            ..Default::default()
        };
        run_until_over(&mut state, &input, 3000);

        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 120);
        assert!(state.all_inactive());
        assert!(!state.start_control_visible);
        assert!(state.items.iter().all(|i| i.vel_y == 0.0));

        let events = state.drain_events();
        let caught = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Caught { .. }))
            .count();
        assert_eq!(caught, 12);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 120 }));

        // Score readout counts up from 0 to 120 over two seconds
        let reveal = state.reveal.clone().unwrap();
        assert!(reveal.displayed() < 120);
        let mut last = reveal.displayed();
        for _ in 0..(2.0 / SIM_DT).ceil() as u32 + 1 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            let shown = state.reveal.as_ref().unwrap().displayed();
            assert!(shown >= last);
            last = shown;
        }
        assert_eq!(last, 120);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_all_missed() {
        let mut state = GameState::new(31337);
        start(&mut state);

        // Keep every seed out of the player's reach
        for item in &mut state.items {
            item.pos.x = 12.0;
        }
        run_until_over(&mut state, &TickInput::default(), 3000);

        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 0);
        assert!(state.labels.is_empty());
        let events = state.drain_events();
        let missed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Missed { .. }))
            .count();
        assert_eq!(missed, 12);
        assert_eq!(state.reveal.as_ref().map(|r| r.target), Some(0));
    }

    #[test]
    fn test_over_is_terminal() {
        let mut state = GameState::new(5);
        start(&mut state);
        for item in &mut state.items {
            item.pos.y = 900.0;
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Over);

        let input = TickInput {
            start: true,
            pointer: Some(Vec2::new(50.0, 0.0)),
            pointer_down: true,
            pressed_at: Some(Vec2::new(240.0, 400.0)),
            ..Default::default()
        };
        let x = state.player.pos.x;
        for _ in 0..10 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.player.pos.x, x);
    }

    #[test]
    fn test_labels_keep_fading_after_game_over() {
        let mut state = GameState::new(5);
        start(&mut state);
        let first = state.items[0].id;
        state.catch(first);
        for item in &mut state.items {
            item.pos.y = 900.0;
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.labels.len(), 1);

        for _ in 0..(1.0 / SIM_DT).ceil() as u32 + 1 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.labels.is_empty());
    }

    #[test]
    fn test_autopilot_finishes_session() {
        let mut state = GameState::new(2024);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);

        run_until_over(&mut state, &input, 3000);
        assert_eq!(state.phase, GamePhase::Over);
        assert!(state.score > 0);
        assert!(state.score <= 120);
        assert_eq!(state.score % 10, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                pointer: Some(Vec2::new(120.0, 0.0)),
                pointer_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(600) {
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        for (a, b) in state1.items.iter().zip(&state2.items) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel_y, b.vel_y);
            assert_eq!(a.active, b.active);
        }
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_field(xs in proptest::collection::vec(-2000.0f32..2000.0, 1..50)) {
            let mut state = GameState::new(1);
            start(&mut state);
            let (min_x, max_x) = state.config.player_x_bounds();
            for x in xs {
                let input = TickInput {
                    pointer: Some(Vec2::new(x, 0.0)),
                    pointer_down: true,
                    ..Default::default()
                };
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.player.pos.x >= min_x && state.player.pos.x <= max_x);
            }
        }

        #[test]
        fn prop_score_tracks_catches(xs in proptest::collection::vec(0.0f32..480.0, 1..400)) {
            let mut state = GameState::new(9);
            start(&mut state);
            for x in xs {
                let before = state.score;
                let active_before = state.active_item_count();
                let input = TickInput {
                    pointer: Some(Vec2::new(x, 0.0)),
                    pointer_down: true,
                    ..Default::default()
                };
                tick(&mut state, &input, 0.25);
                let caught = state
                    .drain_events()
                    .iter()
                    .filter(|e| matches!(e, GameEvent::Caught { .. }))
                    .count() as u32;
                prop_assert_eq!(state.score, before + 10 * caught);
                prop_assert!(state.active_item_count() <= active_before);
                if state.phase == GamePhase::Over {
                    prop_assert!(state.all_inactive());
                    prop_assert_eq!(state.active_item_count(), 0);
                    break;
                }
            }
        }

        #[test]
        fn prop_any_valid_layout_ends(seed in any::<u64>(), height in 50.0f32..4000.0) {
            let config = crate::GameConfig {
                field_height: height,
                ..Default::default()
            };
            let mut state = GameState::with_config(seed, config).unwrap();
            start(&mut state);
            for item in &mut state.items {
                item.pos.x = 12.0;
            }
            let max_ticks = (state.config.max_fall_secs() / SIM_DT).ceil() as u32 + 1;
            run_until_over(&mut state, &TickInput::default(), max_ticks);
            prop_assert_eq!(state.phase, GamePhase::Over);
        }
    }
}
