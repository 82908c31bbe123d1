//! Browser platform layer
//!
//! DOM side of the presentation: the HTML HUD, floating score labels and the
//! game-over celebration embed. Everything here is best-effort; a missing
//! element is logged and skipped.

pub mod celebration;
pub mod hud;

pub use celebration::show_celebration;
pub use hud::{Hud, LabelLayer};

/// Current document, if running in a page
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}
