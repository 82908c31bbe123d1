//! HTML HUD overlay
//!
//! Score readout, FPS counter, game-over count-up and the floating "+10"
//! labels, all positioned over the canvas.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::renderer::Viewport;
use crate::sim::{GamePhase, GameState};

/// Cached HUD element handles
pub struct Hud {
    score: Option<HtmlElement>,
    fps: Option<HtmlElement>,
    game_over: Option<HtmlElement>,
    final_score: Option<HtmlElement>,
    last_score: Option<u32>,
    last_final: Option<u32>,
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("HUD element #{} missing", id);
    }
    el?.dyn_into().ok()
}

impl Hud {
    pub fn new(document: &Document) -> Self {
        Self {
            score: html_element(document, "hud-score"),
            fps: html_element(document, "hud-fps"),
            game_over: html_element(document, "game-over"),
            final_score: html_element(document, "final-score"),
            last_score: None,
            last_final: None,
        }
    }

    pub fn update(&mut self, state: &GameState, fps: u32) {
        if self.last_score != Some(state.score) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&format!("Score: {}", state.score)));
            }
            self.last_score = Some(state.score);
        }

        if let Some(el) = &self.fps {
            el.set_text_content(Some(&format!("{} fps", fps)));
        }

        if let Some(el) = &self.game_over {
            let class = if state.phase == GamePhase::Over { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }

        if let Some(reveal) = &state.reveal {
            let shown = reveal.displayed();
            if self.last_final != Some(shown) {
                if let Some(el) = &self.final_score {
                    el.set_text_content(Some(&format!("Score: {}", shown)));
                }
                self.last_final = Some(shown);
            }
        }
    }
}

/// DOM mirror of the simulation's floating labels
pub struct LabelLayer {
    document: Document,
    container: Option<HtmlElement>,
    /// Label ids with a live element, ascending
    live: Vec<u32>,
}

impl LabelLayer {
    pub fn new(document: Document) -> Self {
        Self {
            container: html_element(&document, "labels"),
            document,
            live: Vec::new(),
        }
    }

    /// Create, move and fade label elements; remove those the sim dropped
    pub fn sync(&mut self, state: &GameState, viewport: &Viewport) {
        let Some(container) = &self.container else {
            return;
        };
        let document = &self.document;

        let wanted: Vec<u32> = state.labels.iter().map(|l| l.id).collect();
        for id in self.live.iter().filter(|id| !wanted.contains(id)) {
            if let Some(el) = document.get_element_by_id(&label_dom_id(*id)) {
                el.remove();
            }
        }

        for label in &state.labels {
            let el = match document.get_element_by_id(&label_dom_id(label.id)) {
                Some(el) => el.dyn_into::<HtmlElement>().ok(),
                None => match create_label(document, container, label.id, &label.text) {
                    Ok(el) => Some(el),
                    Err(e) => {
                        log::warn!("Could not create label: {:?}", e);
                        None
                    }
                },
            };
            if let Some(el) = el {
                let at: Vec2 = viewport.field_to_canvas(label.pos);
                let style = el.style();
                let _ = style.set_property("left", &format!("{:.1}px", at.x));
                let _ = style.set_property("top", &format!("{:.1}px", at.y));
                let _ = style.set_property("opacity", &format!("{:.3}", label.alpha()));
            }
        }

        self.live = wanted;
    }
}

fn label_dom_id(id: u32) -> String {
    format!("label-{}", id)
}

fn create_label(
    document: &Document,
    container: &HtmlElement,
    id: u32,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_id(&label_dom_id(id));
    el.set_class_name("float-label");
    el.set_text_content(Some(text));
    container.append_child(&el)?;
    Ok(el)
}
