//! Congratulatory Tenor embed shown on game over

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlScriptElement};

const EMBED_HTML: &str = r#"<div class="tenor-gif-embed" data-postid="14678282" data-share-method="host" data-aspect-ratio="1" data-width="100%"><a href="https://tenor.com/view/congratulations-congrats-tonton-friends-tonton-tontongif-gif-14678282">Congratulations Congrats Sticker</a>from <a href="https://tenor.com/search/congratulations-stickers">Congratulations Stickers</a></div>"#;
const EMBED_SCRIPT: &str = "https://tenor.com/embed.js";
const CONTAINER_ID: &str = "celebration";

/// Insert the embed and its loader script. Does nothing if already shown.
pub fn show_celebration() {
    if let Err(e) = try_show() {
        log::warn!("Celebration embed failed: {:?}", e);
    }
}

fn try_show() -> Result<(), JsValue> {
    let document = super::document().ok_or("no document")?;
    if document.get_element_by_id(CONTAINER_ID).is_some() {
        return Ok(());
    }
    let body = document.body().ok_or("no body")?;

    let container: HtmlElement = document.create_element("div")?.dyn_into()?;
    container.set_id(CONTAINER_ID);
    container.set_inner_html(EMBED_HTML);
    let style = container.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "50%")?;
    style.set_property("left", "50%")?;
    style.set_property("transform", "translate(-50%, -50%)")?;
    style.set_property("width", "480px")?;
    style.set_property("height", "480px")?;
    body.append_child(&container)?;

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_type("text/javascript");
    script.set_async(true);
    script.set_src(EMBED_SCRIPT);
    body.append_child(&script)?;

    log::info!("Celebration shown");
    Ok(())
}
