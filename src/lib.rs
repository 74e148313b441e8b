#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod controller;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod reveal;
mod status;
mod submission;
mod subscriptions;

use controller::Presentation;

thread_local! {
    // The page's single attached controller; `detach` takes it back out.
    static PAGE: RefCell<Option<Presentation>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            if let Err(e) = attach_page() {
                log::error!("attach error: {:?}", e);
            }
        });
        document.add_event_listener_with_callback(
            core::registry::EventKind::DomContentLoaded.as_str(),
            on_ready.unchecked_ref(),
        )?;
    } else if let Err(e) = attach_page() {
        log::error!("attach error: {:?}", e);
    }
    Ok(())
}

/// Re-run setup (for instance after `detach`). Any controller already
/// attached is detached first.
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    attach_page().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Remove every listener, stop the trail loop and drop injected elements.
#[wasm_bindgen]
pub fn detach() {
    if let Some(p) = PAGE.with(|page| page.borrow_mut().take()) {
        p.detach();
    }
}

fn attach_page() -> anyhow::Result<()> {
    detach();
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = controller::config_from_page(&document);
    let presentation = Presentation::attach(&document, config)?;
    PAGE.with(|page| *page.borrow_mut() = Some(presentation));
    Ok(())
}
