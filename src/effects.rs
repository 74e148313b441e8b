use crate::constants::{HERO, TAGLINE, TRAIL_CLASS, TRAIL_MARKER_CSS, TYPING_CARET};
use crate::core::epoch::Ticket;
use crate::core::particles::particle_field;
use crate::core::ripple::{lifetime_ms, ClientRect, RippleGeometry};
use crate::core::stylesheet::{PARTICLE_CLASS, RIPPLE_CLASS, STYLESHEET, STYLESHEET_MARKER};
use crate::core::typing::Typewriter;
use crate::dom;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Append the shared keyframes stylesheet to `<head>`, reusing one that is
/// already present.
pub fn inject_stylesheet(document: &web::Document) -> anyhow::Result<web::Element> {
    let marker_selector = format!("style[{}]", STYLESHEET_MARKER);
    if let Ok(Some(existing)) = document.query_selector(&marker_selector) {
        return Ok(existing);
    }
    let style = document.create_element("style").map_err(js_err)?;
    style.set_attribute(STYLESHEET_MARKER, "").map_err(js_err)?;
    style.set_text_content(Some(STYLESHEET));
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    head.append_child(&style).map_err(js_err)?;
    Ok(style)
}

/// Scatter decorative particles over the hero. No-op without a hero.
pub fn spawn_particles(document: &web::Document, count: usize) -> Vec<web::Element> {
    let Some(hero) = dom::query_one(document, HERO) else {
        log::debug!("[particles] no {} on page", HERO);
        return Vec::new();
    };
    let mut rng = StdRng::from_entropy();
    particle_field(&mut rng, count)
        .into_iter()
        .filter_map(|spec| {
            let el = document.create_element("div").ok()?;
            el.set_class_name(PARTICLE_CLASS);
            _ = el.set_attribute("style", &spec.css());
            hero.append_child(&el).ok()?;
            Some(el)
        })
        .collect()
}

/// Create the hidden cursor trail marker under `<body>`.
pub fn create_trail_marker(document: &web::Document) -> Option<web::HtmlElement> {
    let body = document.body()?;
    let marker = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    marker.set_class_name(TRAIL_CLASS);
    _ = marker.set_attribute("style", TRAIL_MARKER_CSS);
    body.append_child(&marker).ok()?;
    Some(marker)
}

/// Spawn a ripple centered on the click point; it removes itself once its
/// animation has run.
pub fn spawn_ripple(document: &web::Document, card: &web::HtmlElement, ev: &web::MouseEvent) {
    let rect = card.get_bounding_client_rect();
    let geometry = RippleGeometry::centered(
        ClientRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        },
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
    );
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    _ = ripple.set_attribute("style", &geometry.css());
    _ = ripple.class_list().add_1(RIPPLE_CLASS);
    if card.append_child(&ripple).is_err() {
        return;
    }
    dom::after(lifetime_ms(), move || ripple.remove());
}

/// The tagline while its typing effect runs; [`TypedTagline::restore`] puts
/// the full text back.
pub struct TypedTagline {
    tagline: web::HtmlElement,
    text: String,
}

impl TypedTagline {
    pub fn restore(&self) {
        self.tagline.set_text_content(Some(&self.text));
        _ = self.tagline.style().set_property("border-right", "none");
    }
}

/// Retype the hero tagline one character at a time behind a caret. Typing
/// stops as soon as `ticket` goes stale.
pub fn start_typing(document: &web::Document, ticket: Ticket) -> Option<TypedTagline> {
    let Some(tagline) = dom::query_one(document, TAGLINE) else {
        log::debug!("[typing] no {} on page", TAGLINE);
        return None;
    };
    let text = tagline.text_content().unwrap_or_default();
    let writer = Typewriter::new(&text).bound_to(ticket);
    if writer.is_empty() {
        return None;
    }
    log::debug!(
        "[typing] {} chars over {} ms",
        text.chars().count(),
        writer.total_duration_ms()
    );
    tagline.set_text_content(Some(""));
    _ = tagline.style().set_property("border-right", TYPING_CARET);
    let start = writer.start_delay_ms;
    let writer = Rc::new(RefCell::new(writer));
    let el = tagline.clone();
    dom::after(start, move || type_next(el, writer));
    Some(TypedTagline { tagline, text })
}

fn type_next(tagline: web::HtmlElement, writer: Rc<RefCell<Typewriter>>) {
    let next = writer.borrow_mut().advance();
    match next {
        Some(prefix) => {
            tagline.set_text_content(Some(&prefix));
            let interval = writer.borrow().interval_ms;
            dom::after(interval, move || type_next(tagline, writer));
        }
        // A cancelled run leaves the element to whoever restored it.
        None if writer.borrow().is_cancelled() => {}
        None => {
            _ = tagline.style().set_property("border-right", "none");
        }
    }
}
