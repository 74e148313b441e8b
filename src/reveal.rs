use crate::core::constants::{REVEAL_ROOT_MARGIN, REVEAL_SUPPRESSED_OFFSET_PX, REVEAL_THRESHOLD};
use crate::core::reveal::{RevealStagger, RevealTracker, Sighting};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// How a reveal is written to the element once due.
#[derive(Clone, Copy, Debug)]
pub enum RevealStyle {
    /// Inline `opacity: 1; transform: translateY(0)`.
    Inline,
    /// Add a class whose rule overrides the suppressed inline style.
    Class(&'static str),
}

/// One IntersectionObserver over a fixed target set.
pub struct RevealObserver {
    name: &'static str,
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealObserver {
    /// Suppress every target, then start observing them.
    pub fn observe(
        name: &'static str,
        targets: Vec<web::HtmlElement>,
        stagger: RevealStagger,
        style: RevealStyle,
        transition: Option<&str>,
    ) -> anyhow::Result<Self> {
        let suppressed = format!("translateY({}px)", REVEAL_SUPPRESSED_OFFSET_PX);
        for el in &targets {
            let mut props = vec![("opacity", "0"), ("transform", suppressed.as_str())];
            if let Some(t) = transition {
                props.push(("transition", t));
            }
            dom::set_styles(el, &props);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len(), stagger)));
        let targets = Rc::new(targets);
        let targets_cb = targets.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let entries: Vec<web::IntersectionObserverEntry> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .collect();
                let batch: Vec<Sighting> = entries
                    .iter()
                    .filter_map(|entry| {
                        let target = entry.target();
                        let index = targets_cb.iter().position(|t| {
                            let el: &web::Element = t;
                            *el == target
                        })?;
                        Some(Sighting {
                            target: index,
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();
                let actions = tracker.borrow_mut().observe(&batch);
                if actions.is_empty() {
                    return;
                }
                for action in actions {
                    let el = targets_cb[action.target].clone();
                    observer.unobserve(&el);
                    dom::after(action.delay_ms, move || apply(&el, style));
                }
                let t = tracker.borrow();
                if t.revealed_count() == t.len() {
                    log::debug!("[reveal] {} complete", name);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        for el in targets.iter() {
            observer.observe(el);
        }
        log::debug!("[reveal] {} observing {} targets", name, targets.len());
        Ok(Self {
            name,
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
        log::debug!("[reveal] {} disconnected", self.name);
    }
}

fn apply(el: &web::HtmlElement, style: RevealStyle) {
    match style {
        RevealStyle::Inline => {
            dom::set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")]);
        }
        RevealStyle::Class(class) => {
            _ = el.class_list().add_1(class);
        }
    }
}
