use crate::core::trail::TrailState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop easing the trail marker toward the pointer.
///
/// Runs until [`TrailLoop::stop`]; the running flag is checked every tick and
/// the pending frame request is cancelled on stop.
pub struct TrailLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl TrailLoop {
    pub fn start(state: Rc<RefCell<TrailState>>, marker: web::HtmlElement) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            let offset = state.borrow_mut().step();
            let style = marker.style();
            _ = style.set_property("left", &format!("{:.2}px", offset.x));
            _ = style.set_property("top", &format!("{:.2}px", offset.y));
            request_frame(&tick_clone, &pending_tick);
        }) as Box<dyn FnMut()>));

        request_frame(&tick, &pending);
        log::debug!("[trail] loop started");
        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Drop the self-referencing closure to break the Rc cycle.
        let closure = self.tick.borrow_mut().take();
        drop(closure);
        log::debug!("[trail] loop stopped");
    }
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[trail] requestAnimationFrame error: {:?}", e),
        }
    }
}
