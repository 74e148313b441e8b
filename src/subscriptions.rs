use crate::core::registry::{EventKind, SubscriptionTable};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Every DOM listener the controller installed, kept so `detach` can remove
/// them again instead of leaking forgotten closures.
#[derive(Default)]
pub struct Subscriptions {
    table: SubscriptionTable<web::EventTarget, Handler>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: EventKind,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        {
            log::error!("[listen] {} listener error: {:?}", kind.as_str(), e);
            return;
        }
        self.table.insert(target, kind, closure);
    }

    /// Like [`Subscriptions::listen`] but hands the handler the event cast to
    /// its concrete type; events of another type are ignored.
    pub fn listen_as<E: JsCast + 'static>(
        &mut self,
        target: &web::EventTarget,
        kind: EventKind,
        mut handler: impl FnMut(E) + 'static,
    ) {
        self.listen(target, kind, move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        });
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Unregister everything; returns how many listeners were removed.
    pub fn clear(&mut self) -> usize {
        if self.table.is_empty() {
            return 0;
        }
        let drained = self.table.drain();
        let n = drained.len();
        for (target, kind, closure) in drained {
            _ = target
                .remove_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref());
        }
        n
    }
}
