use crate::constants::{CARD_TRANSITION, ENDPOINT_ATTR, PROJECT_CARD, REVEAL_TARGETS};
use crate::core::epoch::Epoch;
use crate::core::form::{SubmissionService, SubmitFlow};
use crate::core::reveal::RevealStagger;
use crate::core::scroll_spy::ScrollTracker;
use crate::core::stylesheet::REVEALED_CLASS;
use crate::core::trail::TrailState;
use crate::core::FxConfig;
use crate::dom;
use crate::effects::{self, TypedTagline};
use crate::events;
use crate::frame::TrailLoop;
use crate::reveal::{RevealObserver, RevealStyle};
use crate::submission::{FetchSubmission, SimulatedSubmission};
use crate::subscriptions::Subscriptions;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owns everything the presentation layer adds to a page: listeners,
/// observers, the trail loop and injected elements.
pub struct Presentation {
    subscriptions: Subscriptions,
    observers: Vec<RevealObserver>,
    trail_loop: Option<TrailLoop>,
    trail_marker: Option<web::HtmlElement>,
    particles: Vec<web::Element>,
    typing: Epoch,
    tagline: Option<TypedTagline>,
    stylesheet: Option<web::Element>,
}

/// Default configuration with the submission endpoint taken from the contact
/// form's `data-endpoint` attribute, if any.
pub fn config_from_page(document: &web::Document) -> FxConfig {
    let endpoint =
        events::form::contact_form(document).and_then(|f| f.get_attribute(ENDPOINT_ATTR));
    FxConfig::default().with_endpoint(endpoint.as_deref())
}

fn submission_service(config: &FxConfig) -> Rc<dyn SubmissionService> {
    match &config.endpoint {
        Some(endpoint) => {
            log::info!("[form] submitting to {}", endpoint);
            Rc::new(FetchSubmission {
                endpoint: endpoint.clone(),
            })
        }
        None => Rc::new(SimulatedSubmission {
            delay_ms: config.simulated_round_trip_ms,
        }),
    }
}

impl Presentation {
    pub fn attach(document: &web::Document, config: FxConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        // Keyframes first so nothing user-triggered can start before they exist.
        let stylesheet = match effects::inject_stylesheet(document) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[attach] stylesheet not injected: {:?}", e);
                None
            }
        };

        let mut subscriptions = Subscriptions::new();
        let tracker = ScrollTracker {
            spy_offset: config.scroll_spy_offset,
            compact_threshold: config.header_compact_threshold,
            parallax_rate: config.parallax_rate,
        };

        events::form::wire_contact_form(
            &mut subscriptions,
            document,
            submission_service(&config),
            SubmitFlow::new(config.status_reset_ms),
        );
        events::navigation::wire_smooth_scroll(&mut subscriptions, document);
        events::scroll::wire_scroll_spy(&mut subscriptions, &window, document, tracker);
        events::pointer::wire_card_previews(&mut subscriptions, document);

        let mut observers = Vec::new();
        let reveal_sets = [
            (
                "cards",
                PROJECT_CARD,
                RevealStagger::PerEntry {
                    step_ms: config.card_reveal_stagger_ms,
                },
                RevealStyle::Inline,
                Some(CARD_TRANSITION),
            ),
            (
                "scroll",
                REVEAL_TARGETS,
                RevealStagger::Immediate,
                RevealStyle::Class(REVEALED_CLASS),
                None,
            ),
        ];
        for (name, selector, stagger, style, transition) in reveal_sets {
            let targets = dom::query_document(document, selector);
            if targets.is_empty() {
                continue;
            }
            match RevealObserver::observe(name, targets, stagger, style, transition) {
                Ok(o) => observers.push(o),
                Err(e) => log::warn!("[reveal] {} observer unavailable: {:?}", name, e),
            }
        }

        let particles = effects::spawn_particles(document, config.particle_count);
        let typing = Epoch::new();
        let tagline = if config.typing {
            effects::start_typing(document, typing.advance())
        } else {
            None
        };
        events::scroll::wire_parallax(&mut subscriptions, &window, document, tracker);

        let trail = Rc::new(RefCell::new(TrailState::new(config.trail_smoothing)));
        let trail_marker = effects::create_trail_marker(document);
        let trail_loop = trail_marker.as_ref().map(|marker| {
            events::pointer::wire_trail_pointer(
                &mut subscriptions,
                document,
                trail.clone(),
                marker.clone(),
            );
            TrailLoop::start(trail.clone(), marker.clone())
        });

        log::info!(
            "[attach] listeners={} observers={} particles={} trail={}",
            subscriptions.len(),
            observers.len(),
            particles.len(),
            trail_loop.is_some()
        );
        Ok(Self {
            subscriptions,
            observers,
            trail_loop,
            trail_marker,
            particles,
            typing,
            tagline,
            stylesheet,
        })
    }

    /// Undo `attach`: remove listeners, stop the trail loop and the typing
    /// effect, disconnect observers, restore the tagline and remove injected
    /// elements. Other inline styles already written stay on the page.
    pub fn detach(mut self) {
        let removed = self.subscriptions.clear();
        if let Some(l) = self.trail_loop.take() {
            l.stop();
        }
        for o in self.observers.drain(..) {
            o.disconnect();
        }
        if let Some(marker) = self.trail_marker.take() {
            marker.remove();
        }
        for p in self.particles.drain(..) {
            p.remove();
        }
        self.typing.advance();
        if let Some(tagline) = self.tagline.take() {
            tagline.restore();
        }
        if let Some(style) = self.stylesheet.take() {
            style.remove();
        }
        log::info!("[detach] removed {} listeners", removed);
    }
}
