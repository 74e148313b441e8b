use crate::constants::{PREVIEW_CHART_BARS, PREVIEW_CONTENT_ITEMS, PREVIEW_NAV_ITEMS, PROJECT_CARD};
use crate::core::epoch::Epoch;
use crate::core::preview::{enter_plan, leave_plan, PreviewCounts, PreviewGroup, PreviewStep};
use crate::core::registry::EventKind;
use crate::core::trail::TrailState;
use crate::dom;
use crate::effects;
use crate::subscriptions::Subscriptions;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed pointer coordinates to the trail and toggle the marker's visibility.
pub fn wire_trail_pointer(
    subs: &mut Subscriptions,
    document: &web::Document,
    state: Rc<RefCell<TrailState>>,
    marker: web::HtmlElement,
) {
    let state_move = state.clone();
    let marker_move = marker.clone();
    subs.listen_as(document, EventKind::MouseMove, move |ev: web::MouseEvent| {
        let mut s = state_move.borrow_mut();
        s.pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        _ = marker_move.style().set_property("opacity", s.opacity());
    });

    // mouseleave on the root element fires when the pointer exits the window.
    let Some(root) = document.document_element() else {
        return;
    };
    subs.listen(&root, EventKind::MouseLeave, move |_| {
        let mut s = state.borrow_mut();
        s.pointer_left();
        _ = marker.style().set_property("opacity", s.opacity());
    });
}

struct CardPreview {
    card: web::HtmlElement,
    hover: Epoch,
}

impl CardPreview {
    fn group(&self, group: PreviewGroup) -> Vec<web::HtmlElement> {
        let selector = match group {
            PreviewGroup::NavItem => PREVIEW_NAV_ITEMS,
            PreviewGroup::Content => PREVIEW_CONTENT_ITEMS,
            PreviewGroup::ChartBar => PREVIEW_CHART_BARS,
        };
        dom::query_within(&self.card, selector)
    }

    fn snapshot(&self) -> (PreviewCounts, [Vec<web::HtmlElement>; 3]) {
        let groups = PreviewGroup::ALL.map(|g| self.group(g));
        let counts = PreviewCounts {
            nav_items: groups[0].len(),
            content: groups[1].len(),
            chart_bars: groups[2].len(),
        };
        (counts, groups)
    }

    fn enter(&self) {
        let ticket = self.hover.advance();
        let (counts, groups) = self.snapshot();
        for step in enter_plan(counts) {
            let Some(el) = element_for(&groups, &step) else {
                continue;
            };
            let ticket = ticket.clone();
            dom::after(step.delay_ms, move || {
                // A leave (or re-enter) since scheduling supersedes this step.
                if ticket.is_current() {
                    dom::set_styles(&el, step.style);
                }
            });
        }
    }

    fn leave(&self) {
        self.hover.advance();
        let (counts, groups) = self.snapshot();
        for step in leave_plan(counts) {
            if let Some(el) = element_for(&groups, &step) {
                dom::set_styles(&el, step.style);
            }
        }
    }
}

fn element_for(
    groups: &[Vec<web::HtmlElement>; 3],
    step: &PreviewStep,
) -> Option<web::HtmlElement> {
    let slot = PreviewGroup::ALL.iter().position(|g| *g == step.group)?;
    groups[slot].get(step.index).cloned()
}

/// Hover previews and click ripples on every project card.
pub fn wire_card_previews(subs: &mut Subscriptions, document: &web::Document) -> usize {
    let cards = dom::query_document(document, PROJECT_CARD);
    for card in &cards {
        let preview = Rc::new(CardPreview {
            card: card.clone(),
            hover: Epoch::new(),
        });

        let on_enter = preview.clone();
        subs.listen(card, EventKind::MouseEnter, move |_| on_enter.enter());

        let on_leave = preview.clone();
        subs.listen(card, EventKind::MouseLeave, move |_| on_leave.leave());

        let doc = document.clone();
        subs.listen_as(card, EventKind::Click, move |ev: web::MouseEvent| {
            effects::spawn_ripple(&doc, &preview.card, &ev);
        });
    }
    cards.len()
}
