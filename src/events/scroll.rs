use crate::constants::{
    ACTIVE_CLASS, HEADER, HEADER_COMPACT_CLASS, HERO, HERO_CONTENT, NAV_LINKS, SPY_SECTIONS,
};
use crate::core::registry::EventKind;
use crate::core::scroll_spy::{ScrollTracker, SectionAnchor};
use crate::dom;
use crate::subscriptions::Subscriptions;
use web_sys as web;

/// Highlight the nav link of the current section and compact the header
/// past the threshold. Runs on every scroll event, unthrottled.
pub fn wire_scroll_spy(
    subs: &mut Subscriptions,
    window: &web::Window,
    document: &web::Document,
    tracker: ScrollTracker,
) {
    let sections = dom::query_document(document, SPY_SECTIONS);
    let nav_links = dom::query_document(document, NAV_LINKS);
    let header = dom::query_one(document, HEADER);
    if sections.is_empty() && header.is_none() {
        log::debug!("[scroll] nothing to track");
        return;
    }

    subs.listen(window, EventKind::Scroll, move |_| {
        let scroll_y = dom::scroll_y();
        // Geometry is re-read each time; sections may move as content loads.
        let anchors: Vec<SectionAnchor> = sections
            .iter()
            .map(|s| SectionAnchor::new(s.id(), s.offset_top() as f64))
            .collect();
        let hrefs: Vec<String> = nav_links
            .iter()
            .map(|a| a.get_attribute("href").unwrap_or_default())
            .collect();

        let frame = tracker.evaluate(&anchors, &hrefs, scroll_y);
        for (link, active) in nav_links.iter().zip(frame.active_links) {
            _ = link.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
        if let Some(h) = &header {
            _ = h
                .class_list()
                .toggle_with_force(HEADER_COMPACT_CLASS, frame.header_compact);
        }
    });
}

/// Lag the hero content behind the scroll position. No-op without a hero or
/// its inner container.
pub fn wire_parallax(
    subs: &mut Subscriptions,
    window: &web::Window,
    document: &web::Document,
    tracker: ScrollTracker,
) {
    let Some(hero) = dom::query_one(document, HERO) else {
        log::debug!("[parallax] no {} on page", HERO);
        return;
    };
    let Some(content) = dom::query_within(&hero, HERO_CONTENT).into_iter().next() else {
        log::debug!("[parallax] hero has no {}", HERO_CONTENT);
        return;
    };

    subs.listen(window, EventKind::Scroll, move |_| {
        let offset = tracker.parallax(dom::scroll_y());
        _ = content
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    });
}
