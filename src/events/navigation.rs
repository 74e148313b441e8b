use crate::constants::SAME_PAGE_LINKS;
use crate::core::registry::EventKind;
use crate::core::scroll_spy::fragment_target;
use crate::dom;
use crate::subscriptions::Subscriptions;
use web_sys as web;

/// Replace jump navigation on same-page anchors with smooth scrolling.
pub fn wire_smooth_scroll(subs: &mut Subscriptions, document: &web::Document) -> usize {
    let links = dom::query_document(document, SAME_PAGE_LINKS);
    for link in &links {
        let doc = document.clone();
        let anchor = link.clone();
        subs.listen(link, EventKind::Click, move |ev| {
            ev.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            scroll_to_fragment(&doc, &href);
        });
    }
    links.len()
}

/// Smooth-scroll the element referenced by `href` to the top of the viewport.
/// Returns false, without scrolling, when there is no such element.
pub fn scroll_to_fragment(document: &web::Document, href: &str) -> bool {
    let Some(target) = fragment_target(href).and_then(|id| document.get_element_by_id(id)) else {
        log::debug!("[nav] no target for {:?}", href);
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
