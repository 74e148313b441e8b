use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn html_elements(
    list: Result<web::NodeList, wasm_bindgen::JsValue>,
    selector: &str,
) -> Vec<web::HtmlElement> {
    let list = match list {
        Ok(l) => l,
        Err(e) => {
            log::debug!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// All HTML elements in the document matching `selector`.
#[inline]
pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(document.query_selector_all(selector), selector)
}

#[inline]
pub fn query_within(el: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(el.query_selector_all(selector), selector)
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Run `f` once after `delay_ms`; runs inline when the delay is zero.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    if delay_ms == 0 {
        f();
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    ) {
        log::error!("[dom] setTimeout error: {:?}", e);
    }
}

/// Future resolving after `delay_ms` on the browser timer queue.
pub async fn sleep_ms(delay_ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                delay_ms.min(i32::MAX as u32) as i32,
            );
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
