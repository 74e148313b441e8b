use crate::constants::{CONTACT_FORM, FORM_STATUS_ID, SUBMIT_BUTTON};
use crate::core::form::{SubmissionService, SubmitFlow};
use crate::core::registry::EventKind;
use crate::status::DomFormView;
use crate::submission::read_payload;
use crate::subscriptions::Subscriptions;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Intercept contact form submission and run it through `service`.
/// Returns false (and wires nothing) when the form or its status element is
/// missing.
pub fn wire_contact_form(
    subs: &mut Subscriptions,
    document: &web::Document,
    service: Rc<dyn SubmissionService>,
    flow: SubmitFlow,
) -> bool {
    let Some(form) = contact_form(document) else {
        log::debug!("[form] no {} on page", CONTACT_FORM);
        return false;
    };
    let Some(status) = document
        .get_element_by_id(FORM_STATUS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[form] no #{} on page", FORM_STATUS_ID);
        return false;
    };
    let submit = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());

    let view = DomFormView {
        form: form.clone(),
        status,
        submit,
    };
    subs.listen(&form, EventKind::Submit, move |ev| {
        ev.prevent_default();
        let payload = read_payload(&view.form);
        let mut view = view.clone();
        let service = service.clone();
        let flow = flow.clone();
        spawn_local(async move {
            flow.run(&*service, &mut view, payload).await;
        });
    });
    true
}

pub fn contact_form(document: &web::Document) -> Option<web::HtmlFormElement> {
    document
        .query_selector(CONTACT_FORM)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
}
