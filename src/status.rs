use crate::core::epoch::Ticket;
use crate::core::form::{reset_if_current, FormStatus, FormView};
use crate::dom;
use web_sys as web;

/// [`FormView`] over the live contact form, its submit button and the
/// `#form-status` element.
#[derive(Clone)]
pub struct DomFormView {
    pub form: web::HtmlFormElement,
    pub status: web::HtmlElement,
    pub submit: Option<web::HtmlButtonElement>,
}

#[inline]
pub fn show(status_el: &web::HtmlElement, status: FormStatus) {
    status_el.set_text_content(Some(status.message()));
    status_el.set_class_name(status.class_name());
}

impl FormView for DomFormView {
    fn show_status(&mut self, status: FormStatus) {
        show(&self.status, status);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
        }
    }

    fn clear_fields(&mut self) {
        self.form.reset();
    }

    fn schedule_status_reset(&mut self, ticket: Ticket, after_ms: u32) {
        let mut view = self.clone();
        dom::after(after_ms, move || {
            if !reset_if_current(&ticket, &mut view) {
                log::debug!("[form] stale status reset skipped");
            }
        });
    }
}
