use super::constants::STATUS_RESET_MS;
use super::epoch::{Epoch, Ticket};
use async_trait::async_trait;

/// Contact form status as shown in the status element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => "Sending message...",
            FormStatus::Success => "Message sent successfully! I'll get back to you soon.",
            FormStatus::Error => "Failed to send message. Please try again.",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            FormStatus::Idle => "form-status",
            FormStatus::Sending => "form-status sending",
            FormStatus::Success => "form-status success",
            FormStatus::Error => "form-status error",
        }
    }

    /// Whether `self -> next` is a legal step of the submission sequence.
    #[cfg(test)]
    pub fn can_become(self, next: FormStatus) -> bool {
        use FormStatus::*;
        matches!(
            (self, next),
            (Idle | Success | Error, Sending) | (Sending, Success | Error) | (Success, Idle)
        )
    }
}

/// Name/value pairs of the submitted form, in document order.
pub type FormPayload = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("endpoint rejected the submission (HTTP {status})")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("submission service unavailable")]
    Unavailable,
}

/// The one external collaborator: something that accepts form data and
/// eventually reports success or failure.
#[async_trait(?Send)]
pub trait SubmissionService {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmitError>;
}

/// Presentation side of the contact form.
pub trait FormView {
    fn show_status(&mut self, status: FormStatus);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn clear_fields(&mut self);
    /// Arrange for [`reset_if_current`] to run with `ticket` after `after_ms`.
    fn schedule_status_reset(&mut self, ticket: Ticket, after_ms: u32);
}

/// Drives one submission attempt at a time through a [`FormView`].
#[derive(Clone, Debug)]
pub struct SubmitFlow {
    attempts: Epoch,
    pub reset_after_ms: u32,
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self::new(STATUS_RESET_MS)
    }
}

impl SubmitFlow {
    pub fn new(reset_after_ms: u32) -> Self {
        Self {
            attempts: Epoch::new(),
            reset_after_ms,
        }
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.generation()
    }

    /// Run one attempt. "sending" is shown and the submit control disabled
    /// before the service is called; the control is re-enabled exactly once
    /// after the outcome is shown.
    pub async fn run<S, V>(&self, service: &S, view: &mut V, payload: FormPayload) -> FormStatus
    where
        S: SubmissionService + ?Sized,
        V: FormView,
    {
        let ticket = self.attempts.advance();
        view.show_status(FormStatus::Sending);
        view.set_submit_enabled(false);

        let status = match service.submit(payload).await {
            Ok(()) => {
                log::info!("[form] submission #{} sent", self.attempts());
                view.show_status(FormStatus::Success);
                view.clear_fields();
                view.schedule_status_reset(ticket, self.reset_after_ms);
                FormStatus::Success
            }
            Err(e) => {
                log::warn!("[form] submission failed: {}", e);
                view.show_status(FormStatus::Error);
                FormStatus::Error
            }
        };

        view.set_submit_enabled(true);
        status
    }
}

/// Clear the status back to idle unless a newer attempt has started since
/// `ticket` was issued.
pub fn reset_if_current<V: FormView + ?Sized>(ticket: &Ticket, view: &mut V) -> bool {
    if ticket.is_current() {
        view.show_status(FormStatus::Idle);
        true
    } else {
        false
    }
}
