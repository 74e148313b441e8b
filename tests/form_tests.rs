// Host-side tests for the contact form submission flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod epoch {
        include!("../src/core/epoch.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
}

use crate::core::epoch::Ticket;
use crate::core::form::*;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Status(FormStatus),
    Enabled(bool),
    Cleared,
    ResetIn(u32),
    ServiceCalled(usize),
}

type Log = Rc<RefCell<Vec<Step>>>;

struct RecordingView {
    log: Log,
    resets: Vec<Ticket>,
}

impl RecordingView {
    fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            resets: Vec::new(),
        }
    }
}

impl FormView for RecordingView {
    fn show_status(&mut self, status: FormStatus) {
        self.log.borrow_mut().push(Step::Status(status));
    }
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Step::Enabled(enabled));
    }
    fn clear_fields(&mut self) {
        self.log.borrow_mut().push(Step::Cleared);
    }
    fn schedule_status_reset(&mut self, ticket: Ticket, after_ms: u32) {
        self.log.borrow_mut().push(Step::ResetIn(after_ms));
        self.resets.push(ticket);
    }
}

struct Scripted {
    log: Log,
    outcome: Result<(), SubmitError>,
}

#[async_trait(?Send)]
impl SubmissionService for Scripted {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmitError> {
        self.log.borrow_mut().push(Step::ServiceCalled(payload.len()));
        self.outcome.clone()
    }
}

/// Resolves only when the test sends an outcome.
struct Deferred {
    rx: RefCell<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
}

#[async_trait(?Send)]
impl SubmissionService for Deferred {
    async fn submit(&self, _payload: FormPayload) -> Result<(), SubmitError> {
        let rx = self.rx.borrow_mut().take();
        match rx {
            Some(rx) => rx.await.unwrap_or(Err(SubmitError::Unavailable)),
            None => Err(SubmitError::Unavailable),
        }
    }
}

fn payload() -> FormPayload {
    vec![
        ("name".into(), "Ada".into()),
        ("email".into(), "ada@example.com".into()),
        ("message".into(), "hello".into()),
    ]
}

fn statuses(log: &Log) -> Vec<FormStatus> {
    log.borrow()
        .iter()
        .filter_map(|s| match s {
            Step::Status(st) => Some(*st),
            _ => None,
        })
        .collect()
}

fn enables(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|s| **s == Step::Enabled(true))
        .count()
}

#[test]
fn success_path_runs_in_order() {
    let log: Log = Rc::default();
    let service = Scripted {
        log: log.clone(),
        outcome: Ok(()),
    };
    let mut view = RecordingView::new(&log);
    let flow = SubmitFlow::default();

    let result = block_on(flow.run(&service, &mut view, payload()));

    assert_eq!(result, FormStatus::Success);
    assert_eq!(
        *log.borrow(),
        vec![
            Step::Status(FormStatus::Sending),
            Step::Enabled(false),
            Step::ServiceCalled(3),
            Step::Status(FormStatus::Success),
            Step::Cleared,
            Step::ResetIn(5000),
            Step::Enabled(true),
        ]
    );
}

#[test]
fn failure_path_shows_error_and_reenables_once() {
    let log: Log = Rc::default();
    let service = Scripted {
        log: log.clone(),
        outcome: Err(SubmitError::Rejected { status: 500 }),
    };
    let mut view = RecordingView::new(&log);

    let result = block_on(SubmitFlow::default().run(&service, &mut view, payload()));

    assert_eq!(result, FormStatus::Error);
    assert_eq!(statuses(&log), vec![FormStatus::Sending, FormStatus::Error]);
    assert_eq!(enables(&log), 1);
    assert_eq!(log.borrow().last(), Some(&Step::Enabled(true)));
    assert!(!log.borrow().contains(&Step::Cleared));
    assert!(view.resets.is_empty());
}

#[test]
fn sending_is_visible_before_the_round_trip_resolves() {
    let log: Log = Rc::default();
    let (tx, rx) = oneshot::channel();
    let service = Deferred {
        rx: RefCell::new(Some(rx)),
    };
    let mut view = RecordingView::new(&log);
    let flow = SubmitFlow::default();

    {
        let mut attempt = Box::pin(flow.run(&service, &mut view, payload()));
        assert!((&mut attempt).now_or_never().is_none());
        assert_eq!(statuses(&log), vec![FormStatus::Sending]);
        assert_eq!(*log.borrow(), vec![Step::Status(FormStatus::Sending), Step::Enabled(false)]);

        tx.send(Err(SubmitError::Network("offline".into()))).unwrap();
        assert_eq!(block_on(attempt), FormStatus::Error);
    }
    assert_eq!(enables(&log), 1);
}

#[test]
fn dropped_service_counts_as_failure() {
    let log: Log = Rc::default();
    let (tx, rx) = oneshot::channel::<Result<(), SubmitError>>();
    drop(tx);
    let service = Deferred {
        rx: RefCell::new(Some(rx)),
    };
    let mut view = RecordingView::new(&log);
    assert_eq!(
        block_on(SubmitFlow::default().run(&service, &mut view, payload())),
        FormStatus::Error
    );
    assert_eq!(enables(&log), 1);
}

#[test]
fn status_resets_to_idle_after_success() {
    let log: Log = Rc::default();
    let service = Scripted {
        log: log.clone(),
        outcome: Ok(()),
    };
    let mut view = RecordingView::new(&log);
    let flow = SubmitFlow::new(5000);
    block_on(flow.run(&service, &mut view, payload()));

    let ticket = view.resets.pop().unwrap();
    assert!(reset_if_current(&ticket, &mut view));
    assert_eq!(
        statuses(&log),
        vec![FormStatus::Sending, FormStatus::Success, FormStatus::Idle]
    );
}

#[test]
fn stale_reset_does_not_clobber_a_newer_attempt() {
    let log: Log = Rc::default();
    let ok = Scripted {
        log: log.clone(),
        outcome: Ok(()),
    };
    let fail = Scripted {
        log: log.clone(),
        outcome: Err(SubmitError::Unavailable),
    };
    let mut view = RecordingView::new(&log);
    let flow = SubmitFlow::default();

    block_on(flow.run(&ok, &mut view, payload()));
    let stale = view.resets.pop().unwrap();
    block_on(flow.run(&fail, &mut view, payload()));
    assert_eq!(flow.attempts(), 2);

    assert!(!reset_if_current(&stale, &mut view));
    assert_eq!(statuses(&log).last(), Some(&FormStatus::Error));
}

#[test]
fn every_recorded_transition_is_legal() {
    let log: Log = Rc::default();
    let ok = Scripted {
        log: log.clone(),
        outcome: Ok(()),
    };
    let fail = Scripted {
        log: log.clone(),
        outcome: Err(SubmitError::Network("reset".into())),
    };
    let mut view = RecordingView::new(&log);
    let flow = SubmitFlow::default();
    block_on(flow.run(&fail, &mut view, payload()));
    block_on(flow.run(&ok, &mut view, payload()));
    let t = view.resets.pop().unwrap();
    reset_if_current(&t, &mut view);

    let mut prev = FormStatus::Idle;
    for next in statuses(&log) {
        assert!(prev.can_become(next), "{prev:?} -> {next:?}");
        prev = next;
    }
    assert_eq!(prev, FormStatus::Idle);
}

#[test]
fn transition_table() {
    use FormStatus::*;
    assert!(Idle.can_become(Sending));
    assert!(!Idle.can_become(Success));
    assert!(!Sending.can_become(Idle));
    assert!(!Sending.can_become(Sending));
    assert!(Success.can_become(Idle));
    assert!(!Error.can_become(Idle));
    assert!(Error.can_become(Sending));
}

#[test]
fn status_text_and_classes() {
    assert_eq!(FormStatus::Idle.message(), "");
    assert_eq!(FormStatus::Idle.class_name(), "form-status");
    assert_eq!(FormStatus::Sending.message(), "Sending message...");
    assert_eq!(FormStatus::Sending.class_name(), "form-status sending");
    assert_eq!(
        FormStatus::Success.message(),
        "Message sent successfully! I'll get back to you soon."
    );
    assert_eq!(FormStatus::Success.class_name(), "form-status success");
    assert_eq!(
        FormStatus::Error.message(),
        "Failed to send message. Please try again."
    );
    assert_eq!(FormStatus::Error.class_name(), "form-status error");
}

#[test]
fn submit_errors_render_for_logs() {
    assert_eq!(
        SubmitError::Rejected { status: 422 }.to_string(),
        "endpoint rejected the submission (HTTP 422)"
    );
    assert_eq!(
        SubmitError::Network("timeout".into()).to_string(),
        "network error: timeout"
    );
}
