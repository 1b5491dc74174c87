//! Per-form submission lifecycle.
//!
//! A [`FormController`] owns the state of one form instance: the submission guard, the
//! visible banner and the tokens that tie timers back to the message they were started
//! for. It performs no I/O. Its host sends the request it hands out, sleeps for the
//! display window and feeds the results back:
//!
//! ```text
//! submit(fields) ──► Attempt::Send { ticket, request } ──► host issues one request
//!                                                          │
//! complete(ticket, outcome) ◄──────────────────────────────┘
//!        │ Completion { token, follow_up, .. }
//!        ▼
//! expire(token) after BANNER_TIMEOUT ──► banner hidden, guard released
//! ```
//!
//! While a request is pending, and until the banner describing its outcome expires,
//! further submissions are ignored. Validation failures never take the guard.

use log::{debug, warn};

use crate::banner::{Banner, BannerKind, NETWORK_FAILURE};
use crate::error::{NetworkError, SubmitError, ValidationError};
use crate::model::fields::FormFields;
use crate::model::response::ServerResponse;
use crate::navigation::FollowUp;

/// Form-specific behavior plugged into a [`FormController`].
pub trait FormSchema {
    /// What a valid form turns into; handed to the host to send.
    type Request;

    /// Checks the fields and returns the first violated constraint.
    fn validate(&self, fields: &FormFields) -> Result<Self::Request, ValidationError>;

    fn labels(&self) -> SubmitLabels;

    fn success_message(&self, response: &ServerResponse) -> String;

    fn failure_message(&self, response: &ServerResponse) -> String;

    fn network_message(&self, _error: &NetworkError) -> String {
        NETWORK_FAILURE.to_string()
    }

    fn follow_up(&self, _response: &ServerResponse) -> Option<FollowUp> {
        None
    }
}

/// Text of the submit button when idle and while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub pending: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether new submissions are rejected in this state.
    pub fn is_guarded(self) -> bool {
        matches!(
            self,
            SubmissionState::Pending | SubmissionState::Succeeded | SubmissionState::Failed
        )
    }
}

/// Identifies the one request a controller has in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Identifies the banner a display timer was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToken(u64);

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<R> {
    /// Accepted: the host must send `request` and report back with `ticket`.
    Send { ticket: Ticket, request: R },
    /// Rejected locally; an error banner is shown and `token` times it out.
    Blocked {
        error: ValidationError,
        token: DisplayToken,
    },
    /// A submission is already in progress; nothing changed.
    Ignored,
}

/// What the host has to do after a request resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub token: DisplayToken,
    pub follow_up: Option<FollowUp>,
    pub error: Option<SubmitError>,
}

pub struct FormController<S: FormSchema> {
    schema: S,
    state: SubmissionState,
    banner: Option<Banner>,
    in_flight: Option<Ticket>,
    next_ticket: u64,
    display_epoch: u64,
}

impl<S: FormSchema> FormController<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            state: SubmissionState::Idle,
            banner: None,
            in_flight: None,
            next_ticket: 0,
            display_epoch: 0,
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn button_disabled(&self) -> bool {
        self.state.is_guarded()
    }

    pub fn button_label(&self) -> &'static str {
        let labels = self.schema.labels();
        if self.is_pending() {
            labels.pending
        } else {
            labels.idle
        }
    }

    /// Handles a submit trigger.
    pub fn submit(&mut self, fields: &FormFields) -> Attempt<S::Request> {
        if self.state.is_guarded() {
            debug!("submission ignored while {:?}", self.state);
            return Attempt::Ignored;
        }

        self.transition(SubmissionState::Validating);
        match self.schema.validate(fields) {
            Err(error) => {
                self.transition(SubmissionState::Idle);
                debug!("validation failed on {}: {}", error.field, error.reason);
                let token = self.show(Banner::error(error.reason.clone()));
                Attempt::Blocked { error, token }
            }
            Ok(request) => {
                self.hide();
                self.next_ticket += 1;
                let ticket = Ticket(self.next_ticket);
                self.in_flight = Some(ticket);
                self.transition(SubmissionState::Pending);
                Attempt::Send { ticket, request }
            }
        }
    }

    /// Applies the outcome of the request issued for `ticket`.
    ///
    /// Returns `None` when `ticket` is not the request in flight.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ServerResponse, NetworkError>,
    ) -> Option<Completion> {
        if self.in_flight != Some(ticket) {
            warn!("completion for unknown request {ticket:?} dropped");
            return None;
        }
        self.in_flight = None;

        let (banner, follow_up, error) = match outcome {
            Ok(response) if response.success => (
                Banner::success(self.schema.success_message(&response)),
                self.schema.follow_up(&response),
                None,
            ),
            Ok(response) => {
                let text = self.schema.failure_message(&response);
                let cause = response.explanation().unwrap_or(&text).to_string();
                warn!("server rejected submission: {cause}");
                (Banner::error(text), None, Some(SubmitError::Server(cause)))
            }
            Err(err) => {
                warn!("submission failed: {err}");
                (
                    Banner::error(self.schema.network_message(&err)),
                    None,
                    Some(SubmitError::Network(err)),
                )
            }
        };

        self.transition(if error.is_none() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        });
        let token = self.show(banner);
        Some(Completion {
            token,
            follow_up,
            error,
        })
    }

    /// Display timer for `token` elapsed. Hides the banner and releases the guard unless a
    /// newer message superseded it. Returns whether anything changed.
    pub fn expire(&mut self, token: DisplayToken) -> bool {
        if token.0 != self.display_epoch {
            return false;
        }
        self.banner = None;
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.transition(SubmissionState::Idle);
        }
        true
    }

    /// Shows a message that did not come from a submission (load errors and the like).
    pub fn notify(&mut self, kind: BannerKind, text: impl Into<String>) -> DisplayToken {
        self.show(Banner::new(kind, text))
    }

    /// Hides the banner now. A finished submission's guard goes with it; a pending one stays.
    pub fn dismiss(&mut self) {
        self.hide();
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.transition(SubmissionState::Idle);
        }
    }

    fn show(&mut self, banner: Banner) -> DisplayToken {
        self.display_epoch += 1;
        self.banner = Some(banner);
        DisplayToken(self.display_epoch)
    }

    fn hide(&mut self) {
        self.display_epoch += 1;
        self.banner = None;
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("submission {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct NoteSchema;

    impl FormSchema for NoteSchema {
        type Request = String;

        fn validate(&self, fields: &FormFields) -> Result<String, ValidationError> {
            fields
                .required("note", "Note is required!")
                .map(str::to_string)
        }

        fn labels(&self) -> SubmitLabels {
            SubmitLabels {
                idle: "Save",
                pending: "Saving...",
            }
        }

        fn success_message(&self, _response: &ServerResponse) -> String {
            "Saved".into()
        }

        fn failure_message(&self, _response: &ServerResponse) -> String {
            "Not saved".into()
        }

        fn follow_up(&self, _response: &ServerResponse) -> Option<FollowUp> {
            Some(FollowUp::after("next.html", Duration::from_secs(2)))
        }
    }

    fn note(text: &str) -> FormFields {
        [("note", text)].into_iter().collect()
    }

    fn accept(controller: &mut FormController<NoteSchema>) -> Ticket {
        match controller.submit(&note("hello")) {
            Attempt::Send { ticket, request } => {
                assert_eq!(request, "hello");
                ticket
            }
            other => panic!("expected Send, got {other:?}"),
        }
    }

    #[test]
    fn accepted_submission_disables_the_button() {
        let mut controller = FormController::new(NoteSchema);
        assert_eq!(controller.button_label(), "Save");

        accept(&mut controller);

        assert_eq!(controller.state(), SubmissionState::Pending);
        assert!(controller.button_disabled());
        assert_eq!(controller.button_label(), "Saving...");
        assert!(controller.banner().is_none());
    }

    #[test]
    fn second_trigger_before_resolution_is_ignored() {
        let mut controller = FormController::new(NoteSchema);
        let mut sent = 0;
        for _ in 0..2 {
            if let Attempt::Send { .. } = controller.submit(&note("hello")) {
                sent += 1;
            }
        }
        assert_eq!(sent, 1);
        assert_eq!(controller.state(), SubmissionState::Pending);
    }

    #[test]
    fn validation_failure_does_not_take_the_guard() {
        let mut controller = FormController::new(NoteSchema);
        let attempt = controller.submit(&note("  "));
        assert!(matches!(attempt, Attempt::Blocked { ref error, .. } if error.field == "note"));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.button_disabled());
        assert_eq!(controller.banner().unwrap().text, "Note is required!");

        // the next attempt goes through and clears the stale error
        accept(&mut controller);
        assert!(controller.banner().is_none());
    }

    #[test]
    fn success_shows_message_and_schedules_follow_up() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);

        let completion = controller.complete(ticket, Ok(ServerResponse::ok())).unwrap();

        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(controller.banner(), Some(&Banner::success("Saved")));
        assert_eq!(completion.follow_up.unwrap().target, "next.html");
        assert!(completion.error.is_none());
    }

    #[test]
    fn server_and_network_failures_show_different_messages() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);
        let completion = controller
            .complete(ticket, Ok(ServerResponse::default()))
            .unwrap();
        let server_text = controller.banner().unwrap().text.clone();
        assert!(matches!(completion.error, Some(SubmitError::Server(_))));
        assert!(completion.follow_up.is_none());

        controller.expire(completion.token);
        let ticket = accept(&mut controller);
        let completion = controller
            .complete(ticket, Err(NetworkError::Unreachable("refused".into())))
            .unwrap();
        let network_text = controller.banner().unwrap().text.clone();

        assert_eq!(controller.state(), SubmissionState::Failed);
        assert!(matches!(completion.error, Some(SubmitError::Network(_))));
        assert_eq!(network_text, NETWORK_FAILURE);
        assert_ne!(server_text, network_text);
    }

    #[test]
    fn expiry_hides_banner_and_releases_guard() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);
        let completion = controller.complete(ticket, Ok(ServerResponse::ok())).unwrap();
        assert!(matches!(controller.submit(&note("again")), Attempt::Ignored));

        assert!(controller.expire(completion.token));

        assert!(controller.banner().is_none());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(matches!(controller.submit(&note("again")), Attempt::Send { .. }));
    }

    #[test]
    fn stale_timer_does_not_hide_newer_message() {
        let mut controller = FormController::new(NoteSchema);
        let Attempt::Blocked { token: first, .. } = controller.submit(&note("")) else {
            panic!("expected Blocked");
        };
        let Attempt::Blocked { token: second, .. } = controller.submit(&note(" ")) else {
            panic!("expected Blocked");
        };

        assert!(!controller.expire(first));
        assert!(controller.banner().is_some());
        assert!(controller.expire(second));
        assert!(controller.banner().is_none());
    }

    #[test]
    fn completion_for_unknown_ticket_is_dropped() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);
        controller.complete(ticket, Ok(ServerResponse::ok()));

        assert!(controller.complete(ticket, Ok(ServerResponse::ok())).is_none());
        assert_eq!(controller.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn dismiss_keeps_pending_guard_but_releases_finished_one() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);
        controller.dismiss();
        assert_eq!(controller.state(), SubmissionState::Pending);

        controller.complete(ticket, Ok(ServerResponse::default()));
        controller.dismiss();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.banner().is_none());
    }

    #[test]
    fn notification_supersedes_outcome_banner_but_keeps_guard_until_it_expires() {
        let mut controller = FormController::new(NoteSchema);
        let ticket = accept(&mut controller);
        let completion = controller
            .complete(ticket, Err(NetworkError::Timeout(10)))
            .unwrap();

        let token = controller.notify(BannerKind::Info, "Still here");
        assert!(!controller.expire(completion.token));
        assert_eq!(controller.state(), SubmissionState::Failed);

        assert!(controller.expire(token));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
