use std::cell::RefCell;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::{EmailJsConfig, CONTACT_EMAIL};

pub const SUCCESS_WINDOW_MS: u64 = 5000;
pub const VALIDATION_ERROR_WINDOW_MS: u64 = 5000;
pub const DELIVERY_ERROR_WINDOW_MS: u64 = 7000;

pub const GENERIC_DELIVERY_FAILURE: &str =
    "Failed to send message. Please try again or contact us directly.";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("EmailJS configuration is missing")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("EmailJS rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("EmailJS did not answer in time")]
    TimedOut,
}

impl DeliveryError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            DeliveryError::Rejected { message, .. } | DeliveryError::Request(message)
                if !message.trim().is_empty() =>
            {
                message.trim().to_string()
            }
            _ => GENERIC_DELIVERY_FAILURE.to_string(),
        }
    }
}

impl FormPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// Everything the email collaborator needs for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub config: EmailJsConfig,
    pub params: TemplateParams,
}

#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Already submitting; nothing changed.
    Rejected,
    Invalid(ValidationError),
    Failed(DeliveryError),
    Dispatched(DeliveryRequest),
}

/// Contact form state machine. Time is passed in as milliseconds so the
/// auto-reset deadlines are deterministic.
#[derive(Debug)]
pub struct ContactFormController {
    config: Option<EmailJsConfig>,
    state: SubmissionState,
    payload: FormPayload,
    reset_at: Option<u64>,
    disposed: bool,
}

impl ContactFormController {
    pub fn new(config: Option<EmailJsConfig>) -> Self {
        ContactFormController {
            config,
            state: SubmissionState::Idle,
            payload: FormPayload::default(),
            reset_at: None,
            disposed: false,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn payload(&self) -> &FormPayload {
        &self.payload
    }

    pub fn reset_at(&self) -> Option<u64> {
        self.reset_at
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Field edits are ignored while a message is in flight.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.disposed || self.is_submitting() {
            return;
        }
        match field {
            Field::Name => self.payload.name = value,
            Field::Email => self.payload.email = value,
            Field::Message => self.payload.message = value,
        }
    }

    pub fn submit(&mut self, now: u64) -> SubmitOutcome {
        if self.disposed || self.is_submitting() {
            return SubmitOutcome::Rejected;
        }

        if let Err(e) = self.payload.validate() {
            self.enter(SubmissionState::Error(e.to_string()), now + VALIDATION_ERROR_WINDOW_MS);
            return SubmitOutcome::Invalid(e);
        }

        let Some(config) = self.config.clone() else {
            let error = DeliveryError::NotConfigured;
            self.enter(SubmissionState::Error(error.user_message()), now + DELIVERY_ERROR_WINDOW_MS);
            return SubmitOutcome::Failed(error);
        };

        self.state = SubmissionState::Submitting;
        self.reset_at = None;
        SubmitOutcome::Dispatched(DeliveryRequest {
            config,
            params: TemplateParams {
                from_name: self.payload.name.clone(),
                from_email: self.payload.email.clone(),
                message: self.payload.message.clone(),
                to_email: CONTACT_EMAIL.to_string(),
            },
        })
    }

    /// Records the collaborator's answer for the in-flight submission.
    pub fn complete(&mut self, result: Result<(), DeliveryError>, now: u64) {
        if self.disposed || !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                self.payload = FormPayload::default();
                self.enter(SubmissionState::Success, now + SUCCESS_WINDOW_MS);
            }
            Err(e) => {
                self.enter(SubmissionState::Error(e.user_message()), now + DELIVERY_ERROR_WINDOW_MS);
            }
        }
    }

    /// Returns to Idle once the display window has passed. True if it did.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.reset_at {
            Some(at) if !self.disposed && now >= at => {
                self.state = SubmissionState::Idle;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    /// Section unmounted: no further transitions.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.reset_at = None;
    }

    fn enter(&mut self, state: SubmissionState, reset_at: u64) {
        self.state = state;
        self.reset_at = Some(reset_at);
    }
}

/// Runs one submission through `mailer`, calling `notify` after every
/// transition. The controller is never borrowed across the await, so other
/// handlers keep working while the message is in flight.
pub async fn submit_with<M: Mailer + ?Sized>(
    controller: &RefCell<ContactFormController>,
    mailer: &M,
    now: impl Fn() -> u64,
    notify: impl Fn(&ContactFormController),
) -> SubmitOutcome {
    let outcome = controller.borrow_mut().submit(now());
    if outcome == SubmitOutcome::Rejected {
        return outcome;
    }
    notify(&controller.borrow());

    if let SubmitOutcome::Dispatched(request) = &outcome {
        let result = mailer.send(request).await;
        controller.borrow_mut().complete(result, now());
        notify(&controller.borrow());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_x".into(),
            template_id: "template_x".into(),
            public_key: "pk_x".into(),
        }
    }

    fn filled(controller: &mut ContactFormController, name: &str, email: &str, message: &str) {
        controller.set_field(Field::Name, name.into());
        controller.set_field(Field::Email, email.into());
        controller.set_field(Field::Message, message.into());
    }

    struct StubMailer {
        result: Result<(), DeliveryError>,
        calls: Cell<usize>,
        seen: RefCell<Option<DeliveryRequest>>,
    }

    impl StubMailer {
        fn new(result: Result<(), DeliveryError>) -> Self {
            StubMailer { result, calls: Cell::new(0), seen: RefCell::new(None) }
        }
    }

    #[async_trait(?Send)]
    impl Mailer for StubMailer {
        async fn send(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            *self.seen.borrow_mut() = Some(request.clone());
            self.result.clone()
        }
    }

    /// Checks the controller mid-flight, then answers.
    struct ReentrantMailer<'a> {
        controller: &'a RefCell<ContactFormController>,
    }

    #[async_trait(?Send)]
    impl<'a> Mailer for ReentrantMailer<'a> {
        async fn send(&self, _request: &DeliveryRequest) -> Result<(), DeliveryError> {
            let before = self.controller.borrow().payload().clone();
            let outcome = self.controller.borrow_mut().submit(1);
            assert_eq!(outcome, SubmitOutcome::Rejected);
            self.controller.borrow_mut().set_field(Field::Name, "Changed".into());
            assert_eq!(self.controller.borrow().state(), &SubmissionState::Submitting);
            assert_eq!(self.controller.borrow().payload(), &before);
            Ok(())
        }
    }

    #[test]
    fn empty_field_is_rejected_locally() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "", "a@b.com", "hi");
        assert_eq!(controller.submit(1000), SubmitOutcome::Invalid(ValidationError::MissingFields));
        assert_eq!(
            controller.state(),
            &SubmissionState::Error("Please fill in all fields".into())
        );
        assert!(!controller.tick(5999));
        assert!(controller.tick(6000));
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "Jo", "a@b.com", "   ");
        assert_eq!(controller.submit(0), SubmitOutcome::Invalid(ValidationError::MissingFields));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "Jo", "not-an-email", "hi");
        assert_eq!(controller.submit(0), SubmitOutcome::Invalid(ValidationError::InvalidEmail));
        assert_eq!(
            controller.state(),
            &SubmissionState::Error("Please enter a valid email address".into())
        );
        assert_eq!(controller.reset_at(), Some(VALIDATION_ERROR_WINDOW_MS));
    }

    #[test]
    fn email_pattern() {
        let check = |email: &str| {
            FormPayload { name: "n".into(), email: email.into(), message: "m".into() }.validate()
        };
        assert_eq!(check("a@b.com"), Ok(()));
        assert_eq!(check("first.last@sub.example.ae"), Ok(()));
        for bad in ["a@b", "a@@b.com", "a@b@c.com", "@b.com", "a b@c.com", "a.b@c"] {
            assert_eq!(check(bad), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn successful_delivery_clears_the_form() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        filled(&mut controller.borrow_mut(), "Jo", "jo@example.com", "Need 40 drums");
        let mailer = StubMailer::new(Ok(()));

        let outcome = block_on(submit_with(&controller, &mailer, || 10_000, |_| {}));
        assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
        assert_eq!(mailer.calls.get(), 1);

        let sent = mailer.seen.borrow().clone().unwrap();
        assert_eq!(sent.config, config());
        assert_eq!(
            sent.params,
            TemplateParams {
                from_name: "Jo".into(),
                from_email: "jo@example.com".into(),
                message: "Need 40 drums".into(),
                to_email: "zahra_steel@hotmail.com".into(),
            }
        );

        let mut controller = controller.into_inner();
        assert_eq!(controller.state(), &SubmissionState::Success);
        assert_eq!(controller.payload(), &FormPayload::default());
        assert!(!controller.tick(14_999));
        assert!(controller.tick(15_000));
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn fields_are_sent_as_entered() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        filled(&mut controller.borrow_mut(), "  Jo  ", "jo@example.com", "\nNeed 40 drums\n");
        let mailer = StubMailer::new(Ok(()));

        block_on(submit_with(&controller, &mailer, || 0, |_| {}));

        let sent = mailer.seen.borrow().clone().unwrap();
        assert_eq!(sent.params.from_name, "  Jo  ");
        assert_eq!(sent.params.message, "\nNeed 40 drums\n");
    }

    #[test]
    fn failed_delivery_shows_collaborator_message() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        filled(&mut controller.borrow_mut(), "Jo", "jo@example.com", "hi");
        let mailer = StubMailer::new(Err(DeliveryError::Rejected {
            status: 400,
            message: "The template ID is invalid".into(),
        }));

        block_on(submit_with(&controller, &mailer, || 0, |_| {}));
        let mut controller = controller.into_inner();
        assert_eq!(
            controller.state(),
            &SubmissionState::Error("The template ID is invalid".into())
        );
        // payload kept so the visitor can retry
        assert_eq!(controller.payload().name, "Jo");
        assert!(!controller.tick(6999));
        assert!(controller.tick(7000));
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        for error in [
            DeliveryError::TimedOut,
            DeliveryError::Request(String::new()),
            DeliveryError::Rejected { status: 500, message: "  ".into() },
        ] {
            assert_eq!(error.user_message(), GENERIC_DELIVERY_FAILURE);
        }
        assert_eq!(DeliveryError::Request("offline".into()).user_message(), "offline");
    }

    #[test]
    fn missing_configuration_is_a_delivery_failure() {
        let controller = RefCell::new(ContactFormController::new(None));
        filled(&mut controller.borrow_mut(), "Jo", "jo@example.com", "hi");
        let mailer = StubMailer::new(Ok(()));

        let outcome = block_on(submit_with(&controller, &mailer, || 100, |_| {}));
        assert_eq!(outcome, SubmitOutcome::Failed(DeliveryError::NotConfigured));
        assert_eq!(mailer.calls.get(), 0);
        let controller = controller.into_inner();
        assert_eq!(
            controller.state(),
            &SubmissionState::Error(GENERIC_DELIVERY_FAILURE.into())
        );
        assert_eq!(controller.reset_at(), Some(100 + DELIVERY_ERROR_WINDOW_MS));
    }

    #[test]
    fn resubmit_while_in_flight_is_ignored() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        filled(&mut controller.borrow_mut(), "Jo", "jo@example.com", "hi");
        let mailer = ReentrantMailer { controller: &controller };

        block_on(submit_with(&controller, &mailer, || 0, |_| {}));
        assert_eq!(controller.borrow().state(), &SubmissionState::Success);
    }

    #[test]
    fn notify_sees_each_transition() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        filled(&mut controller.borrow_mut(), "Jo", "jo@example.com", "hi");
        let mailer = StubMailer::new(Ok(()));
        let seen = RefCell::new(Vec::new());

        block_on(submit_with(&controller, &mailer, || 0, |c| {
            seen.borrow_mut().push(c.state().clone())
        }));
        assert_eq!(
            seen.into_inner(),
            vec![SubmissionState::Submitting, SubmissionState::Success]
        );
    }

    #[test]
    fn validation_failure_notifies_once_without_sending() {
        let controller = RefCell::new(ContactFormController::new(Some(config())));
        let mailer = StubMailer::new(Ok(()));
        let notified = Cell::new(0);

        let outcome = block_on(submit_with(&controller, &mailer, || 0, |_| {
            notified.set(notified.get() + 1)
        }));
        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingFields));
        assert_eq!(notified.get(), 1);
        assert_eq!(mailer.calls.get(), 0);
    }

    #[test]
    fn submit_twice_without_awaiting() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "Jo", "jo@example.com", "hi");
        assert!(matches!(controller.submit(0), SubmitOutcome::Dispatched(_)));
        assert_eq!(controller.submit(1), SubmitOutcome::Rejected);
        assert!(controller.is_submitting());
        assert_eq!(controller.reset_at(), None);
    }

    #[test]
    fn disposed_controller_ignores_late_results() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "Jo", "jo@example.com", "hi");
        controller.submit(0);
        controller.dispose();
        controller.complete(Ok(()), 10);
        assert_eq!(controller.state(), &SubmissionState::Submitting);
        assert!(!controller.tick(1_000_000));
    }

    #[test]
    fn resubmit_after_error_window() {
        let mut controller = ContactFormController::new(Some(config()));
        filled(&mut controller, "Jo", "nope", "hi");
        controller.submit(0);
        controller.set_field(Field::Email, "jo@example.com".into());
        controller.tick(5000);
        assert!(matches!(controller.submit(5001), SubmitOutcome::Dispatched(_)));
    }
}
