use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timing::{Timed, SUBMIT_LATENCY, SUCCESS_DISPLAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn first_missing(&self) -> Option<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|f| self.field(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Failure reported by a delivery transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message delivery timed out")]
    Timeout,
    #[error("message rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("the {} field is required", .0.as_str())]
    MissingField(Field),
    #[error("a message is already being sent")]
    Busy,
    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// Delivers a contact message.
///
/// `send` is called when the message is handed over. The outcome is held back
/// until `latency` has passed, then it drives the form to success or error.
pub trait Transport {
    fn latency(&self) -> Duration;
    fn send(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Stand-in transport: records the message in the log and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn latency(&self) -> Duration {
        SUBMIT_LATENCY
    }

    fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        match serde_json::to_string(message) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(e) => log::warn!("contact form submitted, payload not serializable: {e}"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Pending {
    resolves_at: Duration,
    outcome: Result<(), SubmitError>,
}

#[derive(Debug, Clone)]
pub struct ContactForm<T: Transport> {
    transport: T,
    draft: ContactMessage,
    state: FormState,
    last_error: Option<SubmitError>,
    pending: Option<Pending>,
    idle_at: Option<Duration>,
}

impl<T: Transport + Default> Default for ContactForm<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Transport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            draft: ContactMessage::default(),
            state: FormState::Idle,
            last_error: None,
            pending: None,
            idle_at: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// The submit control is disabled for the whole submitting phase.
    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Snapshot the draft and hand it to the transport.
    pub fn submit(&mut self, now: Duration) -> Result<ContactMessage, FormError> {
        if !self.can_submit() {
            return Err(FormError::Busy);
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(FormError::MissingField(field));
        }
        let snapshot = self.draft.clone();
        let outcome = self.transport.send(&snapshot);
        self.pending = Some(Pending {
            resolves_at: now + self.transport.latency(),
            outcome,
        });
        self.state = FormState::Submitting;
        self.last_error = None;
        self.idle_at = None;
        Ok(snapshot)
    }

    /// Apply a delivery outcome while submitting.
    ///
    /// Success clears the draft and schedules the return to idle. A failure
    /// keeps the draft so the visitor can retry; the form stays in `Error`
    /// until the next submit.
    pub fn resolve(&mut self, outcome: Result<(), SubmitError>, now: Duration) {
        if self.state != FormState::Submitting {
            return;
        }
        self.pending = None;
        match outcome {
            Ok(()) => {
                self.state = FormState::Success;
                self.draft = ContactMessage::default();
                self.idle_at = Some(now + SUCCESS_DISPLAY);
            }
            Err(e) => {
                log::warn!("contact form delivery failed: {e}");
                self.state = FormState::Error;
                self.last_error = Some(e);
            }
        }
    }

    /// Drop any in-flight delivery and scheduled reset.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.idle_at = None;
        if self.state == FormState::Submitting {
            self.state = FormState::Idle;
        }
    }
}

impl<T: Transport> Timed for ContactForm<T> {
    fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.resolves_at)
            .or(self.idle_at)
    }

    fn poll(&mut self, now: Duration) {
        if let Some(pending) = self.pending.take() {
            if pending.resolves_at > now {
                self.pending = Some(pending);
                return;
            }
            self.resolve(pending.outcome, pending.resolves_at);
        }
        if let Some(at) = self.idle_at {
            if at <= now {
                self.idle_at = None;
                self.state = FormState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn filled() -> ContactForm<SimulatedTransport> {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "A");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Message, "hi");
        form
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn latency(&self) -> Duration {
            ms(200)
        }

        fn send(&self, _: &ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Timeout)
        }
    }

    #[test]
    fn full_lifecycle() {
        let mut form = filled();
        let sent = form.submit(ms(0)).expect("submit should be accepted");
        assert_eq!(sent.name, "A");
        assert_eq!(sent.email, "a@b.com");
        assert_eq!(sent.message, "hi");
        assert_eq!(form.state(), FormState::Submitting);
        assert!(!form.can_submit());

        form.poll(ms(1499));
        assert_eq!(form.state(), FormState::Submitting);

        form.poll(ms(1500));
        assert_eq!(form.state(), FormState::Success);
        assert_eq!(form.draft(), &ContactMessage::default());
        assert_eq!(form.next_deadline(), Some(ms(4500)));

        form.poll(ms(4499));
        assert_eq!(form.state(), FormState::Success);
        form.poll(ms(4500));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn late_poll_runs_both_steps() {
        let mut form = filled();
        form.submit(ms(100)).expect("submit should be accepted");
        form.poll(ms(10_000));
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn resubmit_while_submitting_is_busy() {
        let mut form = filled();
        form.submit(ms(0)).expect("submit should be accepted");
        assert_eq!(form.submit(ms(10)), Err(FormError::Busy));
    }

    #[test]
    fn required_fields_block_submission() {
        let mut form = ContactForm::<SimulatedTransport>::default();
        form.set_field(Field::Name, "A");
        form.set_field(Field::Message, "hi");
        assert_eq!(
            form.submit(ms(0)),
            Err(FormError::MissingField(Field::Email))
        );
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn failed_delivery_lands_in_error_and_keeps_draft() {
        let mut form = ContactForm::new(FailingTransport);
        form.set_field(Field::Name, "A");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Message, "hi");
        form.submit(ms(0)).expect("submit should be accepted");
        form.poll(ms(200));
        assert_eq!(form.state(), FormState::Error);
        assert_eq!(form.last_error(), Some(&SubmitError::Timeout));
        assert_eq!(form.draft().name, "A");
        assert_eq!(form.next_deadline(), None);
        assert!(form.can_submit());
    }

    #[test]
    fn cancel_drops_pending_delivery() {
        let mut form = filled();
        form.submit(ms(0)).expect("submit should be accepted");
        form.cancel();
        form.poll(ms(5000));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.draft().name, "A");
    }

    #[test]
    fn missing_field_error_names_the_field() {
        assert_eq!(
            FormError::MissingField(Field::Message).to_string(),
            "the message field is required"
        );
    }
}
