use super::*;

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_all_fields_present() {
    let msg = validate("Ada", "ada@example.com", "Hello there").expect("valid");
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.message, "Hello there");
}

#[test]
fn validate_trims_surrounding_whitespace() {
    let msg = validate("  Ada ", "\tada@example.com\n", " hi ").expect("valid");
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.message, "hi");
}

#[test]
fn validate_rejects_any_blank_field() {
    assert_eq!(
        validate("", "ada@example.com", "hi"),
        Err(ContactError::MissingField)
    );
    assert_eq!(validate("Ada", "   ", "hi"), Err(ContactError::MissingField));
    assert_eq!(
        validate("Ada", "ada@example.com", "\n"),
        Err(ContactError::MissingField)
    );
}

#[test]
fn validate_does_not_check_email_shape() {
    // Emptiness is the only rule; a malformed address still passes.
    assert!(validate("Ada", "not-an-email", "hi").is_ok());
}

// =============================================================
// SubmitPhase
// =============================================================

#[test]
fn phase_default_is_idle_with_empty_status() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    assert_eq!(SubmitPhase::Idle.status_text(), "");
}

#[test]
fn phase_status_lines() {
    assert_eq!(SubmitPhase::Sending.status_text(), "Sending...");
    assert_eq!(
        SubmitPhase::Invalid.status_text(),
        "Please complete all fields."
    );
    assert_eq!(
        SubmitPhase::Sent { simulated: true }.status_text(),
        "Message sent (simulated)."
    );
    assert_eq!(
        SubmitPhase::Sent { simulated: false }.status_text(),
        "Message sent \u{2014} thank you!"
    );
}

#[test]
fn only_sent_phases_schedule_a_status_clear() {
    assert_eq!(
        SubmitPhase::Sent { simulated: false }.clear_delay_ms(),
        Some(4_500)
    );
    assert_eq!(
        SubmitPhase::Sent { simulated: true }.clear_delay_ms(),
        Some(3_500)
    );
    assert_eq!(SubmitPhase::Idle.clear_delay_ms(), None);
    assert_eq!(SubmitPhase::Sending.clear_delay_ms(), None);
    assert_eq!(SubmitPhase::Invalid.clear_delay_ms(), None);
    assert_eq!(SubmitPhase::Failed.clear_delay_ms(), None);
}

#[test]
fn simulated_send_delay_matches_original_timing() {
    assert_eq!(SIMULATED_SEND_DELAY_MS, 900);
}

// =============================================================
// Submission driver
// =============================================================

/// What the driver asked its host to do, in order.
#[derive(Debug, PartialEq, Eq)]
enum Event {
    Phase(SubmitPhase),
    ClearFields,
    Sleep(u32),
}

/// Records effects instead of performing them; sleeps complete immediately.
struct Recorder {
    events: Vec<Event>,
    attempt_current: bool,
}

impl Recorder {
    fn new(attempt_current: bool) -> Self {
        Self {
            events: Vec::new(),
            attempt_current,
        }
    }
}

impl SubmitEffects for Recorder {
    fn set_phase(&mut self, phase: SubmitPhase) {
        self.events.push(Event::Phase(phase));
    }

    fn clear_fields(&mut self) {
        self.events.push(Event::ClearFields);
    }

    fn attempt_is_current(&self) -> bool {
        self.attempt_current
    }

    async fn sleep_ms(&mut self, ms: u32) {
        self.events.push(Event::Sleep(ms));
    }
}

#[test]
fn simulated_send_runs_delay_clear_success_then_status_reset() {
    let mut fx = Recorder::new(true);
    futures::executor::block_on(settle_submission(&mut fx, SendOutcome::Simulated));
    assert_eq!(
        fx.events,
        [
            Event::Sleep(900),
            Event::ClearFields,
            Event::Phase(SubmitPhase::Sent { simulated: true }),
            Event::Sleep(3_500),
            Event::Phase(SubmitPhase::Idle),
        ]
    );
}

#[test]
fn delivered_send_clears_fields_then_resets_status_after_delay() {
    let mut fx = Recorder::new(true);
    futures::executor::block_on(settle_submission(&mut fx, SendOutcome::Delivered));
    assert_eq!(
        fx.events,
        [
            Event::ClearFields,
            Event::Phase(SubmitPhase::Sent { simulated: false }),
            Event::Sleep(4_500),
            Event::Phase(SubmitPhase::Idle),
        ]
    );
}

#[test]
fn failed_send_keeps_fields_and_status() {
    let mut fx = Recorder::new(true);
    futures::executor::block_on(settle_submission(&mut fx, SendOutcome::Failed));
    assert_eq!(fx.events, [Event::Phase(SubmitPhase::Failed)]);
}

#[test]
fn stale_attempt_never_resets_a_newer_status() {
    // A second submission started during the clear delay; the stale
    // attempt's reset must be dropped.
    let mut fx = Recorder::new(false);
    futures::executor::block_on(settle_submission(&mut fx, SendOutcome::Simulated));
    assert_eq!(
        fx.events,
        [
            Event::Sleep(900),
            Event::ClearFields,
            Event::Phase(SubmitPhase::Sent { simulated: true }),
            Event::Sleep(3_500),
        ]
    );
}

// =============================================================
// Attempt counter
// =============================================================
// The original script never cancelled a pending status-clear timer, so a
// second submission could have its status blanked by the first attempt's
// timer. The counter below is the deliberate fix for that race.

#[test]
fn fresh_attempt_is_current() {
    let mut attempts = AttemptCounter::default();
    let id = attempts.begin();
    assert!(attempts.is_current(id));
}

#[test]
fn stale_attempt_does_not_clear_newer_status() {
    let mut attempts = AttemptCounter::default();
    let first = attempts.begin();
    let second = attempts.begin();
    assert!(!attempts.is_current(first));
    assert!(attempts.is_current(second));
}

#[test]
fn attempt_ids_are_distinct_across_submissions() {
    let mut attempts = AttemptCounter::default();
    let a = attempts.begin();
    let b = attempts.begin();
    assert_ne!(a, b);
}
