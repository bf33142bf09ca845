#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Delay before a simulated send reports success.
pub const SIMULATED_SEND_DELAY_MS: u32 = 900;
/// How long the real-send thank-you message stays on screen.
pub const SENT_STATUS_CLEAR_MS: u32 = 4_500;
/// How long the simulated success message stays on screen.
pub const SIMULATED_STATUS_CLEAR_MS: u32 = 3_500;

/// Lifecycle of one contact-form submission.
///
/// `Idle -> Sending -> (Invalid | Sent | Failed)`; validation happens
/// synchronously inside the `Sending` transition, so `Invalid` is reached
/// before any network work starts. `Invalid` and `Failed` are sticky until
/// the next attempt; `Sent` clears back to `Idle` after a fixed delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Invalid,
    Sent {
        simulated: bool,
    },
    Failed,
}

impl SubmitPhase {
    /// Status line shown in `#form-status` for this phase.
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sending => "Sending...",
            Self::Invalid => "Please complete all fields.",
            Self::Sent { simulated: false } => "Message sent \u{2014} thank you!",
            Self::Sent { simulated: true } => "Message sent (simulated).",
            Self::Failed => "Send failed. Check mail configuration.",
        }
    }

    /// Delay after which the status line is cleared, for phases that clear.
    pub fn clear_delay_ms(self) -> Option<u32> {
        match self {
            Self::Sent { simulated: false } => Some(SENT_STATUS_CLEAR_MS),
            Self::Sent { simulated: true } => Some(SIMULATED_STATUS_CLEAR_MS),
            Self::Idle | Self::Sending | Self::Invalid | Self::Failed => None,
        }
    }
}

/// A validated, trimmed contact message ready to hand to the mailer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("all fields are required")]
    MissingField,
}

/// Trim all three fields and reject the attempt if any is empty. This is the
/// only validation the form performs.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactMessage, ContactError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingField);
    }
    Ok(ContactMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

/// How one attempt's mail step concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Mail capability present and the send succeeded.
    Delivered,
    /// Mail capability present and the send failed; fields are kept.
    Failed,
    /// No mail capability; a send is simulated after a fixed delay.
    Simulated,
}

/// Side effects one submission attempt needs from its host. The form
/// implements this over its signals and a browser timer; tests implement it
/// with a scripted recorder.
#[allow(async_fn_in_trait)]
pub trait SubmitEffects {
    fn set_phase(&mut self, phase: SubmitPhase);
    fn clear_fields(&mut self);
    /// Whether this attempt is still the latest one.
    fn attempt_is_current(&self) -> bool;
    async fn sleep_ms(&mut self, ms: u32);
}

/// Drive an attempt from the end of its mail step to rest.
///
/// Applies the terminal phase for `outcome` (including the simulated send's
/// delay and field clearing), then, for phases that clear, waits out the
/// status-clear delay and resets to `Idle` — unless a newer attempt has
/// started in the meantime, in which case the stale clear is dropped.
pub async fn settle_submission<E: SubmitEffects>(effects: &mut E, outcome: SendOutcome) {
    let terminal = match outcome {
        SendOutcome::Simulated => {
            effects.sleep_ms(SIMULATED_SEND_DELAY_MS).await;
            effects.clear_fields();
            SubmitPhase::Sent { simulated: true }
        }
        SendOutcome::Delivered => {
            effects.clear_fields();
            SubmitPhase::Sent { simulated: false }
        }
        SendOutcome::Failed => SubmitPhase::Failed,
    };
    effects.set_phase(terminal);

    if let Some(delay) = terminal.clear_delay_ms() {
        effects.sleep_ms(delay).await;
        if effects.attempt_is_current() {
            effects.set_phase(SubmitPhase::Idle);
        }
    }
}

/// Identifies one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Monotonic counter over submission attempts.
///
/// A status-clear timer records the attempt it was scheduled for and is
/// dropped if a newer attempt has started by the time it fires, so two
/// overlapping submissions can never race to blank each other's status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttemptCounter(u64);

impl AttemptCounter {
    /// Start a new attempt, invalidating all earlier ones.
    pub fn begin(&mut self) -> AttemptId {
        self.0 += 1;
        AttemptId(self.0)
    }

    /// Whether `id` is still the latest attempt.
    pub fn is_current(self, id: AttemptId) -> bool {
        self.0 == id.0
    }
}
