//! Contact form: validation, optional mail delivery, simulated fallback.

use leptos::prelude::*;

use crate::net::mail::Mailer;
use crate::state::contact::{self, AttemptCounter, SendOutcome, SubmitPhase};

/// Signal-backed [`contact::SubmitEffects`] host: phase and field updates go
/// to the form's signals, sleeps to a browser timer.
#[cfg(target_arch = "wasm32")]
struct FormEffects {
    phase: RwSignal<SubmitPhase>,
    attempts: RwSignal<AttemptCounter>,
    attempt: contact::AttemptId,
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
}

#[cfg(target_arch = "wasm32")]
impl contact::SubmitEffects for FormEffects {
    fn set_phase(&mut self, phase: SubmitPhase) {
        self.phase.set(phase);
    }

    fn clear_fields(&mut self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.message.set(String::new());
    }

    fn attempt_is_current(&self) -> bool {
        self.attempts.get_untracked().is_current(self.attempt)
    }

    async fn sleep_ms(&mut self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Contact form driving the submission state machine.
///
/// Each submit takes a fresh attempt id; the delayed status clear scheduled
/// after a successful send applies only while its attempt is still the
/// latest, so rapid double-submits cannot blank each other's status line.
#[component]
pub fn ContactForm() -> impl IntoView {
    // Mail capability is resolved once; absence routes to the simulated send.
    let mailer = StoredValue::new(Mailer::detect());

    let phase = RwSignal::new(SubmitPhase::Idle);
    let attempts = RwSignal::new(AttemptCounter::default());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(attempt) = attempts.try_update(AttemptCounter::begin) else {
            return;
        };
        phase.set(SubmitPhase::Sending);

        let validated = contact::validate(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        let msg = match validated {
            Ok(msg) => msg,
            Err(_) => {
                phase.set(SubmitPhase::Invalid);
                return;
            }
        };

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let outcome = match mailer.get_value() {
                Some(mailer) => match mailer.send(&msg).await {
                    Ok(()) => SendOutcome::Delivered,
                    Err(err) => {
                        log::error!("mail send failed: {err}");
                        SendOutcome::Failed
                    }
                },
                None => SendOutcome::Simulated,
            };

            let mut effects = FormEffects {
                phase,
                attempts,
                attempt,
                name,
                email,
                message,
            };
            contact::settle_submission(&mut effects, outcome).await;
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (attempt, msg, mailer, SendOutcome::Simulated);
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <label>
                "Name"
                <input
                    name="name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    name="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Message"
                <textarea
                    name="message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit">
                "Send Message"
            </button>
            <p id="form-status" class="contact-form__status" role="status" aria-live="polite">
                {move || phase.get().status_text()}
            </p>
        </form>
    }
}
