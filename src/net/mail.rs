//! Optional mail delivery for the contact form via the EmailJS HTTP API.
//!
//! The capability is resolved exactly once at startup: `Mailer::detect()`
//! yields `Some` only when all three identifiers below are configured.
//! With the placeholders left in place the form degrades to a simulated
//! send, so the site works out of the box with no account.
//!
//! ERROR HANDLING
//! ==============
//! Send failures surface as `MailError` for the form to report; nothing
//! here panics or retries.

#[cfg(test)]
#[path = "mail_test.rs"]
mod mail_test;

use crate::state::contact::ContactMessage;

/// EmailJS send endpoint.
const MAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Fill these in to enable real delivery.
const PUBLIC_KEY: &str = "YOUR_EMAILJS_PUBLIC_KEY";
const SERVICE_ID: &str = "YOUR_SERVICE_ID";
const TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";

/// Prefix shared by all unconfigured placeholder identifiers.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// A configured mail-sending capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mailer {
    public_key: &'static str,
    service_id: &'static str,
    template_id: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Request(String),
    #[error("mail service rejected the message: status {0}")]
    Rejected(u16),
    #[error("mail delivery is not available in this build")]
    Unavailable,
}

impl Mailer {
    /// Resolve the capability from the compiled-in identifiers.
    pub fn detect() -> Option<Self> {
        Self::from_ids(PUBLIC_KEY, SERVICE_ID, TEMPLATE_ID)
    }

    /// Build a mailer from explicit identifiers, rejecting empty or
    /// placeholder values.
    pub fn from_ids(
        public_key: &'static str,
        service_id: &'static str,
        template_id: &'static str,
    ) -> Option<Self> {
        let configured =
            |id: &str| !id.is_empty() && !id.starts_with(PLACEHOLDER_PREFIX);
        if configured(public_key) && configured(service_id) && configured(template_id) {
            Some(Self {
                public_key,
                service_id,
                template_id,
            })
        } else {
            None
        }
    }

    /// Request body for the EmailJS send endpoint.
    fn request_body(&self, msg: &ContactMessage) -> serde_json::Value {
        serde_json::json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": {
                "name": msg.name,
                "email": msg.email,
                "message": msg.message,
            },
        })
    }

    /// Deliver a validated message. Waits on the service indefinitely; the
    /// caller owns any user-facing timeout behavior (there is none).
    ///
    /// # Errors
    ///
    /// Returns `MailError` when the request cannot be made or the service
    /// rejects it.
    pub async fn send(&self, msg: &ContactMessage) -> Result<(), MailError> {
        #[cfg(target_arch = "wasm32")]
        {
            let response = gloo_net::http::Request::post(MAIL_ENDPOINT)
                .json(&self.request_body(msg))
                .map_err(|e| MailError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| MailError::Request(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(MailError::Rejected(response.status()))
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self.request_body(msg);
            Err(MailError::Unavailable)
        }
    }
}
