//! Email delivery backends.

use std::time::Duration;

use bn_config::ContactConfig;
use serde::Serialize;
use tracing::info;
use ureq::Agent;

use crate::error::DeliveryError;
use crate::form::ContactForm;

/// Path of the send endpoint below the API base URL.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Delivers a validated contact form.
///
/// Implementations block; callers run them off the async executor.
pub trait EmailSender: Send + Sync {
    /// Send one message.
    fn send(&self, form: &ContactForm) -> Result<(), DeliveryError>;
}

/// Client for an EmailJS-compatible REST API.
pub struct EmailJsSender {
    agent: Agent,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

impl EmailJsSender {
    /// Create a sender from the `[contact]` section.
    #[must_use]
    pub fn from_config(config: &ContactConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.api_url.trim_end_matches('/').to_owned(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.base_url)
    }

    fn request<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: form,
        }
    }
}

impl EmailSender for EmailJsSender {
    fn send(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        let url = self.endpoint();

        info!(template = %self.template_id, "Sending contact message");

        let response = self
            .agent
            .post(&url)
            .header("Accept", "text/plain, application/json")
            .send_json(self.request(form))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(DeliveryError::HttpResponse { status, body });
        }

        info!(status, "Contact message accepted");
        Ok(())
    }
}
