use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::EmailConfig;

use super::domain::ContactDraft;

pub const NO_CV_ATTACHED: &str = "No CV attached";

/// Template variables rendered by the contact email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub service: String,
    pub cv_name: String,
}

impl From<&ContactDraft> for ContactMessage {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            from_name: draft.name.clone(),
            from_email: draft.email.clone(),
            message: draft.message.clone(),
            kind: draft.kind.as_str().to_string(),
            service: draft
                .service
                .map(|service| service.as_str().to_string())
                .unwrap_or_default(),
            cv_name: draft
                .cv
                .as_ref()
                .map(|cv| cv.file_name.clone())
                .unwrap_or_else(|| NO_CV_ATTACHED.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("email delivery request failed: {0}")]
    Network(String),
    #[error("email provider rejected the message with status {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Delivery channel for contact form messages.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn dispatch(&self, message: &ContactMessage) -> Result<(), DispatchError>;
}

/// Request body understood by EmailJS's REST send endpoint.
#[derive(Debug, Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Sends contact messages through EmailJS. The bytes of an attached CV are never uploaded,
/// only its file name travels in the template.
pub struct EmailJsDispatcher {
    client: Client,
    config: EmailConfig,
}

impl EmailJsDispatcher {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsDispatcher {
    async fn dispatch(&self, message: &ContactMessage) -> Result<(), DispatchError> {
        let payload = EmailJsPayload {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        debug!(
            endpoint = %self.config.endpoint,
            contact_type = %message.kind,
            "sending contact message via EmailJS"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| DispatchError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("contact message accepted by EmailJS");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DispatchError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }
}
