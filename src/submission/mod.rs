//! Submission collaborators that deliver leads to the CRM

mod error;
mod simulated;
mod traits;
mod webhook;

pub use error::SubmitError;
pub use simulated::{SimulatedSubmitter, DEFAULT_SIMULATED_DELAY};
pub use traits::LeadSubmitter;
pub use webhook::{WebhookSubmitter, DEFAULT_REQUEST_TIMEOUT};

#[cfg(test)]
pub use traits::MockLeadSubmitter;

use crate::config::Settings;
use anyhow::Result;
use std::sync::Arc;

/// Pick the collaborator for the resolved settings: the webhook when a URL
/// is configured, the simulated CRM otherwise
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn LeadSubmitter>> {
    let submitter: Arc<dyn LeadSubmitter> = match &settings.webhook_url {
        Some(url) => {
            let mut webhook = WebhookSubmitter::new(url.clone(), settings.request_timeout)?;
            if let Some(token) = &settings.webhook_token {
                webhook = webhook.with_token(token.clone());
            }
            Arc::new(webhook)
        }
        None => Arc::new(SimulatedSubmitter::new(settings.simulated_delay)),
    };

    tracing::info!(submitter = %submitter.describe(), "Submission collaborator selected");
    Ok(submitter)
}
