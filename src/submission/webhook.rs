//! CRM webhook client
//!
//! Posts each lead as a JSON document to a configured HTTP(S) endpoint.

use super::error::SubmitError;
use super::traits::LeadSubmitter;
use crate::state::LeadSubmission;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Default request timeout for the webhook
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest response body kept in a rejection error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Delivers leads to a CRM webhook over HTTP
#[derive(Debug, Clone)]
pub struct WebhookSubmitter {
    client: Client,
    url: Url,
    token: Option<String>,
}

impl WebhookSubmitter {
    /// Build a webhook client with the given request timeout
    pub fn new(url: Url, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("oduo-leads/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url,
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every lead
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl LeadSubmitter for WebhookSubmitter {
    async fn submit(&self, lead: &LeadSubmission) -> Result<(), SubmitError> {
        let mut request = self
            .client
            .post(self.url.clone())
            .header("Idempotency-Key", lead.lead_id.to_string())
            .json(lead);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|error| {
            tracing::warn!(lead_id = %lead.lead_id, %error, "CRM webhook request failed");
            SubmitError::from(error)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(lead_id = %lead.lead_id, page = %lead.page, %status, "Lead sent to CRM");
            return Ok(());
        }

        // Body is diagnostic only; the status decides the outcome
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(lead_id = %lead.lead_id, %status, "CRM webhook rejected lead");
        check_status(status, &body)
    }

    fn describe(&self) -> String {
        format!("CRM webhook {}", self.url)
    }
}

/// Map a webhook response status to the submission result
pub fn check_status(status: StatusCode, body: &str) -> Result<(), SubmitError> {
    if status.is_success() {
        return Ok(());
    }
    Err(SubmitError::Rejected {
        status: status.as_u16(),
        body: body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}
