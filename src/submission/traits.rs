//! Trait abstraction for the submission collaborator to enable mocking in tests

use super::error::SubmitError;
use crate::state::LeadSubmission;
use async_trait::async_trait;

/// Receives validated leads on behalf of the CRM
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver one lead; resolves once the CRM has accepted or refused it
    async fn submit(&self, lead: &LeadSubmission) -> Result<(), SubmitError>;

    /// Short human-readable description for logs and the status bar
    fn describe(&self) -> String;
}
