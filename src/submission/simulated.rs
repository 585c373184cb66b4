//! Simulated CRM used until a real webhook is configured

use super::error::SubmitError;
use super::traits::LeadSubmitter;
use crate::state::LeadSubmission;
use async_trait::async_trait;
use std::time::Duration;

/// Default artificial latency of the simulated CRM
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Accepts every lead after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl LeadSubmitter for SimulatedSubmitter {
    async fn submit(&self, lead: &LeadSubmission) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            lead_id = %lead.lead_id,
            page = %lead.page,
            "Lead sent to CRM (simulated)"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(payload) = serde_json::to_string(lead) {
                tracing::debug!(%payload, "Simulated CRM payload");
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("simulated CRM ({} ms)", self.delay.as_millis())
    }
}
