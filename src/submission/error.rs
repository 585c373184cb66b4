//! Submission error types

use thiserror::Error;

/// Why a lead did not reach the CRM
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never got a response (DNS, connect, timeout, TLS)
    #[error("could not reach CRM webhook: {0}")]
    Transport(#[from] reqwest::Error),

    /// The CRM answered with a non-success status
    #[error("CRM webhook rejected lead with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The submission task ended without reporting a result
    #[error("submission interrupted before completion")]
    Interrupted,
}
