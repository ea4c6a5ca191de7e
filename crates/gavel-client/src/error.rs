// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

/// Transport failure taxonomy.
///
/// Every variant is recovered at the application boundary and surfaced as a
/// transient, dismissible message; none of them corrupts stored state.  A
/// payload whose `quality` is `ERROR` is *not* a `ClientError` — that is a
/// successful response whose content says the judge failed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Build a `Status` error from a bare code.  Mainly useful for scripted
    /// tests in crates that do not depend on `reqwest` themselves.
    pub fn from_status_code(code: u16) -> Self {
        ClientError::Status {
            status: reqwest::StatusCode::from_u16(code)
                .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Generic user-facing message for the transient error surface.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(_) => {
                "Failed to reach the evaluation service. Please check your connection.".into()
            }
            ClientError::Status { status } => {
                format!("The evaluation service returned an error (HTTP {status}).")
            }
            ClientError::Decode(_) => {
                "The evaluation service returned an unreadable response.".into()
            }
        }
    }
}
