// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{AskRequest, AskResponse, ClientError, EvaluatorClient};

/// `reqwest`-backed client for the evaluator API.
pub struct HttpEvaluatorClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEvaluatorClient {
    /// Build a client for `base_url` (trailing slashes stripped).
    /// `timeout_secs == 0` disables the request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl EvaluatorClient for HttpEvaluatorClient {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, ClientError> {
        let url = format!("{}/ask", self.base_url);
        debug!(%url, len = question.len(), "submitting question");

        let resp = self
            .client
            .post(&url)
            .json(&AskRequest { question: question.to_string() })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "evaluator returned non-success status");
            return Err(ClientError::Status { status });
        }

        // Decode from the full body text rather than `resp.json()` so that a
        // malformed payload maps to `Decode`, distinct from network failures.
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
