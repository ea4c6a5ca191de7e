// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use async_trait::async_trait;

use crate::{AskResponse, ClientError};

/// The one operation the application needs from the evaluation service.
///
/// Implemented by [`crate::HttpEvaluatorClient`] for production and by the
/// mocks in [`crate::mock`] for tests.
#[async_trait]
pub trait EvaluatorClient: Send + Sync {
    /// Display label for the status bar (host or configured name).
    fn endpoint(&self) -> &str;

    /// Submit a question and return the answer plus its evaluation.
    async fn ask(&self, question: &str) -> Result<AskResponse, ClientError>;
}
