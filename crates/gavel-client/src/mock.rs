// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AskResponse, ClientError, EvalQuality, Evaluation, EvaluatorClient};

/// A plausible GOOD evaluation for use in tests and mock responses.
pub fn sample_evaluation() -> Evaluation {
    Evaluation {
        score: 8.0,
        quality: EvalQuality::Good,
        content_depth: 8.0,
        actionability: 7.0,
        clarity: 9.0,
        comprehensiveness: 7.0,
        confidence: 8.0,
        reasoning: "Clear and actionable.".into(),
        strengths: vec!["specific suggestions".into()],
        missing_elements: Vec::new(),
        metrics_summary: None,
        judge_model: Some("Mock Judge".into()),
        evaluation_method: None,
    }
}

/// Deterministic mock client for tests.  Echoes the question back as the
/// answer with a fixed GOOD evaluation.
#[derive(Default)]
pub struct MockClient;

#[async_trait]
impl EvaluatorClient for MockClient {
    fn endpoint(&self) -> &str {
        "mock"
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, ClientError> {
        Ok(AskResponse {
            answer: format!("MOCK: {question}"),
            evaluation: Some(sample_evaluation()),
        })
    }
}

/// A pre-scripted mock.  Each `ask` call pops the next outcome from the
/// front of the queue, letting tests specify exact success/failure sequences
/// without network access.  Panics when the script runs dry — a test that
/// asks more often than it scripted is a bug in the test.
pub struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<AskResponse, ClientError>>>,
    /// The most recent question seen, for test inspection.
    pub last_question: Mutex<Option<String>>,
}

impl ScriptedClient {
    pub fn new(outcomes: Vec<Result<AskResponse, ClientError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            last_question: Mutex::new(None),
        }
    }

    /// Shorthand: a script of successful `{answer, sample evaluation}` pairs.
    pub fn answering(answers: &[&str]) -> Self {
        Self::new(
            answers
                .iter()
                .map(|a| {
                    Ok(AskResponse {
                        answer: (*a).to_string(),
                        evaluation: Some(sample_evaluation()),
                    })
                })
                .collect(),
        )
    }
}

#[async_trait]
impl EvaluatorClient for ScriptedClient {
    fn endpoint(&self) -> &str {
        "scripted-mock"
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, ClientError> {
        *self.last_question.lock().unwrap() = Some(question.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedClient: script exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_echoes_question() {
        let resp = MockClient.ask("what is a retro?").await.unwrap();
        assert!(resp.answer.contains("what is a retro?"));
        assert_eq!(resp.evaluation.unwrap().quality, EvalQuality::Good);
    }

    #[tokio::test]
    async fn scripted_client_pops_in_order_and_records_question() {
        let client = ScriptedClient::answering(&["first", "second"]);
        assert_eq!(client.ask("q1").await.unwrap().answer, "first");
        assert_eq!(client.ask("q2").await.unwrap().answer, "second");
        assert_eq!(client.last_question.lock().unwrap().as_deref(), Some("q2"));
    }
}
