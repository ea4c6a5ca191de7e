// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Transport layer for the evaluation service.
//!
//! The service is consumed through a single operation: `POST {base_url}/ask`
//! with a JSON question, answered with the generated text plus the judge's
//! structured evaluation.  Everything else in the application treats this
//! crate as an opaque collaborator behind the [`EvaluatorClient`] trait, so
//! tests run against the scripted mocks without touching the network.
mod client;
mod error;
mod http;
mod mock;
mod types;

pub use client::EvaluatorClient;
pub use error::ClientError;
pub use http::HttpEvaluatorClient;
pub use mock::{sample_evaluation, MockClient, ScriptedClient};
pub use types::{AskRequest, AskResponse, EvalQuality, Evaluation, MetricsSummary};
