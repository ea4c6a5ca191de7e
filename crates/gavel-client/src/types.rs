// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Wire schema for the `/ask` contract.
//!
//! The service is loosely typed on its side: numeric fields and the list
//! fields may be missing from a response.  Every such field defaults here
//! (numbers to 0, sequences to empty) so a sparse payload still decodes.

use serde::{Deserialize, Serialize};

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Successful response body: the generated answer plus the judge's verdict.
///
/// `evaluation` is optional: a response that carries only an answer still
/// decodes, and the UI renders the exchange without a scorecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub evaluation: Option<Evaluation>,
}

/// Overall judgement attached to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvalQuality {
    Good,
    Bad,
    /// The judge itself failed; only `reasoning` is meaningful.
    Error,
}

/// Structured judge output for one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Overall quality score, 0–10.
    #[serde(default)]
    pub score: f64,
    pub quality: EvalQuality,
    #[serde(default)]
    pub content_depth: f64,
    #[serde(default)]
    pub actionability: f64,
    #[serde(default)]
    pub clarity: f64,
    #[serde(default)]
    pub comprehensiveness: f64,
    /// Judge self-reported confidence, 0–10.  Older service builds emit this
    /// as `judge_confidence`.
    #[serde(default, alias = "judge_confidence")]
    pub confidence: f64,
    /// Free-text explanation.  The only field rendered when
    /// `quality = ERROR`.
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_elements: Vec<String>,
    /// Objective NLP metrics backing the verdict, when computed.
    #[serde(default)]
    pub metrics_summary: Option<MetricsSummary>,
    /// Name of the judging model, e.g. "Gemini Judge".
    #[serde(default)]
    pub judge_model: Option<String>,
    /// Human-readable method label, e.g. "LLM-as-a-Judge + NLP Metrics".
    #[serde(default)]
    pub evaluation_method: Option<String>,
}

/// Similarity / ROUGE / BLEU summary, all values in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    #[serde(default)]
    pub overall_similarity: f64,
    #[serde(default)]
    pub rouge1_fmeasure: f64,
    #[serde(default, rename = "rougeL_fmeasure")]
    pub rouge_l_fmeasure: f64,
    #[serde(default)]
    pub bleu_score: f64,
    #[serde(default)]
    pub interpretation: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
