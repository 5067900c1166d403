//! Statistical-variable detection results
//!
//! Produced by the SV embedding service, which scores candidate statistical
//! variables against the query.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statquery_common::{metrics, AppError, Result};

/// Ranked statistical-variable candidates for one query.
///
/// `sv_dcids` and `sv_scores` are positionally aligned and ordered by
/// descending score; the ordering is a contract of the embedding service,
/// assumed (not re-checked) by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SVDetection {
    query: String,
    sv_dcids: Vec<String>,
    sv_scores: Vec<f64>,

    /// Supporting sentences per SV; keys need not cover every candidate.
    svs_to_sentences: HashMap<String, Vec<String>>,
}

impl SVDetection {
    /// Build an SV detection result.
    ///
    /// `sv_dcids` and `sv_scores` must have the same length.
    pub fn new(
        query: impl Into<String>,
        sv_dcids: Vec<String>,
        sv_scores: Vec<f64>,
        svs_to_sentences: HashMap<String, Vec<String>>,
    ) -> Result<Self> {
        if sv_dcids.len() != sv_scores.len() {
            metrics::record_validation_failure("sv_detection");
            return Err(AppError::Validation {
                message: format!(
                    "{} sv dcids but {} scores",
                    sv_dcids.len(),
                    sv_scores.len()
                ),
                field: Some("sv_scores".to_string()),
            });
        }

        Ok(Self {
            query: query.into(),
            sv_dcids,
            sv_scores,
            svs_to_sentences,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sv_dcids(&self) -> &[String] {
        &self.sv_dcids
    }

    pub fn sv_scores(&self) -> &[f64] {
        &self.sv_scores
    }

    /// Best-scoring candidate, if any.
    pub fn top_sv(&self) -> Option<(&str, f64)> {
        self.sv_dcids
            .first()
            .map(|dcid| (dcid.as_str(), self.sv_scores[0]))
    }

    /// Candidates at or above the score threshold, best first.
    pub fn candidates_above(&self, threshold: f64) -> Vec<(&str, f64)> {
        self.sv_dcids
            .iter()
            .zip(self.sv_scores.iter())
            .filter(|(_, score)| **score >= threshold)
            .map(|(dcid, score)| (dcid.as_str(), *score))
            .collect()
    }

    /// Sentences that matched the given SV; empty when none were recorded.
    pub fn sentences_for(&self, dcid: &str) -> &[String] {
        self.svs_to_sentences
            .get(dcid)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
