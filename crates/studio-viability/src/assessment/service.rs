use serde::{Deserialize, Serialize};
use tracing::info;

use super::answers::{AnswerError, AnswerSet};
use super::breakdown::ResultsBreakdown;
use super::domain::Verdict;
use super::engine::AssessmentEngine;
use super::rule_table::RuleTable;

pub const DEFAULT_BOOKING_URL: &str = "https://www.soundproofyourstudio.com/Step1";

/// Submitted questionnaire plus presentation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub require_complete: bool,
    #[serde(default)]
    pub include_breakdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ResultsBreakdown>,
    pub booking_url: String,
}

/// Service pairing the engine with the outbound booking link.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    engine: AssessmentEngine,
    booking_url: String,
}

impl AssessmentService {
    pub fn new(engine: AssessmentEngine, booking_url: impl Into<String>) -> Self {
        Self {
            engine,
            booking_url: booking_url.into(),
        }
    }

    pub fn questions(&self) -> &RuleTable {
        self.engine.table()
    }

    pub fn booking_url(&self) -> &str {
        &self.booking_url
    }

    pub fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AnswerError> {
        let AssessmentRequest {
            answers,
            require_complete,
            include_breakdown,
        } = request;

        if require_complete {
            answers.ensure_complete(self.engine.table())?;
        }

        let verdict = self.engine.evaluate(&answers);
        info!(
            light = verdict.light.label(),
            points = verdict.meta.points,
            tier = verdict.meta.capability_tier.label(),
            "assessment completed"
        );

        let breakdown = include_breakdown.then(|| self.engine.breakdown(&answers));

        Ok(AssessmentReport {
            verdict,
            breakdown,
            booking_url: self.booking_url.clone(),
        })
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::new(AssessmentEngine::standard(), DEFAULT_BOOKING_URL)
    }
}
