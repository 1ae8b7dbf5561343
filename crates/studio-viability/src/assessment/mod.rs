//! Site viability assessment: rule table, answer handling, scoring, and verdicts.
//!
//! Evaluation is a pure function of the rule table, the thresholds, and the submitted
//! answers. Nothing is stored between calls.

pub mod answers;
mod breakdown;
mod config;
pub mod domain;
mod engine;
mod narrative;
mod policy;
pub mod router;
pub mod rule_table;
mod scoring;
pub mod service;
mod tier;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, AnswerSet, Selection};
pub use breakdown::{AnswerReview, ConstraintHighlight, OptionReview, ResultsBreakdown};
pub use config::{AssessmentConfig, CallToAction, VerdictThresholds};
pub use domain::{CapabilityTier, ImpactLevel, Light, Tag, TagSet, Verdict, VerdictMeta};
pub use engine::{evaluate, AssessmentEngine};
pub use policy::{apply_hard_stop, dynamic_hard_stop, severity_from_points, RiskSignals};
pub use router::assessment_router;
pub use rule_table::{AnswerOption, Question, RuleTable, RuleTableError, HARD_STOP_POINTS};
pub use scoring::{aggregate, Aggregate};
pub use service::{AssessmentReport, AssessmentRequest, AssessmentService, DEFAULT_BOOKING_URL};
pub use tier::classify_tier;
