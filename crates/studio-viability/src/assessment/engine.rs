use std::sync::Arc;

use tracing::debug;

use super::answers::AnswerSet;
use super::breakdown::{self, ResultsBreakdown};
use super::config::AssessmentConfig;
use super::domain::{Light, Verdict, VerdictMeta};
use super::narrative;
use super::policy::{apply_hard_stop, dynamic_hard_stop, severity_from_points, RiskSignals};
use super::rule_table::RuleTable;
use super::scoring::aggregate;
use super::tier::classify_tier;

/// Stateless evaluator that applies the rule table and thresholds to an answer set.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    table: Arc<RuleTable>,
    config: AssessmentConfig,
}

impl AssessmentEngine {
    pub fn new(table: Arc<RuleTable>, config: AssessmentConfig) -> Self {
        Self { table, config }
    }

    /// Engine over the shared standard table with default thresholds.
    pub fn standard() -> Self {
        Self::new(RuleTable::shared(), AssessmentConfig::default())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Verdict {
        let totals = aggregate(&self.table, answers);
        let tier = classify_tier(&totals.tags);
        let signals = RiskSignals::from_tags(&totals.tags);

        let hard_stop = totals.hard_stop_triggered || dynamic_hard_stop(&signals, tier);
        let light = apply_hard_stop(
            severity_from_points(tier, totals.points, &self.config.thresholds),
            hard_stop,
        );

        debug!(
            points = totals.points,
            tier = tier.label(),
            explicit_hard_stop = totals.hard_stop_triggered,
            hard_stop,
            light = light.label(),
            "evaluated site assessment"
        );

        let narrative = narrative::compose(light, tier, &signals);
        let cta_label = match light {
            Light::Green => &self.config.cta.green,
            Light::Yellow => &self.config.cta.yellow,
            Light::Red => &self.config.cta.red,
        };

        Verdict {
            light,
            title: narrative.title.to_string(),
            summary: narrative.summary.to_string(),
            bullets: narrative.bullets,
            cta_label: cta_label.clone(),
            meta: VerdictMeta {
                points: totals.points,
                hard_stop_triggered: hard_stop,
                capability_tier: tier,
                tags: totals.tags,
            },
        }
    }

    pub fn breakdown(&self, answers: &AnswerSet) -> ResultsBreakdown {
        breakdown::build(&self.table, answers)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluate against the standard questionnaire and default thresholds.
pub fn evaluate(answers: &AnswerSet) -> Verdict {
    AssessmentEngine::standard().evaluate(answers)
}
