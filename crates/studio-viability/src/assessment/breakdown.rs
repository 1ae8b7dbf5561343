use std::collections::HashSet;

use serde::Serialize;

use super::answers::AnswerSet;
use super::domain::{ImpactLevel, Tag};
use super::rule_table::{AnswerOption, RuleTable};
use super::scoring::selected_options;

const PRIMARY_CONSTRAINT_LIMIT: usize = 3;
/// Impact rank from which an answer counts as a constraint.
const PRIMARY_CONSTRAINT_MIN_RANK: u8 = 2;

/// One of the biggest drivers behind a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintHighlight {
    pub question_id: &'static str,
    pub question_title: &'static str,
    pub option_id: &'static str,
    pub option_label: &'static str,
    pub impact: ImpactLevel,
    pub points: u32,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionReview {
    pub option_id: &'static str,
    pub label: &'static str,
    pub impact: ImpactLevel,
    pub interpretation: &'static str,
}

/// Review row for a single question, present even when unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    pub question_id: &'static str,
    pub question_title: &'static str,
    pub max_impact: ImpactLevel,
    pub selections: Vec<OptionReview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsBreakdown {
    pub primary_constraints: Vec<ConstraintHighlight>,
    pub answers: Vec<AnswerReview>,
}

pub(crate) fn build(table: &RuleTable, answers: &AnswerSet) -> ResultsBreakdown {
    let picked = selected_options(table, answers);

    let reviews = table
        .questions()
        .iter()
        .map(|question| {
            let selections: Vec<OptionReview> = picked
                .iter()
                .filter(|(question_id, _)| *question_id == question.id)
                .map(|(_, option)| OptionReview {
                    option_id: option.id,
                    label: option.label,
                    impact: option.impact,
                    interpretation: option.interpretation,
                })
                .collect();
            let max_impact = selections
                .iter()
                .map(|selection| selection.impact)
                .max()
                .unwrap_or(ImpactLevel::Supportive);
            AnswerReview {
                question_id: question.id,
                question_title: question.title,
                max_impact,
                selections,
            }
        })
        .collect();

    let mut candidates: Vec<(&'static str, &AnswerOption)> = picked
        .into_iter()
        .filter(|(_, option)| option.impact.rank() >= PRIMARY_CONSTRAINT_MIN_RANK)
        .collect();
    // Wood floors lead because they cap every other outcome.
    candidates.sort_by(|(_, a), (_, b)| {
        is_wood_floor(b)
            .cmp(&is_wood_floor(a))
            .then(b.impact.cmp(&a.impact))
            .then(b.points.cmp(&a.points))
    });

    let mut seen = HashSet::new();
    let primary_constraints = candidates
        .into_iter()
        .filter(|(question_id, _)| seen.insert(*question_id))
        .take(PRIMARY_CONSTRAINT_LIMIT)
        .filter_map(|(question_id, option)| {
            let question = table.question(question_id)?;
            Some(ConstraintHighlight {
                question_id,
                question_title: question.title,
                option_id: option.id,
                option_label: option.label,
                impact: option.impact,
                points: option.points,
                interpretation: option.interpretation,
            })
        })
        .collect();

    ResultsBreakdown {
        primary_constraints,
        answers: reviews,
    }
}

fn is_wood_floor(option: &AnswerOption) -> bool {
    option.tags.contains(&Tag::FloorWood)
}
