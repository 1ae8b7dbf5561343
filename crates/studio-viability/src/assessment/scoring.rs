use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::AnswerSet;
use super::domain::TagSet;
use super::rule_table::{AnswerOption, RuleTable};

/// Raw totals collected from an answer set before any override rules run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub tags: TagSet,
    pub points: u32,
    pub hard_stop_triggered: bool,
}

/// Resolve every recorded answer against the table and sum points, tags and hard stops.
///
/// Unanswered questions contribute nothing. Ids the table does not know are skipped, a
/// single-select question counts only its first recognised option, and repeated option ids
/// within one question count once.
pub fn aggregate(table: &RuleTable, answers: &AnswerSet) -> Aggregate {
    let mut result = Aggregate::default();

    for (question_id, _) in answers.iter() {
        if table.question(question_id).is_none() {
            debug!(question_id, "ignoring answer for unknown question");
        }
    }

    for (question, option) in selected_options(table, answers) {
        if option.hard_stop {
            result.hard_stop_triggered = true;
        }
        result.points = result.points.saturating_add(option.points);
        result.tags.extend(option.tags.iter().copied());
        debug!(
            question_id = question,
            option_id = option.id,
            points = option.points,
            "counted answer"
        );
    }

    result
}

/// Selected options in table order, paired with their question id.
pub(crate) fn selected_options<'t>(
    table: &'t RuleTable,
    answers: &AnswerSet,
) -> Vec<(&'static str, &'t AnswerOption)> {
    let mut picked = Vec::new();

    for question in table.questions() {
        let mut counted: Vec<&str> = Vec::new();
        for option_id in answers.selected(question.id) {
            if !question.multiple && !counted.is_empty() {
                debug!(
                    question_id = question.id,
                    option_id = option_id.as_str(),
                    "ignoring extra answer on single-select question"
                );
                break;
            }
            let Some(option) = question.option(option_id) else {
                debug!(
                    question_id = question.id,
                    option_id = option_id.as_str(),
                    "ignoring unknown option"
                );
                continue;
            };
            if counted.contains(&option.id) {
                continue;
            }
            counted.push(option.id);
            picked.push((question.id, option));
        }
    }

    picked
}
