use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::{AnswerSet, RuleTable, Selection};

/// Every question answered with its most supportive option.
pub(super) fn supportive_answers() -> AnswerSet {
    let mut answers: AnswerSet = [
        ("context_location", "detached"),
        ("floor_type", "slab"),
        ("ceiling_height", "h_9plus"),
        ("above_space", "attic"),
        ("neighbors", "no_one"),
        ("time_of_use", "day"),
        ("expectation", "not_notice"),
        ("mods", "yes"),
        ("ventilation", "vent_yes"),
        ("budget", "b_50plus"),
        ("mindset", "reconsider"),
    ]
    .into_iter()
    .collect();
    answers.set("use_cases", Selection::from(vec!["voice"]));
    answers
}

/// Supportive answers with the listed questions overridden.
pub(super) fn answers_with(overrides: &[(&str, &str)]) -> AnswerSet {
    let mut answers = supportive_answers();
    for (question_id, option_id) in overrides {
        answers.set(*question_id, Selection::from(*option_id));
    }
    answers
}

pub(super) fn drum_answers(floor: &str, neighbors: &str, time_of_use: &str) -> AnswerSet {
    let mut answers = answers_with(&[
        ("floor_type", floor),
        ("neighbors", neighbors),
        ("time_of_use", time_of_use),
    ]);
    answers.set("use_cases", Selection::from(vec!["drums"]));
    answers
}

pub(super) fn hard_stop_options(table: &RuleTable) -> Vec<(&'static str, &'static str)> {
    table
        .questions()
        .iter()
        .flat_map(|question| {
            question
                .options
                .iter()
                .filter(|option| option.hard_stop)
                .map(move |option| (question.id, option.id))
        })
        .collect()
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
