use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rule_table::{Question, RuleTable};

/// Answer recorded for one question. JSON accepts `null`, a string, or an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    #[default]
    Unanswered,
    Single(String),
    Multiple(Vec<String>),
}

impl Selection {
    pub fn ids(&self) -> &[String] {
        match self {
            Selection::Unanswered => &[],
            Selection::Single(id) => std::slice::from_ref(id),
            Selection::Multiple(ids) => ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("required questions unanswered: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question}' has no option '{option}'")]
    UnknownOption { question: String, option: String },
}

/// Per-session answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, Selection>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user pick. Single-select questions replace the previous pick; multiple-select
    /// questions toggle the option in or out.
    pub fn select(&mut self, question: &Question, option_id: &str) -> Result<(), AnswerError> {
        if question.option(option_id).is_none() {
            return Err(AnswerError::UnknownOption {
                question: question.id.to_string(),
                option: option_id.to_string(),
            });
        }

        if !question.multiple {
            self.entries.insert(
                question.id.to_string(),
                Selection::Single(option_id.to_string()),
            );
            return Ok(());
        }

        let mut picked = self.selected(question.id).to_vec();
        if let Some(position) = picked.iter().position(|id| id == option_id) {
            picked.remove(position);
        } else {
            picked.push(option_id.to_string());
        }
        self.entries
            .insert(question.id.to_string(), Selection::Multiple(picked));
        Ok(())
    }

    /// Resolve the question by id first, then behave like [`AnswerSet::select`].
    pub fn select_by_id(
        &mut self,
        table: &RuleTable,
        question_id: &str,
        option_id: &str,
    ) -> Result<(), AnswerError> {
        let question = table
            .question(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;
        self.select(question, option_id)
    }

    /// Store a raw selection without checking it against a rule table.
    pub fn set(&mut self, question_id: impl Into<String>, selection: Selection) {
        self.entries.insert(question_id.into(), selection);
    }

    pub fn clear(&mut self, question_id: &str) {
        self.entries.remove(question_id);
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn selected(&self, question_id: &str) -> &[String] {
        self.entries
            .get(question_id)
            .map(Selection::ids)
            .unwrap_or(&[])
    }

    pub fn is_answered(&self, question: &Question) -> bool {
        let picked = self.selected(question.id);
        if question.multiple {
            !picked.is_empty()
        } else {
            picked.len() == 1
        }
    }

    pub fn missing_required(&self, table: &RuleTable) -> Vec<&'static str> {
        table
            .questions()
            .iter()
            .filter(|question| question.required && !self.is_answered(question))
            .map(|question| question.id)
            .collect()
    }

    pub fn ensure_complete(&self, table: &RuleTable) -> Result<(), AnswerError> {
        let missing = self.missing_required(table);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnswerError::Incomplete { missing })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries
            .iter()
            .map(|(question_id, selection)| (question_id.as_str(), selection))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<Selection>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(question_id, selection)| (question_id.into(), selection.into()))
                .collect(),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::Single(value.to_string())
    }
}

impl From<Vec<&str>> for Selection {
    fn from(value: Vec<&str>) -> Self {
        Selection::Multiple(value.into_iter().map(str::to_string).collect())
    }
}
