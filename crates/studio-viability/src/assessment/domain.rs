use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Correlation tokens attached to answer options.
///
/// The serialized form matches the tokens used by the published questionnaire so stored
/// answer exports and audit payloads stay readable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Detached,
    Attached,
    InsideHouse,
    SharedBuilding,
    FloorSlab,
    FloorWood,
    #[serde(rename = "floor_crawl")]
    FloorCrawlspace,
    FloorLivingBelow,
    HeightGreen,
    HeightYellow,
    HeightTooLow,
    AboveAttic,
    AboveLiving,
    AboveOtherUnit,
    NeighborsNone,
    NeighborsFamily,
    NeighborsNear,
    NeighborsVeryClose,
    #[serde(rename = "src_voice")]
    SourceVoice,
    #[serde(rename = "src_acoustic")]
    SourceAcoustic,
    #[serde(rename = "src_amps")]
    SourceAmps,
    #[serde(rename = "src_drums")]
    SourceDrums,
    TimeDay,
    TimeEvening,
    TimeLate,
    TimeOvernight,
    #[serde(rename = "exp_reasonable")]
    ExpectationReasonable,
    #[serde(rename = "exp_some_compromise")]
    ExpectationSomeCompromise,
    #[serde(rename = "exp_unrealistic")]
    ExpectationUnrealistic,
    ModsOk,
    ModsLimited,
    ModsNone,
    #[serde(rename = "vent_ok")]
    VentilationOk,
    #[serde(rename = "vent_limited")]
    VentilationLimited,
    #[serde(rename = "vent_none")]
    VentilationNone,
    BudgetLow,
    #[serde(rename = "budget_mediumlow")]
    BudgetMediumLow,
    BudgetMedium,
    BudgetHigh,
    MindsetFlexible,
    MindsetRisky,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detached => "detached",
            Self::Attached => "attached",
            Self::InsideHouse => "inside_house",
            Self::SharedBuilding => "shared_building",
            Self::FloorSlab => "floor_slab",
            Self::FloorWood => "floor_wood",
            Self::FloorCrawlspace => "floor_crawl",
            Self::FloorLivingBelow => "floor_living_below",
            Self::HeightGreen => "height_green",
            Self::HeightYellow => "height_yellow",
            Self::HeightTooLow => "height_too_low",
            Self::AboveAttic => "above_attic",
            Self::AboveLiving => "above_living",
            Self::AboveOtherUnit => "above_other_unit",
            Self::NeighborsNone => "neighbors_none",
            Self::NeighborsFamily => "neighbors_family",
            Self::NeighborsNear => "neighbors_near",
            Self::NeighborsVeryClose => "neighbors_very_close",
            Self::SourceVoice => "src_voice",
            Self::SourceAcoustic => "src_acoustic",
            Self::SourceAmps => "src_amps",
            Self::SourceDrums => "src_drums",
            Self::TimeDay => "time_day",
            Self::TimeEvening => "time_evening",
            Self::TimeLate => "time_late",
            Self::TimeOvernight => "time_overnight",
            Self::ExpectationReasonable => "exp_reasonable",
            Self::ExpectationSomeCompromise => "exp_some_compromise",
            Self::ExpectationUnrealistic => "exp_unrealistic",
            Self::ModsOk => "mods_ok",
            Self::ModsLimited => "mods_limited",
            Self::ModsNone => "mods_none",
            Self::VentilationOk => "vent_ok",
            Self::VentilationLimited => "vent_limited",
            Self::VentilationNone => "vent_none",
            Self::BudgetLow => "budget_low",
            Self::BudgetMediumLow => "budget_mediumlow",
            Self::BudgetMedium => "budget_medium",
            Self::BudgetHigh => "budget_high",
            Self::MindsetFlexible => "mindset_flexible",
            Self::MindsetRisky => "mindset_risky",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicated tags triggered by an answer set. Ordered so verdicts serialize identically.
pub type TagSet = BTreeSet<Tag>;

/// How strongly a single answer works against the project, from supportive to blocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Supportive,
    Minor,
    Constraint,
    Major,
    Blocker,
}

impl ImpactLevel {
    pub const fn rank(self) -> u8 {
        match self {
            Self::Supportive => 0,
            Self::Minor => 1,
            Self::Constraint => 2,
            Self::Major => 3,
            Self::Blocker => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Supportive => "Supportive",
            Self::Minor => "Minor",
            Self::Constraint => "Constraint",
            Self::Major => "Major",
            Self::Blocker => "Blocker",
        }
    }
}

/// Coarse structural capability, gated on floor construction alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityTier {
    A,
    B,
    C,
}

impl CapabilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "High isolation possible (slab)",
            Self::B => "Medium isolation only (wood over crawlspace)",
            Self::C => "Light isolation only (wood over living space)",
        }
    }
}

/// Traffic-light outcome. Variant order is the severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Light {
    Green,
    Yellow,
    Red,
}

impl Light {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }
}

/// Audit data carried alongside the verdict text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictMeta {
    pub points: u32,
    pub hard_stop_triggered: bool,
    pub capability_tier: CapabilityTier,
    pub tags: TagSet,
}

/// Evaluation output returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub light: Light,
    pub title: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub cta_label: String,
    pub meta: VerdictMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RuleTable;

    #[test]
    fn tag_tokens_match_serialized_form() {
        let table = RuleTable::standard();
        let tags: TagSet = table
            .questions()
            .iter()
            .flat_map(|question| question.options.iter())
            .flat_map(|option| option.tags.iter().copied())
            .collect();

        assert_eq!(tags.len(), 41);
        for tag in tags {
            assert_eq!(
                serde_json::to_value(tag).expect("tag serializes"),
                serde_json::Value::from(tag.as_str())
            );
            let parsed: Tag = serde_json::from_value(serde_json::Value::from(tag.as_str()))
                .expect("token parses");
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn impact_rank_follows_severity() {
        let levels = [
            ImpactLevel::Supportive,
            ImpactLevel::Minor,
            ImpactLevel::Constraint,
            ImpactLevel::Major,
            ImpactLevel::Blocker,
        ];
        for (expected, level) in levels.into_iter().enumerate() {
            assert_eq!(usize::from(level.rank()), expected);
        }
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
