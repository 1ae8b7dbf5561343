use serde::{Deserialize, Serialize};

use super::config::VerdictThresholds;
use super::domain::{CapabilityTier, Light, Tag, TagSet};

/// Cross-question conditions read from the tag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSignals {
    pub drums: bool,
    pub neighbors_very_close: bool,
    pub late_use: bool,
    pub shared_building: bool,
    pub unrealistic_expectation: bool,
    pub low_budget: bool,
}

impl RiskSignals {
    pub fn from_tags(tags: &TagSet) -> Self {
        Self {
            drums: tags.contains(&Tag::SourceDrums),
            neighbors_very_close: tags.contains(&Tag::NeighborsVeryClose),
            late_use: tags.contains(&Tag::TimeLate) || tags.contains(&Tag::TimeOvernight),
            shared_building: tags.contains(&Tag::SharedBuilding)
                || tags.contains(&Tag::AboveOtherUnit),
            unrealistic_expectation: tags.contains(&Tag::ExpectationUnrealistic),
            low_budget: tags.contains(&Tag::BudgetLow),
        }
    }
}

/// Hard stop that no single option carries.
///
/// Shared-building context always stops the project. Drum or band use stops it on tier B
/// when neighbors are very close and use runs late, and on tier C when either holds.
pub fn dynamic_hard_stop(signals: &RiskSignals, tier: CapabilityTier) -> bool {
    if signals.shared_building {
        return true;
    }
    if !signals.drums {
        return false;
    }

    match tier {
        CapabilityTier::A => false,
        CapabilityTier::B => signals.neighbors_very_close && signals.late_use,
        CapabilityTier::C => signals.neighbors_very_close || signals.late_use,
    }
}

/// Light implied by points alone. Tier B and C sites never earn GREEN.
pub fn severity_from_points(
    tier: CapabilityTier,
    points: u32,
    thresholds: &VerdictThresholds,
) -> Light {
    match tier {
        CapabilityTier::A if points <= thresholds.slab_green_max => Light::Green,
        CapabilityTier::A if points <= thresholds.slab_yellow_max => Light::Yellow,
        CapabilityTier::B if points <= thresholds.crawlspace_yellow_max => Light::Yellow,
        CapabilityTier::C if points <= thresholds.living_space_yellow_max => Light::Yellow,
        _ => Light::Red,
    }
}

pub fn apply_hard_stop(light: Light, hard_stop: bool) -> Light {
    if hard_stop {
        Light::Red
    } else {
        light
    }
}
