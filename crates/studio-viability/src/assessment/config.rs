use serde::{Deserialize, Serialize};

/// Point ceilings per capability tier. A total at or below the ceiling earns that light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub slab_green_max: u32,
    pub slab_yellow_max: u32,
    pub crawlspace_yellow_max: u32,
    pub living_space_yellow_max: u32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            slab_green_max: 7,
            slab_yellow_max: 14,
            crawlspace_yellow_max: 12,
            living_space_yellow_max: 10,
        }
    }
}

/// Call-to-action label per light level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub green: String,
    pub yellow: String,
    pub red: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        let label = "Book a Soundproof Planning Call".to_string();
        Self {
            green: label.clone(),
            yellow: label.clone(),
            red: label,
        }
    }
}

/// Editable data consumed by the verdict engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub thresholds: VerdictThresholds,
    pub cta: CallToAction,
}
