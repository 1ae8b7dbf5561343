use super::domain::{CapabilityTier, Light};
use super::policy::RiskSignals;

const GREEN_SLAB_NOTE: &str = "Most Green results occur on a concrete slab foundation. Slabs dramatically improve predictability for isolation—especially for low-frequency energy.";
const GREEN_NEXT_STEP: &str = "Next step: define the isolation strategy + ventilation pathing before any irreversible framing or electrical decisions.";
const YELLOW_NEXT_STEP: &str = "Next step: get a professional plan to avoid expensive rework (most failures happen from order-of-operations mistakes).";
const RED_BEST_MOVE: &str = "Best move: reconsider location or dramatically adjust expectations before you spend money on construction.";

/// Title, summary and bullets for one verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Narrative {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: Vec<String>,
}

pub(crate) fn compose(light: Light, tier: CapabilityTier, signals: &RiskSignals) -> Narrative {
    let notes = common_notes(tier, signals);

    match light {
        Light::Green => {
            let [floor, rest @ ..] = notes;
            let mut bullets = vec![floor, GREEN_SLAB_NOTE];
            bullets.extend(rest);
            bullets.push(GREEN_NEXT_STEP);
            Narrative {
                title: "Green Light — Viable to Proceed",
                summary: "Your site supports a reliable soundproof studio outcome, assuming isolation and ventilation are designed together before construction.",
                bullets: owned(bullets),
            }
        }
        Light::Yellow => Narrative {
            title: "Yellow Light — Elevated Risk",
            summary: "Soundproofing may be possible, but your site includes risk factors that typically increase cost, complexity, or required compromise.",
            bullets: owned(notes.into_iter().chain([YELLOW_NEXT_STEP]).collect()),
        },
        Light::Red => Narrative {
            title: "Red Light — Not Advisable",
            summary: "This site has constraints that make reliable soundproofing unlikely or disproportionately expensive relative to the outcome—especially for your stated use case.",
            bullets: owned(notes.into_iter().chain([RED_BEST_MOVE]).collect()),
        },
    }
}

/// Floor, sources, stakes, expectation and budget notes, in that order.
fn common_notes(tier: CapabilityTier, signals: &RiskSignals) -> [&'static str; 5] {
    let floor = match tier {
        CapabilityTier::A => "A concrete slab is a strong foundation for high isolation when the full system is designed together.",
        CapabilityTier::B => "A wood floor over crawlspace limits low-frequency isolation. Projects can still succeed when isolation is not the primary goal and expectations are controlled.",
        CapabilityTier::C => "A wood floor over living space places a hard ceiling on achievable isolation—especially for low-frequency energy like drums and bass.",
    };

    let sources = if signals.drums {
        "Drums and band-level sound are low-frequency dominant. These projects succeed only when structure, isolation, airtightness, and ventilation are coordinated as one system."
    } else {
        "Lighter use cases (voice, editing, moderate instruments) are more forgiving—but still benefit from a coordinated plan."
    };

    let stakes = if signals.neighbors_very_close || signals.late_use {
        "Close neighbors and/or late-night use significantly raise the bar for success."
    } else {
        "Your disturbance context sets the isolation target—and the construction complexity required."
    };

    let expectation = if signals.unrealistic_expectation {
        "Your success target appears very strict. Most failures come from an expectation mismatch rather than “bad materials.”"
    } else {
        "Your success target appears reasonably calibrated for a professional plan."
    };

    let budget = if signals.low_budget {
        "Budget appears to be a limiting factor. If isolation is the goal, scope and expectations must be adjusted to avoid disappointment."
    } else {
        "Budget appears broadly compatible with a planned approach."
    };

    [floor, sources, stakes, expectation, budget]
}

fn owned(bullets: Vec<&'static str>) -> Vec<String> {
    bullets.into_iter().map(str::to_string).collect()
}
