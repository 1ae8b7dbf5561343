use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::domain::{ImpactLevel, Tag};

/// Point cost carried by hard-stop options so that threshold comparisons land on RED even
/// when the hard-stop flag is not consulted.
pub const HARD_STOP_POINTS: u32 = 999;

/// A selectable answer to a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub points: u32,
    pub impact: ImpactLevel,
    pub interpretation: &'static str,
    pub hard_stop: bool,
    pub tags: Vec<Tag>,
}

/// A single questionnaire step and its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub section: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    pub required: bool,
    pub multiple: bool,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule table has no questions")]
    Empty,
    #[error("question id '{0}' appears more than once")]
    DuplicateQuestion(&'static str),
    #[error("question '{0}' has no options")]
    NoOptions(&'static str),
    #[error("question '{question}' repeats option id '{option}'")]
    DuplicateOption {
        question: &'static str,
        option: &'static str,
    },
    #[error(
        "hard-stop option '{question}/{option}' carries {points} points, expected at least {}",
        HARD_STOP_POINTS
    )]
    HardStopBelowSentinel {
        question: &'static str,
        option: &'static str,
        points: u32,
    },
}

/// Immutable questionnaire definition in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    questions: Vec<Question>,
}

impl RuleTable {
    /// Build a custom table, rejecting data that breaks the table invariants.
    pub fn new(questions: Vec<Question>) -> Result<Self, RuleTableError> {
        let table = Self { questions };
        table.validate()?;
        Ok(table)
    }

    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    /// Process-wide copy of the standard table, built on first use.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<RuleTable>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::standard())).clone()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.questions.is_empty() {
            return Err(RuleTableError::Empty);
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id) {
                return Err(RuleTableError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(RuleTableError::NoOptions(question.id));
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id) {
                    return Err(RuleTableError::DuplicateOption {
                        question: question.id,
                        option: option.id,
                    });
                }
                if option.hard_stop && option.points < HARD_STOP_POINTS {
                    return Err(RuleTableError::HardStopBelowSentinel {
                        question: question.id,
                        option: option.id,
                        points: option.points,
                    });
                }
            }
        }

        Ok(())
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "context_location",
            section: "Project context",
            title: "Where is the studio located?",
            help: Some("This determines how much isolation is realistically achievable and how much risk you carry."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "detached",
                    label: "Detached structure (separate building)",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Best-case context. Detached buildings reduce flanking paths into living spaces and make high isolation more achievable.",
                    hard_stop: false,
                    tags: vec![Tag::Detached],
                },
                AnswerOption {
                    id: "attached",
                    label: "Attached to a house (garage conversion / addition)",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Very workable, but the connection to the house creates extra flanking paths. Planning details matter more than in a detached build.",
                    hard_stop: false,
                    tags: vec![Tag::Attached],
                },
                AnswerOption {
                    id: "inside_house",
                    label: "Inside a house (basement / spare room)",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "More complex than a garage. Existing structure + shared pathways (stairs, framing, ductwork) raise the bar, but good results are still possible with realistic goals.",
                    hard_stop: false,
                    tags: vec![Tag::InsideHouse],
                },
                AnswerOption {
                    id: "shared_building",
                    label: "Apartment / condo / shared building",
                    points: HARD_STOP_POINTS,
                    impact: ImpactLevel::Blocker,
                    interpretation: "Shared buildings add legal/HOA limits and extreme flanking paths. Reliable studio isolation is rarely practical without major structural work you likely can’t do.",
                    hard_stop: true,
                    tags: vec![Tag::SharedBuilding],
                },
            ],
        },
        Question {
            id: "floor_type",
            section: "Structure",
            title: "What is the primary floor construction?",
            help: Some("High-isolation studios are most reliable on a concrete slab. Wood floors can work for lighter use cases, but they cap what’s achievable—especially for drums and bass."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "slab",
                    label: "Concrete slab",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Strong foundation for serious isolation. Slabs reduce low-frequency vibration transmission and make high-performance outcomes more predictable.",
                    hard_stop: false,
                    tags: vec![Tag::FloorSlab],
                },
                AnswerOption {
                    id: "wood_crawl",
                    label: "Wood floor over crawlspace",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "This floor type places a hard ceiling on achievable sound isolation, especially for low-frequency energy. Projects can still succeed when sound isolation is not the primary goal, expectations are clearly defined, and use cases are controlled. If high isolation is the objective, a slab-on-grade foundation is strongly preferred.",
                    hard_stop: false,
                    tags: vec![Tag::FloorWood, Tag::FloorCrawlspace],
                },
                AnswerOption {
                    id: "wood_living",
                    label: "Wood floor over living space",
                    points: 4,
                    impact: ImpactLevel::Major,
                    interpretation: "This structure is fundamentally limited for sound isolation. Voice and low-impact use cases can work well, but projects aimed at containing amplified or percussive sound typically involve significant compromise or disproportionate cost.",
                    hard_stop: false,
                    tags: vec![Tag::FloorWood, Tag::FloorLivingBelow],
                },
            ],
        },
        Question {
            id: "ceiling_height",
            section: "Structure",
            title: "What is the existing ceiling height (before any soundproofing)?",
            help: Some("Soundproofing consumes height. If you start too low, you can end up with an unusable room after isolation + ducting + finishes."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "h_9plus",
                    label: "9 ft or higher",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Excellent starting height. You have room for isolation details, lighting, and ventilation routing without the room feeling cramped.",
                    hard_stop: false,
                    tags: vec![Tag::HeightGreen],
                },
                AnswerOption {
                    id: "h_8_9",
                    label: "8–9 ft",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Solid starting height. Most garage/basement studios can succeed here with a coordinated plan.",
                    hard_stop: false,
                    tags: vec![Tag::HeightGreen],
                },
                AnswerOption {
                    id: "h_7_8",
                    label: "7–8 ft",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Constraint territory. Still possible, but finished height can get tight and ventilation becomes more difficult. This often pushes projects toward smarter compromises.",
                    hard_stop: false,
                    tags: vec![Tag::HeightYellow],
                },
                AnswerOption {
                    id: "h_under7",
                    label: "Under 7 ft",
                    points: HARD_STOP_POINTS,
                    impact: ImpactLevel::Blocker,
                    interpretation: "Fundamental constraint. After isolation + ventilation, the room often becomes impractical. Most projects in this range should reassess the site or scope.",
                    hard_stop: true,
                    tags: vec![Tag::HeightTooLow],
                },
            ],
        },
        Question {
            id: "above_space",
            section: "Structure",
            title: "What is above the space?",
            help: None,
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "attic",
                    label: "Attic / roof only",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Best-case condition. No occupied space above reduces the isolation target and lowers risk of flanking.",
                    hard_stop: false,
                    tags: vec![Tag::AboveAttic],
                },
                AnswerOption {
                    id: "living",
                    label: "Living space (bedroom, office, etc.)",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Higher stakes. Impact noise and flanking become more likely, and your ceiling assembly has to do more work.",
                    hard_stop: false,
                    tags: vec![Tag::AboveLiving],
                },
                AnswerOption {
                    id: "other_unit",
                    label: "Another dwelling unit",
                    points: HARD_STOP_POINTS,
                    impact: ImpactLevel::Blocker,
                    interpretation: "Fundamental risk. Separate dwelling units add strict noise expectations and extreme flanking paths—reliable results are rarely practical.",
                    hard_stop: true,
                    tags: vec![Tag::AboveOtherUnit],
                },
            ],
        },
        Question {
            id: "neighbors",
            section: "Noise stakes",
            title: "Who are you trying not to disturb?",
            help: None,
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "no_one",
                    label: "No one (rural / isolated)",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Lowest stakes. You may be able to meet your goals with less extreme construction.",
                    hard_stop: false,
                    tags: vec![Tag::NeighborsNone],
                },
                AnswerOption {
                    id: "family",
                    label: "Family in the same house",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Common scenario. You’ll want good isolation, but expectations can be calibrated (especially by time-of-day and use case).",
                    hard_stop: false,
                    tags: vec![Tag::NeighborsFamily],
                },
                AnswerOption {
                    id: "20_50",
                    label: "Neighbors about 20–50 ft away",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Manageable with a proper system. Close enough that doors, ventilation, and airtightness matter.",
                    hard_stop: false,
                    tags: vec![Tag::NeighborsNear],
                },
                AnswerOption {
                    id: "lt20",
                    label: "Neighbors closer than 20 ft / shared walls nearby",
                    points: 3,
                    impact: ImpactLevel::Major,
                    interpretation: "High stakes. This raises the isolation target substantially and makes order-of-operations mistakes very expensive.",
                    hard_stop: false,
                    tags: vec![Tag::NeighborsVeryClose],
                },
            ],
        },
        Question {
            id: "use_cases",
            section: "Use case",
            title: "What are you trying to contain?",
            help: Some("Select all that apply. Low-frequency sources (drums, bass-heavy amps) dramatically raise the isolation bar."),
            required: true,
            multiple: true,
            options: vec![
                AnswerOption {
                    id: "voice",
                    label: "Voice / podcast / streaming",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Most forgiving use case. Excellent fit for garages and basements with reasonable expectations.",
                    hard_stop: false,
                    tags: vec![Tag::SourceVoice],
                },
                AnswerOption {
                    id: "acoustic",
                    label: "Acoustic instruments",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Still very achievable in many sites. Requires attention to airtightness and ventilation noise.",
                    hard_stop: false,
                    tags: vec![Tag::SourceAcoustic],
                },
                AnswerOption {
                    id: "amps",
                    label: "Amplified instruments at moderate volume",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Achievable, but the isolation target rises. Door performance and ventilation design become major determinants of success.",
                    hard_stop: false,
                    tags: vec![Tag::SourceAmps],
                },
                AnswerOption {
                    id: "drums",
                    label: "Drum kit / band rehearsal / performance volume",
                    points: 5,
                    impact: ImpactLevel::Major,
                    interpretation: "Highest-impact source. Best matched to slab-on-grade builds. On wood floors, results are possible only in limited scenarios and often require compromises.",
                    hard_stop: false,
                    tags: vec![Tag::SourceDrums],
                },
            ],
        },
        Question {
            id: "time_of_use",
            section: "Use case",
            title: "When will you primarily use the studio?",
            help: None,
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "day",
                    label: "Daytime only",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Best-case scheduling. Lower isolation target and fewer conflicts with family/neighbors.",
                    hard_stop: false,
                    tags: vec![Tag::TimeDay],
                },
                AnswerOption {
                    id: "evening",
                    label: "Evenings",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Common and workable. Raises the target slightly depending on neighbors and use case.",
                    hard_stop: false,
                    tags: vec![Tag::TimeEvening],
                },
                AnswerOption {
                    id: "late",
                    label: "Late night (after ~10pm)",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Higher stakes. Quiet hours raise expectations, so the room needs more isolation (and quieter ventilation).",
                    hard_stop: false,
                    tags: vec![Tag::TimeLate],
                },
                AnswerOption {
                    id: "overnight",
                    label: "Any time, including overnight",
                    points: 3,
                    impact: ImpactLevel::Major,
                    interpretation: "Very high stakes. This significantly increases the bar for success in attached homes and close-neighbor situations.",
                    hard_stop: false,
                    tags: vec![Tag::TimeOvernight],
                },
            ],
        },
        Question {
            id: "expectation",
            section: "Expectations",
            title: "What does “success” look like to you?",
            help: Some("Soundproofing is about managing transmission. “Complete silence” is rarely realistic in shared structures or high-stakes scenarios."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "not_notice",
                    label: "No one notices normal use",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Strong, realistic target for many garage/basement studios when designed as a system.",
                    hard_stop: false,
                    tags: vec![Tag::ExpectationReasonable],
                },
                AnswerOption {
                    id: "faint",
                    label: "Loud sessions are faintly audible",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Practical expectation. This framing often leads to better cost/performance decisions.",
                    hard_stop: false,
                    tags: vec![Tag::ExpectationReasonable],
                },
                AnswerOption {
                    id: "restricted",
                    label: "Occasional loud sessions at restricted times",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Good compromise mindset. Scheduling + smart design choices can outperform “more materials.”",
                    hard_stop: false,
                    tags: vec![Tag::ExpectationSomeCompromise],
                },
                AnswerOption {
                    id: "silence",
                    label: "Complete silence outside the room",
                    points: 4,
                    impact: ImpactLevel::Major,
                    interpretation: "Very strict target. Often requires extreme construction or leads to disappointment unless the site is ideal (detached + slab + robust ventilation).",
                    hard_stop: false,
                    tags: vec![Tag::ExpectationUnrealistic],
                },
            ],
        },
        Question {
            id: "mods",
            section: "Constraints",
            title: "Are you willing to permanently modify the structure?",
            help: Some("High-performing isolation requires real construction changes."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "yes",
                    label: "Yes, structural changes are acceptable",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Great. True isolation requires structural decisions (framing, decoupling, airtightness, doors/windows, ventilation).",
                    hard_stop: false,
                    tags: vec![Tag::ModsOk],
                },
                AnswerOption {
                    id: "minor",
                    label: "Minor changes only",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Constraint. Limited modifications often cap achievable isolation and increase the chance of weak links (especially doors/ventilation).",
                    hard_stop: false,
                    tags: vec![Tag::ModsLimited],
                },
                AnswerOption {
                    id: "no",
                    label: "No permanent modifications",
                    points: HARD_STOP_POINTS,
                    impact: ImpactLevel::Blocker,
                    interpretation: "Fundamental blocker for serious soundproofing. Without permanent construction changes, reliable isolation outcomes are unlikely.",
                    hard_stop: true,
                    tags: vec![Tag::ModsNone],
                },
            ],
        },
        Question {
            id: "ventilation",
            section: "Ventilation",
            title: "Can ventilation equipment be added or modified?",
            help: Some("A sealed room without a quiet ventilation strategy is a common studio failure point."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "vent_yes",
                    label: "Yes, fully flexible",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Excellent. Quiet ventilation is a pillar of a successful studio—this flexibility makes the whole system more viable.",
                    hard_stop: false,
                    tags: vec![Tag::VentilationOk],
                },
                AnswerOption {
                    id: "vent_limited",
                    label: "Limited options",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Constraint. You can still succeed, but ventilation often becomes the limiting factor (noise, airflow, routing).",
                    hard_stop: false,
                    tags: vec![Tag::VentilationLimited],
                },
                AnswerOption {
                    id: "vent_no",
                    label: "No changes allowed",
                    points: HARD_STOP_POINTS,
                    impact: ImpactLevel::Blocker,
                    interpretation: "Fundamental blocker. A sealed studio without ventilation changes tends to fail (comfort, CO₂, and noise control).",
                    hard_stop: true,
                    tags: vec![Tag::VentilationNone],
                },
            ],
        },
        Question {
            id: "budget",
            section: "Budget reality",
            title: "What build budget range are you mentally prepared for (design + build)?",
            help: Some("This helps calibrate what outcomes are realistic based on your site and use case."),
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "b_lt10",
                    label: "Under $10k",
                    points: 4,
                    impact: ImpactLevel::Major,
                    interpretation: "Impractical budget for meaningful sound isolation. Any reasonable sound isolation should not be expected at this level.",
                    hard_stop: false,
                    tags: vec![Tag::BudgetLow],
                },
                AnswerOption {
                    id: "b_10_25",
                    label: "$10k–$25k",
                    points: 2,
                    impact: ImpactLevel::Constraint,
                    interpretation: "Light sound isolation may be possible only if the space is small (typically under ~200 sq ft) and a significant portion of the labor is DIY.",
                    hard_stop: false,
                    tags: vec![Tag::BudgetMediumLow],
                },
                AnswerOption {
                    id: "b_25_50",
                    label: "$25k–$50k",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Viable for many residential studios when goals are clearly defined and the system is planned up front.",
                    hard_stop: false,
                    tags: vec![Tag::BudgetMedium],
                },
                AnswerOption {
                    id: "b_50plus",
                    label: "$50k+",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Best flexibility. This range supports a coordinated isolation and ventilation system with fewer compromises.",
                    hard_stop: false,
                    tags: vec![Tag::BudgetHigh],
                },
            ],
        },
        Question {
            id: "mindset",
            section: "Decision posture",
            title: "If your assessment result is Yellow or Red, what would you do?",
            help: None,
            required: true,
            multiple: false,
            options: vec![
                AnswerOption {
                    id: "reconsider",
                    label: "Reconsider the location",
                    points: 0,
                    impact: ImpactLevel::Supportive,
                    interpretation: "Strong decision posture. Site selection is often the cheapest “soundproofing upgrade” you can make.",
                    hard_stop: false,
                    tags: vec![Tag::MindsetFlexible],
                },
                AnswerOption {
                    id: "adjust",
                    label: "Adjust expectations / scope",
                    points: 1,
                    impact: ImpactLevel::Minor,
                    interpretation: "Healthy flexibility. Success often comes from aligning goals with what the site can reliably support.",
                    hard_stop: false,
                    tags: vec![Tag::MindsetFlexible],
                },
                AnswerOption {
                    id: "try_anyway",
                    label: "Try anyway",
                    points: 3,
                    impact: ImpactLevel::Major,
                    interpretation: "Risky posture. This usually leads to overspending or disappointment unless constraints are clearly understood and accepted.",
                    hard_stop: false,
                    tags: vec![Tag::MindsetRisky],
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &'static str, points: u32, hard_stop: bool) -> AnswerOption {
        AnswerOption {
            id,
            label: id,
            points,
            impact: ImpactLevel::Minor,
            interpretation: "",
            hard_stop,
            tags: Vec::new(),
        }
    }

    fn question(id: &'static str, options: Vec<AnswerOption>) -> Question {
        Question {
            id,
            section: "Test",
            title: id,
            help: None,
            required: true,
            multiple: false,
            options,
        }
    }

    #[test]
    fn standard_table_passes_validation() {
        let table = RuleTable::standard();
        table.validate().expect("standard table is valid");
        assert_eq!(table.questions().len(), 12);
        assert_eq!(table.questions()[0].id, "context_location");
        assert_eq!(table.questions()[11].id, "mindset");
    }

    #[test]
    fn only_use_cases_allows_multiple_answers() {
        let table = RuleTable::standard();
        let multiple: Vec<_> = table
            .questions()
            .iter()
            .filter(|question| question.multiple)
            .map(|question| question.id)
            .collect();
        assert_eq!(multiple, vec!["use_cases"]);
        assert!(table.questions().iter().all(|question| question.required));
    }

    #[test]
    fn every_hard_stop_option_is_a_blocker() {
        let table = RuleTable::standard();
        let hard_stops: Vec<_> = table
            .questions()
            .iter()
            .flat_map(|question| question.options.iter())
            .filter(|option| option.hard_stop)
            .collect();

        assert_eq!(hard_stops.len(), 5);
        for option in hard_stops {
            assert_eq!(option.impact, ImpactLevel::Blocker, "{}", option.id);
            assert!(option.points >= HARD_STOP_POINTS, "{}", option.id);
        }
    }

    #[test]
    fn rejects_hard_stop_without_sentinel_points() {
        let result = RuleTable::new(vec![question("q", vec![option("bad", 5, true)])]);
        assert_eq!(
            result,
            Err(RuleTableError::HardStopBelowSentinel {
                question: "q",
                option: "bad",
                points: 5,
            })
        );
    }

    #[test]
    fn rejects_duplicate_option_ids() {
        let result = RuleTable::new(vec![question(
            "q",
            vec![option("a", 0, false), option("a", 1, false)],
        )]);
        assert!(matches!(
            result,
            Err(RuleTableError::DuplicateOption { option: "a", .. })
        ));
    }

    #[test]
    fn rejects_empty_tables_and_questions() {
        assert_eq!(RuleTable::new(Vec::new()), Err(RuleTableError::Empty));
        assert_eq!(
            RuleTable::new(vec![question("q", Vec::new())]),
            Err(RuleTableError::NoOptions("q"))
        );
        assert_eq!(
            RuleTable::new(vec![
                question("q", vec![option("a", 0, false)]),
                question("q", vec![option("b", 0, false)]),
            ]),
            Err(RuleTableError::DuplicateQuestion("q"))
        );
    }

    #[test]
    fn shared_table_is_built_once() {
        let first = RuleTable::shared();
        let second = RuleTable::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn copy_keeps_original_wording() {
        let table = RuleTable::standard();
        let interpretation = |question_id: &str, option_id: &str| {
            table
                .question(question_id)
                .and_then(|question| question.option(option_id))
                .map(|option| option.interpretation)
        };

        assert_eq!(
            table.question("floor_type").and_then(|question| question.help),
            Some("High-isolation studios are most reliable on a concrete slab. Wood floors can work for lighter use cases, but they cap what’s achievable—especially for drums and bass.")
        );
        assert_eq!(
            interpretation("above_space", "other_unit"),
            Some("Fundamental risk. Separate dwelling units add strict noise expectations and extreme flanking paths—reliable results are rarely practical.")
        );
        assert_eq!(
            interpretation("ventilation", "vent_yes"),
            Some("Excellent. Quiet ventilation is a pillar of a successful studio—this flexibility makes the whole system more viable.")
        );
    }
}
