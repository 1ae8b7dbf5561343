use crate::infra::{assessment_service, parse_selection};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use studio_viability::assessment::{
    AnswerSet, AssessmentReport, AssessmentRequest, ResultsBreakdown, RuleTable, Selection,
};
use studio_viability::config::AppConfig;
use studio_viability::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the rule table as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON file mapping question ids to an option id or a list of option ids
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Answer a question inline as QUESTION=OPTION (repeatable; toggles multi-select options)
    #[arg(long = "select", value_parser = parse_selection)]
    pub(crate) selections: Vec<(String, String)>,
    /// Refuse to evaluate while required questions are unanswered
    #[arg(long)]
    pub(crate) require_complete: bool,
    /// Include the per-answer breakdown
    #[arg(long)]
    pub(crate) breakdown: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let table = RuleTable::shared();
    if args.json {
        println!("{}", to_pretty_json(&*table)?);
        return Ok(());
    }

    render_questions(&table);
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        answers,
        selections,
        require_complete,
        breakdown,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = assessment_service(&config.booking)?;
    let answers = load_answers(service.questions(), answers, &selections)?;

    let report = service.assess(AssessmentRequest {
        answers,
        require_complete,
        include_breakdown: breakdown,
    })?;

    if json {
        println!("{}", to_pretty_json(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = assessment_service(&config.booking)?;

    println!("Site assessment demo");
    for (name, answers) in demo_sites() {
        println!("\n=== {name} ===");
        let report = service.assess(AssessmentRequest {
            answers,
            require_complete: true,
            include_breakdown: true,
        })?;
        render_report(&report);
    }

    Ok(())
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::Render)
}

pub(crate) fn load_answers(
    table: &RuleTable,
    path: Option<PathBuf>,
    selections: &[(String, String)],
) -> Result<AnswerSet, AppError> {
    let mut answers = match path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => AnswerSet::new(),
    };

    for (question_id, option_id) in selections {
        answers.select_by_id(table, question_id, option_id)?;
    }

    Ok(answers)
}

fn demo_sites() -> Vec<(&'static str, AnswerSet)> {
    let garage_podcast = site(
        &[
            ("context_location", "detached"),
            ("floor_type", "slab"),
            ("ceiling_height", "h_8_9"),
            ("above_space", "attic"),
            ("neighbors", "20_50"),
            ("time_of_use", "evening"),
            ("expectation", "faint"),
            ("mods", "yes"),
            ("ventilation", "vent_yes"),
            ("budget", "b_25_50"),
            ("mindset", "adjust"),
        ],
        &["voice", "acoustic"],
    );

    let crawlspace_band = site(
        &[
            ("context_location", "attached"),
            ("floor_type", "wood_crawl"),
            ("ceiling_height", "h_8_9"),
            ("above_space", "attic"),
            ("neighbors", "family"),
            ("time_of_use", "day"),
            ("expectation", "faint"),
            ("mods", "yes"),
            ("ventilation", "vent_yes"),
            ("budget", "b_50plus"),
            ("mindset", "adjust"),
        ],
        &["drums"],
    );

    let condo_drums = site(
        &[
            ("context_location", "shared_building"),
            ("floor_type", "wood_living"),
            ("ceiling_height", "h_7_8"),
            ("above_space", "other_unit"),
            ("neighbors", "lt20"),
            ("time_of_use", "late"),
            ("expectation", "silence"),
            ("mods", "minor"),
            ("ventilation", "vent_limited"),
            ("budget", "b_lt10"),
            ("mindset", "try_anyway"),
        ],
        &["drums", "amps"],
    );

    vec![
        ("Detached slab garage podcast room", garage_podcast),
        ("Attached crawlspace band room", crawlspace_band),
        ("Condo drum room", condo_drums),
    ]
}

fn site(single: &[(&str, &str)], use_cases: &[&str]) -> AnswerSet {
    let mut answers: AnswerSet = single.iter().copied().collect();
    answers.set("use_cases", Selection::from(use_cases.to_vec()));
    answers
}

fn render_questions(table: &RuleTable) {
    println!("Soundproof studio site questionnaire");
    for (index, question) in table.questions().iter().enumerate() {
        let mode = if question.multiple {
            "select all that apply"
        } else {
            "select one"
        };
        println!(
            "\n{}. [{}] {} ({}) id={}",
            index + 1,
            question.section,
            question.title,
            mode,
            question.id
        );
        if let Some(help) = question.help {
            println!("   {}", help);
        }
        for option in &question.options {
            let stop = if option.hard_stop { ", hard stop" } else { "" };
            println!(
                "   - {}: {} ({} pts, {}{})",
                option.id,
                option.label,
                option.points,
                option.impact.label(),
                stop
            );
        }
    }
}

pub(crate) fn render_report(report: &AssessmentReport) {
    let verdict = &report.verdict;
    println!(
        "{} Light | {}",
        verdict.light.label(),
        verdict.meta.capability_tier.description()
    );
    println!("{}", verdict.title);
    println!("{}", verdict.summary);

    println!();
    for bullet in &verdict.bullets {
        println!("- {}", bullet);
    }

    let hard_stop = if verdict.meta.hard_stop_triggered {
        "yes"
    } else {
        "no"
    };
    println!(
        "\nPoints: {} | Tier: {} | Hard stop: {}",
        verdict.meta.points,
        verdict.meta.capability_tier.label(),
        hard_stop
    );
    println!("{}: {}", verdict.cta_label, report.booking_url);

    if let Some(breakdown) = &report.breakdown {
        render_breakdown(breakdown);
    }
}

fn render_breakdown(breakdown: &ResultsBreakdown) {
    if breakdown.primary_constraints.is_empty() {
        println!("\nPrimary constraints: none detected");
    } else {
        println!("\nPrimary constraints");
        for constraint in &breakdown.primary_constraints {
            println!(
                "- [{}] {}: {}",
                constraint.impact.label(),
                constraint.question_title,
                constraint.option_label
            );
            println!("  {}", constraint.interpretation);
        }
    }

    println!("\nYour answers");
    for review in &breakdown.answers {
        let picked = if review.selections.is_empty() {
            "-".to_string()
        } else {
            review
                .selections
                .iter()
                .map(|selection| selection.label)
                .collect::<Vec<_>>()
                .join("; ")
        };
        println!(
            "- [{}] {}: {}",
            review.max_impact.label(),
            review.question_title,
            picked
        );
    }
}
