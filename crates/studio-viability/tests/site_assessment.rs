use studio_viability::assessment::{
    aggregate, classify_tier, evaluate, AnswerSet, AssessmentEngine, CapabilityTier, Light,
    RuleTable, Selection, TagSet,
};

fn supportive_answers() -> AnswerSet {
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

#[test]
fn all_supportive_answers_give_a_green_slab_verdict() {
    let table = RuleTable::standard();
    let answers = supportive_answers();
    assert!(answers.missing_required(&table).is_empty());

    let verdict = evaluate(&answers);

    assert_eq!(verdict.light, Light::Green);
    assert_eq!(verdict.meta.capability_tier, CapabilityTier::A);
    assert!(verdict.meta.points <= 7);
    assert!(!verdict.meta.hard_stop_triggered);
    assert!(verdict.bullets[1].starts_with("Most Green results occur on a concrete slab"));
    assert!(verdict
        .bullets
        .last()
        .expect("closing bullet")
        .starts_with("Next step: define the isolation strategy"));
}

#[test]
fn shared_building_is_red_regardless_of_other_answers() {
    let mut answers = supportive_answers();
    answers.set("context_location", Selection::from("shared_building"));

    let verdict = evaluate(&answers);

    assert!(verdict.meta.hard_stop_triggered);
    assert_eq!(verdict.light, Light::Red);
    assert!(verdict
        .bullets
        .last()
        .expect("closing bullet")
        .starts_with("Best move"));
}

#[test]
fn drums_over_living_space_with_close_neighbors_late_is_red_without_flagged_option() {
    let table = RuleTable::standard();
    let mut answers = supportive_answers();
    answers.set("floor_type", Selection::from("wood_living"));
    answers.set("neighbors", Selection::from("lt20"));
    answers.set("time_of_use", Selection::from("late"));
    answers.set("use_cases", Selection::from(vec!["drums"]));

    let totals = aggregate(&table, &answers);
    assert!(!totals.hard_stop_triggered);

    let verdict = evaluate(&answers);

    assert_eq!(verdict.meta.capability_tier, CapabilityTier::C);
    assert!(verdict.meta.hard_stop_triggered);
    assert_eq!(verdict.light, Light::Red);
}

#[test]
fn crawlspace_drums_with_close_neighbors_in_daytime_uses_point_thresholds() {
    let mut answers = supportive_answers();
    answers.set("floor_type", Selection::from("wood_crawl"));
    answers.set("neighbors", Selection::from("lt20"));
    answers.set("use_cases", Selection::from(vec!["drums"]));

    let verdict = evaluate(&answers);

    assert_eq!(verdict.meta.capability_tier, CapabilityTier::B);
    assert!(!verdict.meta.hard_stop_triggered);
    assert_eq!(verdict.light, Light::Yellow);

    answers.set("budget", Selection::from("b_lt10"));
    let verdict = evaluate(&answers);
    assert!(!verdict.meta.hard_stop_triggered);
    assert_eq!(verdict.meta.points, 14);
    assert_eq!(verdict.light, Light::Red);
}

#[test]
fn ceiling_under_seven_feet_alone_forces_red() {
    let mut answers = supportive_answers();
    answers.set("ceiling_height", Selection::from("h_under7"));

    let verdict = evaluate(&answers);

    assert!(verdict.meta.hard_stop_triggered);
    assert_eq!(verdict.light, Light::Red);
}

#[test]
fn tier_depends_only_on_floor_answer() {
    let table = RuleTable::standard();
    let floor = table.question("floor_type").expect("floor question");

    for option in &floor.options {
        let expected = classify_tier(&option.tags.iter().copied().collect::<TagSet>());
        for question in table.questions().iter().filter(|q| q.id != "floor_type") {
            for other in &question.options {
                let mut answers = AnswerSet::new();
                answers.set("floor_type", Selection::from(option.id));
                answers.set(question.id, Selection::from(other.id));
                let verdict = evaluate(&answers);
                assert_eq!(
                    verdict.meta.capability_tier, expected,
                    "{} with {}/{}",
                    option.id, question.id, other.id
                );
            }
        }
    }
}

#[test]
fn choosing_a_costlier_option_never_improves_the_light() {
    let engine = AssessmentEngine::standard();
    let table = RuleTable::standard();

    for question in table
        .questions()
        .iter()
        .filter(|question| question.id != "floor_type" && !question.multiple)
    {
        let mut options: Vec<_> = question
            .options
            .iter()
            .filter(|option| !option.hard_stop)
            .collect();
        options.sort_by_key(|option| option.points);

        let mut previous = Light::Green;
        for option in options {
            let mut answers = supportive_answers();
            answers.set(question.id, Selection::from(option.id));
            let verdict = engine.evaluate(&answers);
            assert!(!verdict.meta.hard_stop_triggered);
            assert!(
                verdict.light >= previous,
                "{}/{} improved the light",
                question.id,
                option.id
            );
            previous = verdict.light;
        }
    }
}

#[test]
fn adding_louder_sources_never_improves_the_light() {
    let engine = AssessmentEngine::standard();

    for floor in ["slab", "wood_crawl", "wood_living"] {
        let mut answers = supportive_answers();
        answers.set("floor_type", Selection::from(floor));
        answers.set("neighbors", Selection::from("20_50"));
        answers.set("time_of_use", Selection::from("evening"));

        let mut sources = vec!["voice"];
        let mut previous = engine.evaluate(&answers);
        for source in ["acoustic", "amps", "drums"] {
            sources.push(source);
            answers.set("use_cases", Selection::from(sources.clone()));
            let verdict = engine.evaluate(&answers);
            assert!(verdict.meta.points >= previous.meta.points, "{floor}/{source}");
            assert!(
                verdict.light >= previous.light,
                "{floor}/{source} improved the light"
            );
            previous = verdict;
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let mut answers = supportive_answers();
    answers.set("use_cases", Selection::from(vec!["amps", "acoustic"]));
    answers.set("expectation", Selection::from("silence"));

    let first = serde_json::to_vec(&evaluate(&answers)).expect("serializes");
    let second = serde_json::to_vec(&evaluate(&answers)).expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn stale_option_ids_do_not_break_evaluation() {
    let mut answers = supportive_answers();
    answers.set("budget", Selection::from("b_100plus"));
    answers.set("room_shape", Selection::from("l_shaped"));

    let verdict = evaluate(&answers);

    assert_eq!(verdict.light, Light::Green);
    assert_eq!(verdict.meta.points, 0);
    assert_eq!(verdict.meta.tags.len(), 11);
}
