use fuzzmatch::{FuzzConfig, FuzzyMatcher, ScoreSeries, ZScoreFormula};

const TEST_MSG: &str = "Hi first time in your how room miss muffet, are you new? old are you?";
const FUZZY_ARGS: &str = "how firts muffet giraffe lights";

fn queries() -> Vec<&'static str> {
    FUZZY_ARGS.split(' ').collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn chat_message_batch_with_typos() {
    let fm = FuzzyMatcher::default();
    let series = fm.run_batch(TEST_MSG, &queries(), true).unwrap();
    assert_eq!(
        series.entries(),
        &[Some(-88), Some(-87), Some(-99), None, None]
    );
    assert_eq!(series.sentinel_values(), vec![-88, -87, -99, 0, 0]);

    let report = fm.analyze(&series).unwrap();
    assert_eq!(report.matched_scores, vec![-88, -87, -99]);
    assert!(close(report.match_ratio, 0.6));
    assert!(close(report.mean, -54.8));
    assert!(close(report.match_mean.unwrap(), -274.0 / 3.0));
    assert_eq!(report.min_max, Some((-99, -87)));
    assert_eq!(report.range, Some(12));

    let z = report.z_scores.unwrap();
    let offset = report.mean / report.std_deviation;
    assert_eq!(z.len(), 5);
    assert!(close(z[3], -offset));
    assert_eq!(report.match_z_scores.unwrap().len(), 5);
}

#[test]
fn chat_message_batch_without_typos() {
    let fm = FuzzyMatcher::default();
    let outcomes = fm.outcomes(TEST_MSG, &queries(), false).unwrap();

    let how = outcomes[0].as_match().unwrap();
    assert!(how.used_strict_phase);
    assert_eq!(how.score, -88);

    // "firts" only survives the greedy pass without a transposition.
    let firts = outcomes[1].as_match().unwrap();
    assert!(!firts.used_strict_phase);
    assert!(!firts.typo_used);
    assert_eq!(firts.score, -43_064);

    assert_eq!(outcomes[2].score(), Some(-99));
    assert!(!outcomes[3].is_match());
    assert!(!outcomes[4].is_match());
}

#[test]
fn strict_phase_scores_better_than_greedy() {
    let fm = FuzzyMatcher::default();
    let typo = fm.match_pair("firts", TEST_MSG, true).unwrap();
    let no_typo = fm.match_pair("firts", TEST_MSG, false).unwrap();
    assert!(typo.score().unwrap() > no_typo.score().unwrap());
}

#[test]
fn yaml_configured_pipeline() {
    let yaml = r#"
version: "1.0"
name: "chat triggers"
max_target_len: 200
cache:
  capacity: 32
matcher:
  typo_penalty: 30
stats:
  z_score: "standard"
"#;
    let cfg = FuzzConfig::from_yaml(yaml).unwrap();
    assert_eq!(cfg.stats.z_score, ZScoreFormula::Standard);

    let fm = FuzzyMatcher::new(&cfg).unwrap();
    let series = fm.run_batch(TEST_MSG, &queries(), true).unwrap();
    assert_eq!(series.entries()[1], Some(-3 - 30 - 64));

    let report = fm.analyze(&series).unwrap();
    let z = report.z_scores.unwrap();
    assert!(close(z.iter().sum::<f64>(), 0.0));
}

#[test]
fn report_serializes_for_display() {
    let fm = FuzzyMatcher::default();
    let series = fm.run_batch(TEST_MSG, &queries(), true).unwrap();
    let report = fm.analyze(&series).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scores"], serde_json::json!([-88, -87, -99, null, null]));
    assert_eq!(json["range"], 12);

    let back: ScoreSeries = serde_json::from_value(json["scores"].clone()).unwrap();
    assert_eq!(back, series);
}
