//! End-to-end pipeline behavior on reference profiles.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use psyinsight::classifier::{GENERALIST_NAME, MatchResult};
use psyinsight::config::ClassifierConfig;
use psyinsight::consistency::{CheckField, ConsistencyValidator, Severity, apply_corrections};
use psyinsight::insight::rules::{GENERIC_STEPS, MIN_STEPS, WEAKNESS_RULES};
use psyinsight::insight::{self, WeaknessEntry};
use psyinsight::normalize::normalize;
use psyinsight::{AnalysisInput, HexacoScores, InsightEngine};

fn high_iq_profile() -> AnalysisInput {
    AnalysisInput {
        iq: 140.0,
        eq: 85.0,
        risk_tolerance: 75.0,
        hexaco: HexacoScores {
            honesty: 80.0,
            emotionality: 20.0,
            extraversion: 40.0,
            agreeableness: 50.0,
            conscientiousness: 70.0,
            openness: 85.0,
        },
    }
}

fn midrange_profile() -> AnalysisInput {
    AnalysisInput {
        iq: 100.0,
        eq: 100.0,
        risk_tolerance: 50.0,
        hexaco: HexacoScores::uniform(50.0),
    }
}

#[test]
fn high_iq_profile_matches_analytical_archetype() {
    let analysis = InsightEngine::default()
        .analyze_with_rng(&high_iq_profile(), &mut StdRng::seed_from_u64(11));

    assert!(
        ["Visionary Architect", "Precision Engineer"].contains(&analysis.archetype.name.as_str()),
        "got {}",
        analysis.archetype.name
    );
    assert!(analysis.archetype.confidence >= 60.0);
    assert!(!analysis.archetype.fallback);

    let insight = &analysis.insight;
    assert!(
        insight
            .strengths
            .iter()
            .any(|s| s.to_lowercase().contains("elite cognitive"))
    );
    assert!(
        insight
            .detailed_weaknesses
            .iter()
            .any(|w| w.title == "Cognitive Dissociation")
    );
    assert!(analysis.report.is_consistent);
    assert_eq!(
        insight.career,
        "Quantitative Trader / Research Scientist / Software Engineer"
    );
}

#[test]
fn midrange_profile_falls_back_to_generalist() {
    let config = ClassifierConfig::default();
    for seed in 0..20 {
        let analysis = InsightEngine::new(config.clone())
            .analyze_with_rng(&midrange_profile(), &mut StdRng::seed_from_u64(seed));
        assert_eq!(analysis.archetype.name, GENERALIST_NAME);
        assert!((85.0..=95.0).contains(&analysis.archetype.confidence));
        assert_eq!(analysis.archetype.confidence.fract(), 0.0);
        assert!((85..=95).contains(&analysis.insight.match_score));
    }
}

#[test]
fn contradicting_archetype_text_is_flagged() {
    let input = AnalysisInput {
        hexaco: HexacoScores {
            conscientiousness: 20.0,
            ..HexacoScores::uniform(50.0)
        },
        ..midrange_profile()
    };
    let vector = normalize(&input);
    let insight = insight::generate(
        &vector,
        &MatchResult {
            name: "Steady Planner".to_string(),
            description: "Highly disciplined and never misses a deadline.".to_string(),
            confidence: 70.0,
            fallback: false,
        },
    );

    let report = ConsistencyValidator::new().validate(&insight, &vector);
    let warning = report
        .failures()
        .find(|c| c.field == CheckField::Archetype)
        .expect("archetype check should fail");
    assert_eq!(warning.severity, Severity::Warning);
    assert!(warning.actual.contains("disciplined"));
    assert!(!report.is_consistent);
}

#[test]
fn invalid_weakness_is_removed_by_correction() {
    let input = AnalysisInput {
        hexaco: HexacoScores {
            conscientiousness: 80.0,
            ..HexacoScores::uniform(50.0)
        },
        ..midrange_profile()
    };
    let vector = normalize(&input);
    let mut generated = insight::generate(
        &vector,
        &MatchResult {
            name: GENERALIST_NAME.to_string(),
            description: String::new(),
            confidence: 90.0,
            fallback: true,
        },
    );
    generated.detailed_weaknesses.push(WeaknessEntry {
        title: "Execution Entropy".to_string(),
        description: "Plans dissolve.".to_string(),
        impact: "Deadlines slip.".to_string(),
    });
    generated.weaknesses = insight::flatten_weaknesses(&generated.detailed_weaknesses);

    let validator = ConsistencyValidator::new();
    let report = validator.validate(&generated, &vector);
    let error = report
        .failures()
        .find(|c| c.field == CheckField::DetailedWeaknesses)
        .expect("weakness check should fail");
    assert_eq!(error.severity, Severity::Error);

    let corrected = apply_corrections(&generated, &report);
    assert!(
        corrected
            .detailed_weaknesses
            .iter()
            .all(|w| w.title != "Execution Entropy")
    );
    assert!(corrected.weaknesses.iter().all(|w| !w.starts_with("Execution Entropy")));
}

#[test]
fn fixed_seed_gives_identical_json() {
    let config = ClassifierConfig {
        seed: Some(2024),
        ..ClassifierConfig::default()
    };
    let engine = InsightEngine::new(config);
    for input in [high_iq_profile(), midrange_profile()] {
        let a = serde_json::to_string(&engine.analyze(&input).insight).unwrap();
        let b = serde_json::to_string(&engine.analyze(&input).insight).unwrap();
        assert_eq!(a, b);
    }
}

fn sample_profiles() -> Vec<AnalysisInput> {
    let mut profiles = Vec::new();
    for iq in [75.0, 100.0, 125.0, 150.0] {
        for eq in [75.0, 95.0, 125.0] {
            for risk in [10.0, 50.0, 90.0] {
                for (h, e, x, a, c, o) in [
                    (10.0, 90.0, 10.0, 90.0, 10.0, 90.0),
                    (90.0, 10.0, 90.0, 10.0, 90.0, 10.0),
                    (50.0, 80.0, 20.0, 25.0, 35.0, 20.0),
                    (30.0, 50.0, 70.0, 85.0, 75.0, 60.0),
                ] {
                    profiles.push(AnalysisInput {
                        iq,
                        eq,
                        risk_tolerance: risk,
                        hexaco: HexacoScores {
                            honesty: h,
                            emotionality: e,
                            extraversion: x,
                            agreeableness: a,
                            conscientiousness: c,
                            openness: o,
                        },
                    });
                }
            }
        }
    }
    profiles
}

#[test]
fn surviving_weaknesses_always_hold() {
    let engine = InsightEngine::default();
    let validator = ConsistencyValidator::new();
    for (i, input) in sample_profiles().iter().enumerate() {
        let analysis = engine.analyze_with_rng(input, &mut StdRng::seed_from_u64(i as u64));
        let recheck = validator.validate(&analysis.insight, &normalize(input));
        assert!(
            recheck
                .checks
                .iter()
                .filter(|c| c.field == CheckField::DetailedWeaknesses)
                .all(|c| c.passed),
            "profile {i}: {:?}",
            recheck.failure_messages()
        );
        assert!(!analysis.insight.detailed_weaknesses.is_empty());
        assert!(analysis.insight.actionable_steps.len() >= 2);
        assert!((1..=5).contains(&analysis.insight.strengths.len()));
    }
}

#[test]
fn each_weakness_rule_step_fires_with_its_weakness() {
    let engine = InsightEngine::default().without_correction();
    for (i, input) in sample_profiles().iter().enumerate() {
        let generated = engine
            .analyze_with_rng(input, &mut StdRng::seed_from_u64(i as u64))
            .insight;
        let mut fired = 0;
        for rule in WEAKNESS_RULES {
            let has_weakness = generated
                .detailed_weaknesses
                .iter()
                .any(|w| w.title == rule.title);
            let has_step = generated.actionable_steps.iter().any(|s| s == rule.step);
            assert_eq!(has_weakness, has_step, "profile {i}: {}", rule.title);
            fired += usize::from(has_weakness);
        }

        let padding = if fired < MIN_STEPS { GENERIC_STEPS.len() } else { 0 };
        assert_eq!(generated.actionable_steps.len(), fired + padding, "profile {i}");
    }
}

#[test]
fn correction_is_idempotent() {
    let engine = InsightEngine::default();
    let validator = ConsistencyValidator::new();
    for (i, input) in sample_profiles().iter().enumerate() {
        let vector = normalize(input);
        let analysis = engine.analyze_with_rng(input, &mut StdRng::seed_from_u64(i as u64));
        let once = analysis.insight;
        let report = validator.validate(&once, &vector);
        assert!(report.corrections.is_empty(), "profile {i}");
        assert_eq!(apply_corrections(&once, &report), once);
    }
}
