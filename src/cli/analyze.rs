//! `analyze` and `validate` commands.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::consistency::ConsistencyReport;
use crate::insight::Insight;
use crate::observability::create_observer;
use crate::pipeline::{Analysis, InsightEngine};
use crate::profile::AnalysisInput;
use crate::util::load_document;

pub fn run_analyze(
    config: &Config,
    input_path: &Path,
    seed: Option<u64>,
    format: OutputFormat,
    correct: bool,
) -> anyhow::Result<()> {
    let mut classifier = config.classifier.clone();
    if seed.is_some() {
        classifier.seed = seed;
    }
    let mut engine = InsightEngine::try_new(classifier)?
        .with_observer(Arc::from(create_observer(config.logging.observer)));
    if !correct {
        engine = engine.without_correction();
    }

    let analysis = engine.analyze_file(input_path)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print!("{}", render_report(&analysis)),
    }
    Ok(())
}

pub fn run_validate(
    config: &Config,
    insight_path: &Path,
    input_path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let insight: Insight = load_document(insight_path)?;
    let input = AnalysisInput::from_path(input_path)?;

    let engine = InsightEngine::new(config.classifier.clone());
    let report = engine.validate(&insight, &input);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_checks(&report)),
    }

    if report.has_errors() {
        anyhow::bail!(
            "{} failed with error-severity inconsistencies",
            insight_path.display()
        );
    }
    Ok(())
}

/// Human-readable report for an analysis.
pub fn render_report(analysis: &Analysis) -> String {
    let insight = &analysis.insight;
    let mut out = String::new();

    let _ = writeln!(out, "{}\n", insight.raw);
    let _ = writeln!(out, "Archetype: {} ({}%)", insight.archetype, insight.match_score);
    let _ = writeln!(out, "  {}", insight.archetype_description);

    let _ = writeln!(out, "\nStrengths:");
    for strength in &insight.strengths {
        let _ = writeln!(out, "  - {strength}");
    }

    let _ = writeln!(out, "\nWeaknesses:");
    for weakness in &insight.detailed_weaknesses {
        let _ = writeln!(out, "  - {}: {}", weakness.title, weakness.description);
        let _ = writeln!(out, "    Impact: {}", weakness.impact);
    }

    let _ = writeln!(out, "\nActionable steps:");
    for (i, step) in insight.actionable_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }

    let _ = writeln!(out, "\nCareer: {}", insight.career);
    let _ = writeln!(out, "System: {} / {}", insight.cpu_type, insight.os_type);
    let _ = writeln!(out);
    out.push_str(&render_checks(&analysis.report));
    if analysis.corrected {
        let _ = writeln!(out, "Corrections applied.");
    }
    out
}

fn render_checks(report: &ConsistencyReport) -> String {
    let mut out = String::new();
    if report.is_consistent {
        let _ = writeln!(out, "Consistency: OK ({} checks)", report.checks.len());
        return out;
    }
    let messages = report.failure_messages();
    let _ = writeln!(
        out,
        "Consistency: {} of {} checks failed",
        messages.len(),
        report.checks.len()
    );
    for message in messages {
        let _ = writeln!(out, "  {message}");
    }
    out
}
