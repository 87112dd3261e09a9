//! Command implementations for the phone-simi CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SimilarityConfig;
use crate::error::Result;
use crate::similarity::{
    Outcome, PhoneSimilarity, TextSimilarity, evaluate, str_distance, usage,
};

/// One input line of a batch file. Missing fields are treated as null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BatchRecord {
    text1: Option<String>,
    text2: Option<String>,
}

/// Execute a CLI command.
pub fn execute_command(args: PhoneSimiArgs) -> Result<()> {
    let scorer = build_scorer(&args)?;

    match &args.command {
        Command::Compare(compare_args) => {
            let result = compare_result(compare_args, &scorer);
            output_result("Comparison", &result, &args)
        }
        Command::Distance(distance_args) => {
            let result = distance_result(distance_args, &scorer);
            output_result("Edit distance", &result, &args)
        }
        Command::Batch(batch_args) => {
            let results = batch_results(batch_args, &scorer)?;
            output_result("Batch scoring complete", &results, &args)
        }
        Command::Usage(usage_args) => {
            println!("{}", usage(&usage_args.name));
            Ok(())
        }
    }
}

/// Resolve the configuration from the config file and CLI overrides.
pub fn load_config(args: &PhoneSimiArgs) -> Result<SimilarityConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            SimilarityConfig::from_file(path)?
        }
        None => SimilarityConfig::default(),
    };

    if let Some(rule) = args.rule {
        config = config.with_rule(rule.into());
    }

    config.validate()?;
    Ok(config)
}

/// Build the scorer the command line asks for.
pub fn build_scorer(args: &PhoneSimiArgs) -> Result<PhoneSimilarity> {
    let config = load_config(args)?;
    log::debug!("using config {config:?}");
    Ok(PhoneSimilarity::new(config))
}

/// Score two texts. A failed comparison is reported as a row without a score.
pub fn compare_result(args: &CompareArgs, scorer: &PhoneSimilarity) -> CompareResult {
    let outcome = evaluate(scorer, Some(&args.text1), Some(&args.text2));

    let comparison = match outcome {
        Outcome::Score { .. } => scorer.explain(&args.text1, &args.text2).ok(),
        _ => None,
    };

    let message = match &outcome {
        Outcome::Failed { message } => Some(message.clone()),
        _ => None,
    };

    CompareResult {
        text1: args.text1.clone(),
        text2: args.text2.clone(),
        rule: scorer.config().rule.name().to_string(),
        status: outcome.status().to_string(),
        reversed_text1: comparison.as_ref().map(|c| c.source.clone()),
        reversed_text2: comparison.as_ref().map(|c| c.target.clone()),
        distance: comparison.as_ref().map(|c| c.distance),
        score: outcome.score(),
        message,
    }
}

/// Edit distance without reversal or truncation.
pub fn distance_result(args: &DistanceArgs, scorer: &PhoneSimilarity) -> DistanceResult {
    let rule = scorer.config().rule;

    DistanceResult {
        source: args.source.clone(),
        target: args.target.clone(),
        rule: rule.name().to_string(),
        distance: str_distance(&args.source, &args.target, rule),
    }
}

/// Score a JSON Lines file and time the run.
pub fn batch_results(args: &BatchArgs, scorer: &PhoneSimilarity) -> Result<BatchResults> {
    log::info!("scoring pairs from {}", args.input.display());

    let start_time = Instant::now();
    let mut results = score_file(&args.input, scorer)?;
    results.summary.duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "scored {} of {} pairs ({} null, {} failed)",
        results.summary.scored,
        results.summary.total,
        results.summary.null_input,
        results.summary.failed
    );

    if args.summary_only {
        results.rows.clear();
    }

    Ok(results)
}

/// Score every non-blank line of `path` with `strategy`.
pub fn score_file<S>(path: &Path, strategy: &S) -> Result<BatchResults>
where
    S: TextSimilarity + ?Sized,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut summary = BatchSummary::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (record, outcome) = match serde_json::from_str::<BatchRecord>(&line) {
            Ok(record) => {
                let outcome =
                    evaluate(strategy, record.text1.as_deref(), record.text2.as_deref());
                (record, outcome)
            }
            Err(e) => {
                log::warn!("skipping malformed line {}: {}", line_num + 1, e);
                let outcome = Outcome::Failed {
                    message: format!("malformed line: {e}"),
                };
                (BatchRecord::default(), outcome)
            }
        };

        summary.total += 1;
        let status = outcome.status();
        let (score, message) = match outcome {
            Outcome::Score { score } => {
                summary.scored += 1;
                (Some(score), None)
            }
            Outcome::NullInput => {
                summary.null_input += 1;
                (Some(0.0), None)
            }
            Outcome::Failed { message } => {
                summary.failed += 1;
                (None, Some(message))
            }
        };

        rows.push(BatchRow {
            line: line_num + 1,
            text1: record.text1,
            text2: record.text2,
            status: status.to_string(),
            score,
            message,
        });
    }

    Ok(BatchResults { rows, summary })
}
