//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, PhoneSimiArgs};
use crate::error::Result;

/// Result structure for a single comparison.
///
/// A failed comparison keeps `status` and `message` and leaves the rest empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResult {
    pub text1: String,
    pub text2: String,
    pub rule: String,
    pub status: String,
    pub reversed_text1: Option<String>,
    pub reversed_text2: Option<String>,
    pub distance: Option<usize>,
    pub score: Option<f64>,
    pub message: Option<String>,
}

/// Result structure for a raw distance.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub rule: String,
    pub distance: usize,
}

/// One scored line of a batch file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRow {
    pub line: usize,
    pub text1: Option<String>,
    pub text2: Option<String>,
    pub status: String,
    pub score: Option<f64>,
    pub message: Option<String>,
}

/// Counts over a batch run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scored: usize,
    pub null_input: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Batch rows with their summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &PhoneSimiArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Human layouts with their own renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HumanLayout {
    Compare,
    Batch,
    Generic,
}

fn human_layout<T>() -> HumanLayout {
    let type_name = std::any::type_name::<T>();
    if type_name.ends_with("BatchResults") {
        HumanLayout::Batch
    } else if type_name.ends_with("CompareResult") {
        HumanLayout::Compare
    } else {
        HumanLayout::Generic
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PhoneSimiArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match human_layout::<T>() {
        HumanLayout::Batch => output_batch_results_human(&value, args),
        HumanLayout::Compare => output_compare_human(&value, args),
        HumanLayout::Generic => output_generic_human(&value, args),
    }
}

/// Output a comparison in human format. Failures print as "no result".
fn output_compare_human(value: &Value, args: &PhoneSimiArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if obj.get("status").and_then(|s| s.as_str()) != Some("failed") {
        return output_generic_human(value, args);
    }

    for key in ["text1", "text2", "rule"] {
        if let Some(val) = obj.get(key) {
            println!("{key}: {}", format_value(val));
        }
    }
    println!("score: no result");
    if let Some(reason) = obj.get("message").and_then(|m| m.as_str()) {
        println!("reason: {reason}");
    }

    Ok(())
}

/// Output batch results in human format.
fn output_batch_results_human(value: &Value, _args: &PhoneSimiArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(rows) = obj.get("rows").and_then(|r| r.as_array())
        && !rows.is_empty()
    {
        println!("Batch Results:");
        println!("══════════════");

        for row in rows {
            let line = row.get("line").and_then(|l| l.as_u64()).unwrap_or(0);
            let text1 = row.get("text1").map(format_value).unwrap_or_default();
            let text2 = row.get("text2").map(format_value).unwrap_or_default();
            let status = row.get("status").and_then(|s| s.as_str()).unwrap_or("");

            match row.get("score").and_then(|s| s.as_f64()) {
                Some(score) => println!("{line:>6}  {text1} | {text2}  {score:.4}"),
                None => println!("{line:>6}  {text1} | {text2}  ({status})"),
            }
        }
        println!();
    }

    if let Some(summary) = obj.get("summary").and_then(|s| s.as_object()) {
        println!("Summary:");
        println!("────────");
        for key in ["total", "scored", "null_input", "failed"] {
            if let Some(count) = summary.get(key).and_then(|c| c.as_u64()) {
                println!("{key}: {count}");
            }
        }
        if let Some(duration) = summary.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Time: {duration}ms");
        }
    }

    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &Value, _args: &PhoneSimiArgs) -> Result<()> {
    match value {
        Value::Object(obj) => {
            for (key, val) in obj.iter().filter(|(_, val)| !val.is_null()) {
                println!("{key}: {}", format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PhoneSimiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &PhoneSimiArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    // Batch results flatten to their rows.
    let value = match value {
        Value::Object(mut obj) if obj.contains_key("rows") => {
            obj.remove("rows").unwrap_or(Value::Array(Vec::new()))
        }
        other => other,
    };

    for line in csv_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as CSV lines, header first.
fn csv_lines(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    match value {
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                if let Some(obj) = item.as_object() {
                    if i == 0 {
                        let headers: Vec<String> = obj.keys().cloned().collect();
                        lines.push(headers.join(","));
                    }
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    lines.push(values.join(","));
                }
            }
        }
        Value::Object(obj) => {
            let headers: Vec<String> = obj.keys().cloned().collect();
            lines.push(headers.join(","));
            let values: Vec<String> = obj.values().map(format_csv_value).collect();
            lines.push(values.join(","));
        }
        _ => {
            lines.push("value".to_string());
            lines.push(format_csv_value(value));
        }
    }

    lines
}

/// Render a value for display. Strings print bare, everything else as compact JSON.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a value as one CSV field. Null becomes an empty field.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => quote_csv_field(&format_value(other)),
    }
}

fn quote_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value(&json!("13800138000")), "13800138000");
        assert_eq!(format_csv_value(&json!("a,b")), "\"a,b\"");
        assert_eq!(format_csv_value(&json!("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(format_csv_value(&json!(0.75)), "0.75");
        assert_eq!(format_csv_value(&Value::Null), "");
        assert_eq!(format_csv_value(&json!(["a", "b"])), "\"[\"\"a\"\",\"\"b\"\"]\"");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("test")), "test");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(false)), "false");
        assert_eq!(format_value(&Value::Null), "null");
        assert_eq!(format_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_csv_lines_rows() {
        let rows = json!([
            {"line": 1, "score": 0.75},
            {"line": 2, "score": null},
        ]);
        assert_eq!(csv_lines(&rows), vec!["line,score", "1,0.75", "2,"]);
    }

    #[test]
    fn test_csv_lines_single_object() {
        let value = json!({"distance": 0, "rule": "literal"});
        assert_eq!(csv_lines(&value), vec!["distance,rule", "0,literal"]);
        assert_eq!(csv_lines(&json!(0.5)), vec!["value", "0.5"]);
    }

    #[test]
    fn test_human_layout_dispatch() {
        assert_eq!(human_layout::<BatchResults>(), HumanLayout::Batch);
        assert_eq!(human_layout::<CompareResult>(), HumanLayout::Compare);
        assert_eq!(human_layout::<DistanceResult>(), HumanLayout::Generic);
        assert_eq!(human_layout::<BatchSummary>(), HumanLayout::Generic);
    }

    fn human_args() -> PhoneSimiArgs {
        PhoneSimiArgs::try_parse_from(["phone-simi", "-q", "usage"]).unwrap()
    }

    #[test]
    fn test_output_batch_results_human() {
        let results = BatchResults {
            rows: vec![
                BatchRow {
                    line: 1,
                    text1: Some("1234".to_string()),
                    text2: Some("234".to_string()),
                    status: "score".to_string(),
                    score: Some(0.75),
                    message: None,
                },
                BatchRow {
                    line: 2,
                    text1: None,
                    text2: None,
                    status: "failed".to_string(),
                    score: None,
                    message: Some("malformed line".to_string()),
                },
            ],
            summary: BatchSummary {
                total: 2,
                scored: 1,
                failed: 1,
                ..Default::default()
            },
        };
        assert!(output_result("Batch", &results, &human_args()).is_ok());
    }

    #[test]
    fn test_output_failed_compare_human() {
        let result = CompareResult {
            text1: "1234".to_string(),
            text2: "1".to_string(),
            rule: "literal".to_string(),
            status: "failed".to_string(),
            reversed_text1: None,
            reversed_text2: None,
            distance: None,
            score: None,
            message: Some("Input too long".to_string()),
        };
        assert!(output_result("Comparison", &result, &human_args()).is_ok());
    }
}
