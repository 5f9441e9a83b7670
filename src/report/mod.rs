pub mod types;

pub use types::{AnalysisResult, Grade};

use crate::config::OutputFormat;
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output the report to stdout in `format`, or to a markdown file when
/// `output_path` is set.
#[instrument(skip(result), fields(grade = %result.grade, score = result.total_score))]
pub fn output(
    result: &AnalysisResult,
    format: OutputFormat,
    output_path: Option<&Path>,
) -> Result<(), ReportError> {
    match (output_path, format) {
        (Some(path), _) => {
            debug!(path = %path.display(), "writing report to file");
            write_markdown_report(result, path)
        }
        (None, OutputFormat::Json) => {
            debug!("writing JSON report to stdout");
            println!("{}", render_json(result)?);
            Ok(())
        }
        (None, OutputFormat::Terminal) => {
            debug!("writing report to terminal");
            print_terminal_report(result);
            Ok(())
        }
    }
}

/// One-line grade and score, for quick checks.
pub fn inline_summary(result: &AnalysisResult) -> String {
    format!("Grade: {} | Score: {}", result.grade, result.total_score)
}

pub fn render_json(result: &AnalysisResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Format and print the report to the terminal with colors.
///
/// Grade: C
/// Total Risk Score: 40
///   Performance: 40 | Scalability: 0 | Maintainability: 0
///
/// [Performance] SELECT * detected
///     Specify only required columns.
fn print_terminal_report(result: &AnalysisResult) {
    println!();
    println!("Grade: {}", colorize_grade(result.grade));
    println!("Total Risk Score: {}", result.total_score.to_string().bold());
    println!(
        "  Performance: {} | Scalability: {} | Maintainability: {}",
        result.breakdown.performance_score,
        result.breakdown.scalability_score,
        result.breakdown.maintainability_score
    );
    println!();

    if result.risks.is_empty() {
        println!("  No risks detected.");
    } else {
        for risk in &result.risks {
            println!("{} {}", format!("[{}]", risk.category).cyan().bold(), risk.message);
            println!("    {}", risk.suggestion.dimmed());
        }
    }
    println!();
}

fn render_markdown(result: &AnalysisResult) -> String {
    let mut md = String::new();
    md.push_str("# SQL Risk Report\n\n");
    md.push_str(&format!("**Grade: {}**\n\n", result.grade));
    md.push_str(&format!("**Total Risk Score:** {}\n\n", result.total_score));
    md.push_str(&format!(
        "- Performance: {}\n- Scalability: {}\n- Maintainability: {}\n\n",
        result.breakdown.performance_score,
        result.breakdown.scalability_score,
        result.breakdown.maintainability_score
    ));

    md.push_str("## Risks\n\n");
    if result.risks.is_empty() {
        md.push_str("No risks detected.\n");
    } else {
        for risk in &result.risks {
            md.push_str(&format!(
                "- **[{}]** {} — _{}_\n",
                risk.category, risk.message, risk.suggestion
            ));
        }
    }
    md
}

fn write_markdown_report(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, render_markdown(result))?;
    Ok(())
}

/// Helper to colorize a grade letter for terminal output.
fn colorize_grade(grade: Grade) -> colored::ColoredString {
    let letter = grade.to_string();
    match grade {
        Grade::A | Grade::B => letter.green().bold(),
        Grade::C => letter.yellow().bold(),
        Grade::D | Grade::F => letter.red().bold(),
    }
}
