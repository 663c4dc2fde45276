use crate::SpellingError;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    file: String,
    total_errors: usize,
    errors: &'a [SpellingError],
}

pub fn print_findings(
    file_path: &Path,
    findings: &[SpellingError],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_findings(findings, colored_output),
        OutputFormat::Json => print_json_findings(file_path, findings),
    }
}

fn print_text_findings(findings: &[SpellingError], colored_output: bool) {
    for finding in findings {
        if colored_output {
            println!(
                "At ({}, {})  {}",
                finding.row.to_string().blue().bold(),
                finding.col.to_string().blue().bold(),
                format!("\"{}\"", finding.word).red().bold()
            );
        } else {
            println!("At ({}, {})  \"{}\"", finding.row, finding.col, finding.word);
        }
    }

    print_summary(findings.len(), colored_output);
}

fn print_summary(total_errors: usize, colored_output: bool) {
    if colored_output {
        let count = if total_errors == 0 {
            total_errors.to_string().green().bold()
        } else {
            total_errors.to_string().red().bold()
        };
        println!("- Found a total of {} errors.", count);
    } else {
        println!("- Found a total of {} errors.", total_errors);
    }
}

fn print_json_findings(file_path: &Path, findings: &[SpellingError]) {
    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_errors: findings.len(),
        errors: findings,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
