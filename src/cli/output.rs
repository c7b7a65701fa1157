//! Diagnostics on the stderr stream.
//!
//! The HTML/JSON result owns stdout; everything here goes to stderr so the
//! output document is never polluted by progress or summary messages.

use colored::*;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Progress message, suppressed by `--quiet`.
pub fn progress(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("{}", message);
    }
}

/// End-of-run summary with token counts and wall-clock time.
pub fn print_summary(
    total_tokens: usize,
    misspelled: usize,
    elapsed: Duration,
    colored_output: bool,
    quiet: bool,
) {
    if quiet {
        return;
    }

    let timing = format!("{:.1}ms", elapsed.as_secs_f64() * 1000.0);

    if misspelled == 0 {
        if colored_output {
            eprintln!(
                "{} ({} words, {})",
                "✓ No spelling errors found!".green().bold(),
                total_tokens,
                timing
            );
        } else {
            eprintln!("✓ No spelling errors found! ({} words, {})", total_tokens, timing);
        }
    } else {
        let error_word = if misspelled == 1 { "word" } else { "words" };
        if colored_output {
            eprintln!(
                "{} {} of {} {} flagged ({})",
                "✗".red().bold(),
                misspelled.to_string().red().bold(),
                total_tokens,
                error_word,
                timing
            );
        } else {
            eprintln!(
                "✗ {} of {} {} flagged ({})",
                misspelled, total_tokens, error_word, timing
            );
        }
    }
}
