//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FixerArgs, OutputFormat};
use crate::error::Result;
use crate::fixer::MatchRecord;

/// One input line and what it was rewritten to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedText {
    pub input: String,
    pub output: String,
}

/// Result structure for the fix and contract commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResults {
    pub direction: String,
    pub changed: usize,
    pub results: Vec<TransformedText>,
}

impl TransformResults {
    pub fn new(direction: &str, results: Vec<TransformedText>) -> Self {
        let changed = results.iter().filter(|r| r.input != r.output).count();
        TransformResults {
            direction: direction.to_string(),
            changed,
            results,
        }
    }
}

/// Matches found in one input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewedText {
    pub input: String,
    pub matches: Vec<MatchRecord>,
}

/// Result structure for the preview command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResults {
    pub total_matches: usize,
    pub results: Vec<PreviewedText>,
}

impl PreviewResults {
    pub fn new(results: Vec<PreviewedText>) -> Self {
        let total_matches = results.iter().map(|r| r.matches.len()).sum();
        PreviewResults {
            total_matches,
            results,
        }
    }
}

/// Write fix/contract results in the requested format.
pub fn output_transform<W: Write>(
    out: &mut W,
    results: &TransformResults,
    args: &FixerArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(out, results, args),
        OutputFormat::Human => {
            for result in &results.results {
                writeln!(out, "{}", result.output)?;
            }
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "\n{} of {} lines changed ({})",
                    results.changed,
                    results.results.len(),
                    results.direction
                )?;
            }
            Ok(())
        }
    }
}

/// Write preview results in the requested format.
pub fn output_preview<W: Write>(
    out: &mut W,
    results: &PreviewResults,
    args: &FixerArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(out, results, args),
        OutputFormat::Human => {
            for previewed in &results.results {
                if previewed.matches.is_empty() {
                    continue;
                }
                writeln!(out, "{}", previewed.input)?;
                for record in &previewed.matches {
                    writeln!(out, "{}", format_record(record))?;
                }
            }
            if args.verbosity() > 0 {
                writeln!(out, "Found {} matches", results.total_matches)?;
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &FixerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

fn format_record(record: &MatchRecord) -> String {
    let marker = if record.is_change() { "->" } else { "==" };
    format!(
        "  {}..{}  '{}' {} '{}'  [{}]",
        record.start, record.end, record.text, marker, record.replacement, record.context
    )
}
