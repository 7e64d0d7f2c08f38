//! Command implementations for the contraction-fix CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::fixer::ContractionFixer;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: FixerArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, reading stdin lines from `input` when no text was
/// given on the command line.
pub fn run_command<R: BufRead, W: Write>(args: &FixerArgs, input: R, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let fixer = ContractionFixer::new(args.fixer_config())?;
    log::info!(
        "Loaded {} dictionary entries in {:.2?}",
        fixer.len(),
        start.elapsed()
    );

    match &args.command {
        Command::Fix(text_args) => transform(&fixer, "fix", text_args, input, out, args),
        Command::Contract(text_args) => transform(&fixer, "contract", text_args, input, out, args),
        Command::Preview(preview_args) => preview(&fixer, preview_args, input, out, args),
    }
}

/// Expand or contract every input line.
fn transform<R: BufRead, W: Write>(
    fixer: &ContractionFixer,
    direction: &str,
    text_args: &TextArgs,
    input: R,
    out: &mut W,
    cli_args: &FixerArgs,
) -> Result<()> {
    let texts = collect_texts(text_args, input)?;
    let start = Instant::now();
    let outputs = if direction == "contract" {
        fixer.contract_batch(&texts[..])
    } else {
        fixer.fix_batch(&texts[..])
    };
    log::info!(
        "Processed {} lines in {:.2?}",
        texts.len(),
        start.elapsed()
    );

    let results = texts
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| TransformedText { input, output })
        .collect();
    output_transform(out, &TransformResults::new(direction, results), cli_args)?;

    let stats = fixer.cache_stats();
    log::debug!(
        "Cache: {} hits, {} misses, {} entries",
        stats.hits,
        stats.misses,
        stats.entries
    );
    Ok(())
}

/// Report matches without rewriting.
fn preview<R: BufRead, W: Write>(
    fixer: &ContractionFixer,
    args: &PreviewArgs,
    input: R,
    out: &mut W,
    cli_args: &FixerArgs,
) -> Result<()> {
    let texts = collect_texts(&args.text, input)?;
    let results = texts
        .into_iter()
        .map(|input| {
            let matches = fixer.preview(&input, args.context);
            PreviewedText { input, matches }
        })
        .collect();
    output_preview(out, &PreviewResults::new(results), cli_args)
}

/// Positional texts, else the lines of `--input`, else the lines of `input`.
fn collect_texts<R: BufRead>(args: &TextArgs, input: R) -> Result<Vec<String>> {
    if !args.texts.is_empty() {
        return Ok(args.texts.clone());
    }

    match &args.input {
        Some(path) => {
            log::info!("Reading input from: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            Ok(reader.lines().collect::<io::Result<Vec<_>>>()?)
        }
        None => Ok(input.lines().collect::<io::Result<Vec<_>>>()?),
    }
}
