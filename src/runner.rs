use crate::evaluator::Evaluator;
use crate::lexer;
use crate::value::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome counts for one run over a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub evaluated: usize,
    pub failed: usize,
}

/// Evaluates every non-blank line of `source` in order.
///
/// Results are written one per line. A failing line gets a diagnostic and
/// the run moves on to the next line.
pub fn run<W: Write>(source: &str, filename: Option<&str>, out: &mut W) -> io::Result<RunSummary> {
    let mut evaluator = Evaluator::new();
    let mut summary = RunSummary::default();

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (normalized, tokens) = lexer::tokenize(line);
        debug!(line = index + 1, normalized = %normalized, "evaluating");

        match evaluator.evaluate_tokens(&tokens) {
            Ok(value) => {
                summary.evaluated += 1;
                writeln!(out, "{}", Value(value))?;
            }
            Err(error) => {
                summary.failed += 1;
                warn!(line = index + 1, %error, "line failed");
                error.write_report(&normalized, filename, &mut *out)?;
            }
        }
    }

    Ok(summary)
}

/// Runs the lines of the file at `path`, creating it empty if it is missing.
pub fn run_file<W: Write>(path: &Path, out: &mut W) -> io::Result<RunSummary> {
    if !path.exists() {
        warn!(path = %path.display(), "source file missing, creating it");
        writeln!(out, "No file of path: {} was found.", path.display())?;
        writeln!(out, "Creating file...")?;
        fs::File::create(path)?;
    }

    let source = fs::read_to_string(path)?;
    run(&source, path.to_str(), out)
}
