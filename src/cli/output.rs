use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::log;

/// Serialize `value` as JSON to a file or stdout.
pub(super) fn write_json<T: Serialize>(
    value: &T,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let formatted = format_json(value, pretty)?;

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("emit"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Print one item per line to stdout.
pub(super) fn write_lines<'a>(items: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for item in items {
        writeln!(stdout, "{item}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn format_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
