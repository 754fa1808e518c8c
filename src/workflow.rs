//! Workflow command channel: how the action talks back to the CI
//! runner that invoked it.
//!
//! Commands are `::name::payload` lines on stdout; outputs go to the
//! file named by `GITHUB_OUTPUT` when the runner provides one.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Emit a debug line. Runners only render these when step debugging
/// is enabled.
pub fn debug(message: &str) {
    println!("::debug::{}", escape_data(message));
}

/// Report the run as failed. The runner renders this as an error
/// annotation; the caller still has to exit nonzero.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Publish a named output for downstream steps. Appends to the
/// `GITHUB_OUTPUT` file when the environment provides one, falling
/// back to the legacy stdout command otherwise.
pub fn set_output(name: &str, value: impl Display) -> Result<()> {
    let value = value.to_string();
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => append_output(Path::new(&path), name, &value),
        _ => {
            println!(
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(&value)
            );
            Ok(())
        }
    }
}

fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    writeln!(file, "{name}={value}")
        .with_context(|| format!("failed to append to output file {}", path.display()))?;
    Ok(())
}

/// Escape a command payload: `%`, CR and LF would otherwise terminate
/// or split the command line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property (a name, not a payload): payload rules
/// plus `:` and `,`, which delimit properties.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
