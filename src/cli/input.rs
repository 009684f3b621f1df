//! Shared argument and I/O helpers for subcommands

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Args;
use serde::Serialize;

use crate::domain::truthiness::TruthinessWeights;

/// Path value meaning "read from stdin"
const STDIN_PATH: &str = "-";

/// Per-run overrides for the composite score weights
#[derive(Debug, Clone, Default, Args)]
pub struct WeightArgs {
    /// Points subtracted per difference (default 10)
    #[arg(long, value_name = "POINTS")]
    pub difference_weight: Option<f64>,

    /// Percentage of the alignment score added (default 50)
    #[arg(long, value_name = "PERCENT")]
    pub alignment_weight: Option<f64>,

    /// Points added when the grounded answer admits an error (default 20)
    #[arg(long, value_name = "POINTS")]
    pub error_admission_bonus: Option<f64>,
}

impl WeightArgs {
    /// Overrides as weights, or `None` when no flag was given
    pub fn to_weights(&self) -> Option<TruthinessWeights> {
        let weights = TruthinessWeights {
            difference_weight: self.difference_weight,
            alignment_weight: self.alignment_weight,
            error_admission_bonus: self.error_admission_bonus,
        };

        if weights.is_empty() {
            None
        } else {
            Some(weights)
        }
    }
}

/// Fail when more than one input asks for stdin
pub(crate) fn ensure_single_stdin<'a>(paths: impl IntoIterator<Item = &'a Path>) -> anyhow::Result<()> {
    let stdin_count = paths
        .into_iter()
        .filter(|path| path.as_os_str() == STDIN_PATH)
        .count();

    if stdin_count > 1 {
        bail!("Only one input can be read from stdin");
    }

    Ok(())
}

/// Read a text input from a file, or from stdin for `-`
pub(crate) fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write `value` to stdout as JSON
pub(crate) fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;

    println!("{}", json);
    Ok(())
}

/// Scratch directory for file-based tests, removed on drop
#[cfg(test)]
pub(crate) struct FixtureDir {
    path: std::path::PathBuf,
}

#[cfg(test)]
impl FixtureDir {
    pub(crate) fn new(command: &str, case: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "truthiness-{}-{}-{}",
            command,
            std::process::id(),
            case
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let file = self.path.join(name);
        std::fs::write(&file, contents).unwrap();
        file
    }
}

#[cfg(test)]
impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
