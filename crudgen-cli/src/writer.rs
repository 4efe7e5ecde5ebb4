//! Writing generated files to disk.
//!
//! Existing files are never clobbered silently: callers pick a mode, and the
//! interactive one shows a diff of what would change before asking.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use crudgen::GeneratedFile;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use similar::TextDiff;

/// How to treat files that already exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteMode {
    /// Replace without asking
    Force,
    /// Leave in place and record a skip
    Skip,
    /// Show a diff and ask per file
    Ask,
}

/// What happened during a write pass.
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// Files written, relative to the project root
    pub written: Vec<PathBuf>,
    /// Existing files left untouched
    pub skipped: Vec<PathBuf>,
}

/// Write `files` under `project_root`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns an error when a file or directory cannot be created, or when an
/// existing file cannot be read for comparison.
pub fn write_files(
    project_root: &Path,
    files: &[GeneratedFile],
    mode: OverwriteMode,
) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for file in files {
        let full_path = project_root.join(&file.path);

        if full_path.exists() {
            let existing = fs::read_to_string(&full_path)
                .with_context(|| format!("Failed to read existing file: {}", full_path.display()))?;

            if existing == file.content {
                println!(
                    "  {} {} (unchanged)",
                    style("-").dim(),
                    style(file.path.display()).dim()
                );
                summary.skipped.push(file.path.clone());
                continue;
            }

            let keep = match mode {
                OverwriteMode::Force => false,
                OverwriteMode::Skip => true,
                OverwriteMode::Ask => !confirm_overwrite(&full_path, &existing, &file.content)?,
            };
            if keep {
                println!(
                    "  {} {} (exists, skipped)",
                    style("-").yellow(),
                    style(file.path.display()).dim()
                );
                summary.skipped.push(file.path.clone());
                continue;
            }
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

        println!(
            "  {} {} ({})",
            style("✓").green(),
            style(file.path.display()).dim(),
            style(&file.description).dim()
        );
        summary.written.push(file.path.clone());
    }

    Ok(summary)
}

fn confirm_overwrite(path: &Path, existing: &str, generated: &str) -> Result<bool> {
    println!(
        "\n{} {} already exists.",
        style("!").yellow().bold(),
        style(path.display()).bold()
    );

    let diff = TextDiff::from_lines(existing, generated);
    print!(
        "{}",
        diff.unified_diff()
            .context_radius(2)
            .header("existing", "generated")
    );

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Overwrite this file?")
        .default(false)
        .interact()
        .context("Failed to read overwrite confirmation")
}
