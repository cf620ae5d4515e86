//! STEP artifact naming and writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Artifact file name: `{name}_{loft}_{bounce}_{timestamp}.step`, with the
/// name lowercased and whitespace collapsed to underscores so the result
/// is shell-friendly.
pub fn artifact_name(name: &str, loft: f64, bounce: f64, at: DateTime<Local>) -> String {
    let stem: String = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!(
        "{}_{}_{}_{}.step",
        stem,
        format_angle(loft),
        format_angle(bounce),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Whole angles print without the trailing `.0`.
fn format_angle(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Write STEP text under `dir`, creating the directory tree on demand.
pub fn write_step(dir: &Path, file_name: &str, content: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
