//! Rendering and persisting the filtered roster.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{sleeper::types::FilteredRoster, Result};

/// Where the roster lands when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "docs/players_2025.json";

/// Render the roster as stable, diff-friendly JSON.
///
/// Keys are sorted (map and record level), indentation is two spaces and
/// non-ASCII characters are written literally.
pub fn render_roster(roster: &FilteredRoster) -> Result<String> {
    Ok(serde_json::to_string_pretty(roster)?)
}

/// Directory the output file lives in; a bare file name means the current directory.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `contents` to `path` so readers see either the old file or the new
/// one, never a partial write. Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    debug!(path = %path.display(), bytes = contents.len(), "roster written");
    Ok(())
}

/// Render and atomically write the roster.
pub fn write_roster(path: &Path, roster: &FilteredRoster) -> Result<()> {
    let json = render_roster(roster)?;
    write_atomic(path, &json)
}
