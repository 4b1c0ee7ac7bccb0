//! Writing the JSON and CSV documents to disk
//!
//! Both files are staged next to their targets and only persisted once both
//! are complete.

use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::types::Session;

use super::{to_csv, to_json};

/// Destination of the two output files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Derive `<stem>.json` and `<stem>.csv` from a path stem.
    pub fn from_stem(stem: impl AsRef<Path>) -> Self {
        let stem = stem.as_ref();
        Self {
            json: with_suffix(stem, ".json"),
            csv: with_suffix(stem, ".csv"),
        }
    }
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Write the JSON and CSV files for `sessions`.
///
/// Both documents are rendered and staged in temporary files next to their
/// targets before either target is replaced, so a failure while rendering or
/// writing leaves the previous outputs untouched. Staged files are removed
/// when dropped.
///
/// # Errors
/// `ScheduleError::Json` or `ScheduleError::Io`
pub fn write_outputs(sessions: &[Session], paths: &OutputPaths) -> Result<()> {
    let json = to_json(sessions)?;
    let csv = to_csv(sessions);

    let staged_json = stage(&paths.json, &json)?;
    let staged_csv = stage(&paths.csv, &csv)?;

    staged_json.persist(&paths.json).map_err(|e| e.error)?;
    staged_csv.persist(&paths.csv).map_err(|e| e.error)?;

    tracing::info!(
        sessions = sessions.len(),
        json = %paths.json.display(),
        csv = %paths.csv.display(),
        "wrote schedule files"
    );
    Ok(())
}

/// Write `contents` to a temporary file in the target's directory.
fn stage(target: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(staged.as_file_mut());
        out.write_all(contents.as_bytes())?;
        out.flush()?;
    }
    staged.as_file().sync_all()?;
    Ok(staged)
}
