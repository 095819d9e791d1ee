use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kubedocs_core::OverwritePolicy;
use log::info;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes run artifacts into one directory, atomically (temp file then
/// rename) and under an explicit overwrite policy.
pub struct FileWriter {
    dir: PathBuf,
    policy: OverwritePolicy,
}

impl FileWriter {
    pub fn new(dir: PathBuf, policy: OverwritePolicy) -> Self {
        Self { dir, policy }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `<sanitized stem>.md`. Returns `Ok(None)` when the policy
    /// left an existing file untouched.
    pub fn write_markdown(
        &self,
        stem: &str,
        content: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        let filename = format!("{}.md", sanitize_stem(stem));
        self.write_file(&filename, content.as_bytes())
    }

    /// Writes `<sanitized stem>.json`, same policy semantics as markdown.
    pub fn write_json(
        &self,
        stem: &str,
        content: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        let filename = format!("{}.json", sanitize_stem(stem));
        self.write_file(&filename, content.as_bytes())
    }

    fn write_file(&self, filename: &str, content: &[u8]) -> Result<Option<PathBuf>, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        if self.skips(&target) {
            return Ok(None);
        }

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        self.replace(tmp, &target)?;
        Ok(Some(target))
    }

    /// Moves an already-filled temp file into place under the policy.
    /// Used by the streaming downloads so a payload is never buffered.
    pub fn promote(
        &self,
        tmp: NamedTempFile,
        filename: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        if self.skips(&target) {
            return Ok(None);
        }
        self.replace(tmp, &target)?;
        Ok(Some(target))
    }

    fn skips(&self, target: &Path) -> bool {
        if self.policy == OverwritePolicy::SkipExisting && target.exists() {
            info!("File {:?} already exists, skipping", target);
            true
        } else {
            false
        }
    }

    fn replace(&self, tmp: NamedTempFile, target: &Path) -> Result<(), PersistError> {
        // Replace existing file if present to keep determinism.
        if target.exists() {
            fs::remove_file(target)?;
        }
        tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

/// Filesystem-safe filename stem: forbidden characters replaced, reserved
/// Windows device names patched, length capped.
fn sanitize_stem(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = "untitled".to_string();
    }
    if cleaned.len() > 80 {
        let mut cut = 80;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
    }
    if is_reserved_windows_name(&cleaned) {
        cleaned.push('_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
