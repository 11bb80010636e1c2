//! Directory scanning and batch validation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::validator::{validate_file, Strictness, ValidationError};

/// Aggregated result of validating every `.json` file in one directory.
///
/// `total == 0` means the scan matched nothing, which callers must render
/// differently from "all files valid".
#[derive(Debug)]
pub struct DirectorySummary {
    pub directory: PathBuf,
    pub total: usize,
    pub valid: usize,
    pub invalid: Vec<PathBuf>,
}

impl DirectorySummary {
    pub fn no_files_found(&self) -> bool {
        self.total == 0
    }

    pub fn all_valid(&self) -> bool {
        self.total > 0 && self.invalid.is_empty()
    }
}

pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
}

/// Gate for single-file mode: anything not named `*.json` is reported before
/// its contents are ever read.
pub fn require_json_extension(path: &Path) -> Result<(), ValidationError> {
    if has_json_extension(path) {
        Ok(())
    } else {
        Err(ValidationError::WrongExtension(path.to_path_buf()))
    }
}

/// Collect the `.json` files directly inside `dir`, sorted by file name.
///
/// The sort keeps batch output independent of filesystem enumeration order,
/// which differs across platforms.
pub fn collect_json_files(dir: &Path) -> Result<Vec<PathBuf>, ValidationError> {
    if !dir.is_dir() {
        return Err(ValidationError::NotADirectory(dir.to_path_buf()));
    }
    let mut json_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() && has_json_extension(&entry.path()) {
            json_files.push(entry.path());
        }
    }
    json_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(json_files)
}

/// Validate every `.json` file in `dir` sequentially, counting valid files
/// and recording invalid paths in scan order. One bad file never stops the
/// batch.
pub fn validate_directory(
    dir: &Path,
    strictness: Strictness,
) -> Result<DirectorySummary, ValidationError> {
    let files = collect_json_files(dir)?;
    let total = files.len();
    let mut valid = 0usize;
    let mut invalid = Vec::new();
    for path in files {
        if validate_file(&path, strictness).verdict.is_valid() {
            valid += 1;
        } else {
            invalid.push(path);
        }
    }
    Ok(DirectorySummary {
        directory: dir.to_path_buf(),
        total,
        valid,
        invalid,
    })
}
