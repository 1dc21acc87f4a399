use std::path::{Path, PathBuf};

use crate::resolve::{MOBILE_COLUMN, NAME_COLUMN_CANDIDATES};

/// Column name appended to every augmented table.
pub const ID_COLUMN: &str = "participant_id";

/// The reference input set: two categories by three groups.
pub const DEFAULT_FILES: &[&str] = &["1h.csv", "1m.csv", "2h.csv", "2m.csv", "3h.csv", "3m.csv"];

/// Configuration for one batch run.
///
/// Files are processed in order. Column names default to the survey
/// export contract; tests and callers with different exports can
/// override them.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub files: Vec<PathBuf>,
    pub mobile_column: String,
    pub name_candidates: Vec<String>,
    pub id_column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES.iter().map(PathBuf::from).collect(),
            mobile_column: MOBILE_COLUMN.to_string(),
            name_candidates: NAME_COLUMN_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            id_column: ID_COLUMN.to_string(),
        }
    }
}

impl BatchConfig {
    /// Default file set resolved inside a directory.
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            files: DEFAULT_FILES.iter().map(|f| dir.join(f)).collect(),
            ..Self::default()
        }
    }

    /// Default columns over an explicit file list.
    pub fn with_files(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }
}

/// Key for the result collection: the file name without its extension.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .to_string()
}
