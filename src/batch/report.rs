use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::resolve::ColumnKind;

/// What happened to a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// Identifier column derived and table added to the collection.
    #[serde(rename = "PROCESSED")]
    Processed,
    /// The file does not exist on disk.
    #[serde(rename = "MISSING_FILE")]
    MissingFile,
    /// The file loaded but carries neither identifying column.
    #[serde(rename = "NO_IDENTIFYING_COLUMN")]
    NoIdentifyingColumn,
    /// The file exists but could not be read as CSV.
    #[serde(rename = "UNREADABLE")]
    Unreadable,
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Processed => write!(f, "PROCESSED"),
            FileOutcome::MissingFile => write!(f, "MISSING_FILE"),
            FileOutcome::NoIdentifyingColumn => write!(f, "NO_IDENTIFYING_COLUMN"),
            FileOutcome::Unreadable => write!(f, "UNREADABLE"),
        }
    }
}

/// Per-file diagnostic record.
///
/// Every failure reason is a typed field here, not only printed text, so
/// callers can act on reports programmatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub base_name: String,
    pub found: bool,
    pub outcome: FileOutcome,
    pub column_kind: ColumnKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub rows: usize,
    pub unique_ids: usize,
    pub duplicates: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub available_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn processed(
        file: String,
        base_name: String,
        column_kind: ColumnKind,
        column: String,
        rows: usize,
        unique_ids: usize,
    ) -> Self {
        Self {
            file,
            base_name,
            found: true,
            outcome: FileOutcome::Processed,
            column_kind,
            column: Some(column),
            rows,
            unique_ids,
            duplicates: unique_ids != rows,
            available_columns: vec![],
            error: None,
        }
    }

    pub fn missing_file(file: String, base_name: String) -> Self {
        Self {
            file,
            base_name,
            found: false,
            outcome: FileOutcome::MissingFile,
            column_kind: ColumnKind::None,
            column: None,
            rows: 0,
            unique_ids: 0,
            duplicates: false,
            available_columns: vec![],
            error: None,
        }
    }

    pub fn no_identifying_column(
        file: String,
        base_name: String,
        available_columns: Vec<String>,
    ) -> Self {
        Self {
            file,
            base_name,
            found: true,
            outcome: FileOutcome::NoIdentifyingColumn,
            column_kind: ColumnKind::None,
            column: None,
            rows: 0,
            unique_ids: 0,
            duplicates: false,
            available_columns,
            error: None,
        }
    }

    pub fn unreadable(file: String, base_name: String, error: String) -> Self {
        Self {
            file,
            base_name,
            found: true,
            outcome: FileOutcome::Unreadable,
            column_kind: ColumnKind::None,
            column: None,
            rows: 0,
            unique_ids: 0,
            duplicates: false,
            available_columns: vec![],
            error: Some(error),
        }
    }
}

/// Full report for one batch run, in input-file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub version: String,
    pub created: String,
    pub files: Vec<FileReport>,
    pub processed: usize,
    pub skipped: usize,
    pub files_with_duplicates: usize,
}

impl BatchReport {
    pub fn new(files: Vec<FileReport>) -> Self {
        let processed = files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Processed)
            .count();
        let files_with_duplicates = files.iter().filter(|f| f.duplicates).count();
        Self {
            version: "pidgen.report.v0".to_string(),
            created: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            processed,
            skipped: files.len() - processed,
            files_with_duplicates,
            files,
        }
    }

    /// True when any file was skipped or produced duplicate identifiers.
    pub fn has_findings(&self) -> bool {
        self.skipped > 0 || self.files_with_duplicates > 0
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("batch report serialization cannot fail")
    }

    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for f in &self.files {
            lines.push(format!("Processing {}...", f.file));
            match f.outcome {
                FileOutcome::Processed => {
                    lines.push(format!(
                        "  using {} column: {}",
                        f.column_kind,
                        f.column.as_deref().unwrap_or("")
                    ));
                    lines.push(format!(
                        "  {}: {} unique participant ids out of {} rows",
                        f.base_name, f.unique_ids, f.rows
                    ));
                    if f.duplicates {
                        lines.push(format!("  WARNING: duplicate participant ids in {}", f.file));
                    }
                }
                FileOutcome::MissingFile => {
                    lines.push("  ERROR: file not found".to_string());
                }
                FileOutcome::NoIdentifyingColumn => {
                    lines.push("  ERROR: neither mobile nor name column found".to_string());
                    lines.push(format!(
                        "  available columns: {}",
                        f.available_columns.join(", ")
                    ));
                }
                FileOutcome::Unreadable => {
                    lines.push(format!(
                        "  ERROR: {}",
                        f.error.as_deref().unwrap_or("unreadable file")
                    ));
                }
            }
        }
        lines.push(format!(
            "run complete: {} processed, {} skipped, {} with duplicate ids",
            self.processed, self.skipped, self.files_with_duplicates
        ));
        lines.join("\n")
    }
}
