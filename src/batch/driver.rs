use std::collections::{BTreeMap, HashSet};

use crate::batch::config::{base_name, BatchConfig};
use crate::batch::report::{BatchReport, FileReport};
use crate::ident::derive_ids;
use crate::resolve::{resolve_column, ColumnChoice};
use crate::table::{read_table, Table, Value};

/// Everything a batch run produces: the augmented tables keyed by base
/// name, plus the ordered per-file reports.
#[derive(Debug)]
pub struct BatchRun {
    pub tables: BTreeMap<String, Table>,
    pub report: BatchReport,
}

/// Process every configured file in order.
///
/// No file is fatal: a missing file, an unreadable file, a missing
/// identifying column, or duplicate identifiers never stop the run.
/// Skipped files get a report entry but no collection entry.
pub fn run_batch(config: &BatchConfig) -> BatchRun {
    let mut tables = BTreeMap::new();
    let mut reports = Vec::with_capacity(config.files.len());

    for path in &config.files {
        let file = path.display().to_string();
        let base = base_name(path);

        if !path.exists() {
            reports.push(FileReport::missing_file(file, base));
            continue;
        }

        let mut table = match read_table(path) {
            Ok(table) => table,
            Err(e) => {
                reports.push(FileReport::unreadable(file, base, e.to_string()));
                continue;
            }
        };

        let choice = resolve_column(&table, &config.mobile_column, &config.name_candidates);
        let (kind, column) = match &choice {
            ColumnChoice::Mobile(name) | ColumnChoice::Name(name) => (choice.kind(), name.clone()),
            ColumnChoice::NotFound => {
                reports.push(FileReport::no_identifying_column(
                    file,
                    base,
                    table.column_names().to_vec(),
                ));
                continue;
            }
        };

        let index = table
            .column_index(&column)
            .expect("resolved column is present");
        let ids = derive_ids(&table, index);
        let unique_ids = count_unique(&ids);
        table.append_column(&config.id_column, ids);

        reports.push(FileReport::processed(
            file,
            base.clone(),
            kind,
            column,
            table.row_count(),
            unique_ids,
        ));
        tables.insert(base, table);
    }

    BatchRun {
        tables,
        report: BatchReport::new(reports),
    }
}

fn count_unique(ids: &[Value]) -> usize {
    ids.iter()
        .map(|v| v.canonical())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::report::FileOutcome;
    use crate::resolve::ColumnKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config_for(files: Vec<PathBuf>) -> BatchConfig {
        BatchConfig {
            mobile_column: "mobile".to_string(),
            name_candidates: vec!["full name".to_string(), "name".to_string()],
            ..BatchConfig::with_files(files)
        }
    }

    #[test]
    fn duplicate_phones_are_flagged_but_kept() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "mobile\n0555\n0555\n0777\n");

        let run = run_batch(&config_for(vec![file]));

        let report = &run.report.files[0];
        assert_eq!(report.outcome, FileOutcome::Processed);
        assert_eq!(report.rows, 3);
        assert_eq!(report.unique_ids, 2);
        assert!(report.duplicates);

        // The file still lands in the collection, all rows intact.
        let table = run.tables.get("1h").unwrap();
        assert_eq!(table.row_count(), 3);
        let id_index = table.column_index("participant_id").unwrap();
        let ids = table.column(id_index);
        assert_eq!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn mobile_column_beats_name_column() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "name,mobile\nalice,0555\n");

        let run = run_batch(&config_for(vec![file]));
        let report = &run.report.files[0];
        assert_eq!(report.column_kind, ColumnKind::Mobile);
        assert_eq!(report.column.as_deref(), Some("mobile"));
    }

    #[test]
    fn first_name_candidate_wins_without_mobile() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1m.csv", "name,full name\nalice,alice smith\n");

        let run = run_batch(&config_for(vec![file]));
        let report = &run.report.files[0];
        assert_eq!(report.column_kind, ColumnKind::Name);
        assert_eq!(report.column.as_deref(), Some("full name"));
    }

    #[test]
    fn missing_file_does_not_stop_the_run() {
        let tmp = TempDir::new().unwrap();
        let present = write_csv(&tmp, "3h.csv", "mobile\n0555\n");
        let absent = tmp.path().join("2m.csv");

        let run = run_batch(&config_for(vec![absent, present]));

        assert_eq!(run.report.files[0].outcome, FileOutcome::MissingFile);
        assert!(!run.report.files[0].found);
        assert_eq!(run.report.files[1].outcome, FileOutcome::Processed);
        assert!(!run.tables.contains_key("2m"));
        assert!(run.tables.contains_key("3h"));
    }

    #[test]
    fn no_identifying_column_skips_with_available_columns() {
        let tmp = TempDir::new().unwrap();
        let bad = write_csv(&tmp, "1h.csv", "age,city\n20,riyadh\n");
        let good = write_csv(&tmp, "1m.csv", "mobile\n0555\n");

        let run = run_batch(&config_for(vec![bad, good]));

        let report = &run.report.files[0];
        assert_eq!(report.outcome, FileOutcome::NoIdentifyingColumn);
        assert!(report.found);
        assert_eq!(report.available_columns, vec!["age", "city"]);
        assert!(!run.tables.contains_key("1h"));
        assert!(run.tables.contains_key("1m"));
    }

    #[test]
    fn unreadable_file_skips_with_error() {
        let tmp = TempDir::new().unwrap();
        let ragged = write_csv(&tmp, "1h.csv", "a,b\n1,2,3\n");
        let good = write_csv(&tmp, "2h.csv", "mobile\n0555\n");

        let run = run_batch(&config_for(vec![ragged, good]));

        let report = &run.report.files[0];
        assert_eq!(report.outcome, FileOutcome::Unreadable);
        assert!(report.error.is_some());
        assert!(run.tables.contains_key("2h"));
    }

    #[test]
    fn row_order_is_preserved() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "mobile,seq\n0111,first\n0222,second\n0333,third\n");

        let run = run_batch(&config_for(vec![file]));
        let table = run.tables.get("1h").unwrap();
        let seq = table.column(1);
        assert_eq!(seq[0].canonical(), "first");
        assert_eq!(seq[1].canonical(), "second");
        assert_eq!(seq[2].canonical(), "third");
    }

    #[test]
    fn all_missing_mobile_values_collide_into_one_id() {
        // The mobile column is still selected when its values are all
        // missing; the collision surfaces through the duplicate flag.
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "mobile,name\n,alice\n,bob\n");

        let run = run_batch(&config_for(vec![file]));
        let report = &run.report.files[0];
        assert_eq!(report.column_kind, ColumnKind::Mobile);
        assert_eq!(report.unique_ids, 1);
        assert!(report.duplicates);
    }

    #[test]
    fn header_only_file_processes_cleanly() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "mobile\n");

        let run = run_batch(&config_for(vec![file]));
        let report = &run.report.files[0];
        assert_eq!(report.outcome, FileOutcome::Processed);
        assert_eq!(report.rows, 0);
        assert_eq!(report.unique_ids, 0);
        assert!(!report.duplicates);
    }

    #[test]
    fn report_order_matches_input_order() {
        let tmp = TempDir::new().unwrap();
        let b = write_csv(&tmp, "b.csv", "mobile\n0555\n");
        let a = write_csv(&tmp, "a.csv", "mobile\n0777\n");

        let run = run_batch(&config_for(vec![b, a]));
        assert_eq!(run.report.files[0].base_name, "b");
        assert_eq!(run.report.files[1].base_name, "a");
    }

    #[test]
    fn existing_id_column_is_replaced() {
        let tmp = TempDir::new().unwrap();
        let file = write_csv(&tmp, "1h.csv", "mobile,participant_id\n0555,stale\n");

        let run = run_batch(&config_for(vec![file]));
        let table = run.tables.get("1h").unwrap();
        assert_eq!(table.column_names().len(), 2);
        let ids = table.column(table.column_index("participant_id").unwrap());
        assert_eq!(
            ids[0].canonical(),
            "506ded66eb8be8051c3bfcc0ba961fcd194d8299bbdf76edaff0c52cba80bcd8"
        );
    }
}
