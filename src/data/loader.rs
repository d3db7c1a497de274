use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{BenchmarkDataset, BenchmarkRow, DatasetKind};

/// Column names the benchmark CSVs must carry. Order in the file is free;
/// rows are matched by header name.
const EXPECTED_COLUMNS: [&str; 4] = ["Alg", "Size", "Time(ms)", "Comparisons"];

/// A structural problem with a benchmark CSV. Fatal: there is no recovery
/// policy for corrupt input, only for absent input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("column '{0}' missing from CSV header")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the three well-known benchmark files from `dir`.
///
/// A missing file is skipped with a warning; partial results are fine.
/// A file that exists but fails to parse aborts the whole load.
pub fn load_known_datasets(dir: &Path) -> Result<Vec<(DatasetKind, BenchmarkDataset)>> {
    let mut datasets = Vec::new();

    for kind in DatasetKind::ALL {
        let path = dir.join(kind.file_name());
        if !path.exists() {
            log::warn!("skipping dataset '{}': {} not found", kind.label(), path.display());
            continue;
        }
        let dataset = load_csv(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        log::info!(
            "loaded {} rows ({} algorithms) from {}",
            dataset.len(),
            dataset.algorithms.len(),
            kind.file_name()
        );
        datasets.push((kind, dataset));
    }

    Ok(datasets)
}

/// Parse one benchmark CSV into a dataset.
pub fn load_csv(path: &Path) -> Result<BenchmarkDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col).into());
        }
    }

    let mut rows: Vec<BenchmarkRow> = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        // Line numbers are 1-based and the header occupies line 1.
        let row: BenchmarkRow = result.with_context(|| format!("CSV line {}", row_no + 2))?;
        rows.push(row);
    }

    Ok(BenchmarkDataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    const TWO_ALG_CSV: &str = "Size,Alg,Time(ms),Comparisons\n\
                               100,stdQuickSort,0.5,700\n\
                               100,radixSort,0.3,400\n\
                               200,stdQuickSort,1.1,1500\n\
                               200,radixSort,0.7,900\n";

    #[test]
    fn parses_rows_and_algorithms() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "randomSorted.csv", TWO_ALG_CSV);

        let ds = load_csv(&dir.path().join("randomSorted.csv")).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.algorithms, vec!["stdQuickSort", "radixSort"]);
        assert_eq!(ds.rows[0].size, 100);
        assert_eq!(ds.rows[0].time_ms, 0.5);
        assert_eq!(ds.rows[1].comparisons, 400);
    }

    #[test]
    fn column_order_does_not_matter() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "shuffled.csv",
            "Alg,Comparisons,Size,Time(ms)\nstrMergeSort,9,20,2.0\n",
        );

        let ds = load_csv(&dir.path().join("shuffled.csv")).unwrap();
        assert_eq!(ds.rows[0].alg, "strMergeSort");
        assert_eq!(ds.rows[0].size, 20);
        assert_eq!(ds.rows[0].time_ms, 2.0);
        assert_eq!(ds.rows[0].comparisons, 9);
    }

    #[test]
    fn missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "bad.csv",
            "Size,Alg,Time(ms)\n100,stdQuickSort,0.5\n",
        );

        let err = load_csv(&dir.path().join("bad.csv")).unwrap_err();
        assert!(err.to_string().contains("Comparisons"));
    }

    #[test]
    fn malformed_row_is_fatal_and_names_the_file_line() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "corrupt.csv",
            "Size,Alg,Time(ms),Comparisons\n\
             100,stdQuickSort,0.5,700\n\
             not-a-number,stdQuickSort,0.5,700\n",
        );

        let err = load_csv(&dir.path().join("corrupt.csv")).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {err}");
    }

    struct CaptureLogger;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if record.level() == log::Level::Warn {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn skipping_a_missing_file_warns_with_its_name() {
        static LOGGER: CaptureLogger = CaptureLogger;
        log::set_logger(&LOGGER).expect("no other logger installed in tests");
        log::set_max_level(log::LevelFilter::Warn);

        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "randomSorted.csv", TWO_ALG_CSV);
        write_file(dir.path(), "reverseSorted.csv", TWO_ALG_CSV);
        // nearlySorted.csv deliberately absent
        load_known_datasets(dir.path()).unwrap();

        // Match on the full path: other tests may log their own skip
        // warnings once the capture logger is installed.
        let missing = dir.path().join("nearlySorted.csv").display().to_string();
        let loaded = dir.path().join("randomSorted.csv").display().to_string();
        let warnings = WARNINGS.lock().unwrap();
        assert!(
            warnings.iter().any(|w| w.contains(&missing)),
            "warnings: {warnings:?}"
        );
        assert!(!warnings.iter().any(|w| w.contains(&loaded)));
    }

    #[test]
    fn missing_files_are_skipped_without_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "randomSorted.csv", TWO_ALG_CSV);
        write_file(dir.path(), "reverseSorted.csv", TWO_ALG_CSV);
        // nearlySorted.csv deliberately absent

        let datasets = load_known_datasets(dir.path()).unwrap();
        let kinds: Vec<DatasetKind> = datasets.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![DatasetKind::RandomSorted, DatasetKind::ReverseSorted]
        );
    }

    #[test]
    fn empty_directory_yields_no_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let datasets = load_known_datasets(dir.path()).unwrap();
        assert!(datasets.is_empty());
    }
}
