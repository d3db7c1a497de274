use serde::Deserialize;

// ---------------------------------------------------------------------------
// DatasetKind – the three fixed input shapes
// ---------------------------------------------------------------------------

/// One of the three benchmark input shapes, each backed by a fixed CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    RandomSorted,
    NearlySorted,
    ReverseSorted,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::RandomSorted,
        DatasetKind::NearlySorted,
        DatasetKind::ReverseSorted,
    ];

    /// Logical dataset name, also used in figure titles.
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::RandomSorted => "randomSorted",
            DatasetKind::NearlySorted => "nearlySorted",
            DatasetKind::ReverseSorted => "reverseSorted",
        }
    }

    /// Fixed CSV filename for this shape.
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::RandomSorted => "randomSorted.csv",
            DatasetKind::NearlySorted => "nearlySorted.csv",
            DatasetKind::ReverseSorted => "reverseSorted.csv",
        }
    }
}

// ---------------------------------------------------------------------------
// Metric – which column is plotted on the y axis
// ---------------------------------------------------------------------------

/// The two plotted metrics, one figure each per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Time,
    Comparisons,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Time, Metric::Comparisons];

    /// Figure title, parameterised by the dataset name.
    pub fn title(self, dataset: &str) -> String {
        match self {
            Metric::Time => format!("Algorithm running time ({dataset})"),
            Metric::Comparisons => format!("Comparison count ({dataset})"),
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Metric::Time => "Time (ms)",
            Metric::Comparisons => "Comparisons",
        }
    }

    /// Short identifier used to build stable plot widget ids.
    pub fn id_part(self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::Comparisons => "comparisons",
        }
    }

    /// Extract this metric's value from a row.
    pub fn value(self, row: &BenchmarkRow) -> f64 {
        match self {
            Metric::Time => row.time_ms,
            Metric::Comparisons => row.comparisons as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// BenchmarkRow – one measurement from the source CSV
// ---------------------------------------------------------------------------

/// A single benchmark measurement (one CSV row).
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRow {
    /// Sorting-algorithm identifier; treated as an opaque label.
    #[serde(rename = "Alg")]
    pub alg: String,
    /// Number of elements sorted.
    #[serde(rename = "Size")]
    pub size: u64,
    /// Average elapsed time in milliseconds.
    #[serde(rename = "Time(ms)")]
    pub time_ms: f64,
    /// Average number of character comparisons.
    #[serde(rename = "Comparisons")]
    pub comparisons: u64,
}

// ---------------------------------------------------------------------------
// BenchmarkDataset – all rows loaded from one file
// ---------------------------------------------------------------------------

/// The parsed contents of one benchmark CSV, immutable after load.
#[derive(Debug, Clone)]
pub struct BenchmarkDataset {
    /// All rows in file order.
    pub rows: Vec<BenchmarkRow>,
    /// Distinct algorithm names in first-appearance order.
    pub algorithms: Vec<String>,
}

impl BenchmarkDataset {
    /// Build the algorithm index from the loaded rows.
    pub fn from_rows(rows: Vec<BenchmarkRow>) -> Self {
        let mut algorithms: Vec<String> = Vec::new();
        for row in &rows {
            if !algorithms.iter().any(|a| a == &row.alg) {
                algorithms.push(row.alg.clone());
            }
        }
        BenchmarkDataset { rows, algorithms }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
