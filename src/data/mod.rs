/// Data layer: core types, loading, and figure building.
///
/// Architecture:
/// ```text
///  randomSorted.csv / nearlySorted.csv / reverseSorted.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → BenchmarkDataset (missing file → skip)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ BenchmarkDataset  │  Vec<BenchmarkRow>, algorithm index
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  figure   │  partition by algorithm → one Figure per metric
///   └──────────┘
/// ```

pub mod figure;
pub mod loader;
pub mod model;
