use std::path::Path;

use anyhow::Result;

use crate::color::ColorMap;
use crate::data::figure::{build_figures, Figure};
use crate::data::loader;
use crate::data::model::{BenchmarkDataset, Metric};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One loaded benchmark file plus its visibility toggle.
pub struct LoadedDataset {
    /// Logical name: one of the three fixed shapes, or a file stem for
    /// datasets opened by hand.
    pub name: String,
    pub data: BenchmarkDataset,
    pub visible: bool,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Datasets in load order: the fixed three first, then any opened files.
    pub datasets: Vec<LoadedDataset>,

    /// Metric visibility toggles.
    pub show_time: bool,
    pub show_comparisons: bool,

    /// Fixed algorithm color map.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the three well-known CSV files from `dir`. Missing files are
    /// skipped inside the loader; a parse failure aborts startup.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let datasets = loader::load_known_datasets(dir)?
            .into_iter()
            .map(|(kind, data)| LoadedDataset {
                name: kind.label().to_string(),
                data,
                visible: true,
            })
            .collect();

        Ok(AppState {
            datasets,
            show_time: true,
            show_comparisons: true,
            color_map: ColorMap::default(),
            status_message: None,
        })
    }

    /// Append a dataset opened through the file dialog. Names double as plot
    /// widget ids, so reopening a file gets a numbered suffix.
    pub fn add_dataset(&mut self, name: String, data: BenchmarkDataset) {
        let mut unique = name.clone();
        let mut n = 2;
        while self.datasets.iter().any(|d| d.name == unique) {
            unique = format!("{name} ({n})");
            n += 1;
        }
        self.datasets.push(LoadedDataset {
            name: unique,
            data,
            visible: true,
        });
        self.status_message = None;
    }

    /// Total row count across all loaded datasets.
    pub fn total_rows(&self) -> usize {
        self.datasets.iter().map(|d| d.data.len()).sum()
    }

    /// Figures for every visible (dataset, metric) pair, dataset-major.
    pub fn figures(&self) -> Vec<Figure> {
        let metrics: Vec<Metric> = Metric::ALL
            .into_iter()
            .filter(|metric| match metric {
                Metric::Time => self.show_time,
                Metric::Comparisons => self.show_comparisons,
            })
            .collect();

        build_figures(
            self.datasets
                .iter()
                .filter(|d| d.visible)
                .map(|d| (d.name.as_str(), &d.data)),
            &metrics,
        )
    }

    /// Algorithm names present in any loaded dataset, first-appearance order.
    pub fn present_algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for ds in &self.datasets {
            for alg in &ds.data.algorithms {
                if !names.iter().any(|n| n == alg) {
                    names.push(alg.clone());
                }
            }
        }
        names
    }
}
