use super::model::{BenchmarkDataset, Metric};

// ---------------------------------------------------------------------------
// Figure description: everything the plot panel needs, UI-free
// ---------------------------------------------------------------------------

/// One algorithm's line within a figure. Points keep the row order of the
/// source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub algorithm: String,
    /// `[size, metric value]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// A fully described chart for one (dataset, metric) pair.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Stable widget id, unique across figures.
    pub id: String,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
}

/// Build the figure for one dataset and one metric: a stable partition of
/// the rows by algorithm name, one series per distinct algorithm.
pub fn build_figure(dataset_name: &str, data: &BenchmarkDataset, metric: Metric) -> Figure {
    let mut series: Vec<Series> = Vec::new();

    for row in &data.rows {
        let point = [row.size as f64, metric.value(row)];
        match series.iter_mut().find(|s| s.algorithm == row.alg) {
            Some(s) => s.points.push(point),
            None => series.push(Series {
                algorithm: row.alg.clone(),
                points: vec![point],
            }),
        }
    }

    Figure {
        id: format!("{dataset_name}_{}", metric.id_part()),
        title: metric.title(dataset_name),
        x_label: "Array size",
        y_label: metric.y_label(),
        series,
    }
}

/// The cross product: one figure per (dataset, metric) pair, dataset-major.
pub fn build_figures<'a>(
    datasets: impl IntoIterator<Item = (&'a str, &'a BenchmarkDataset)>,
    metrics: &[Metric],
) -> Vec<Figure> {
    let mut figures = Vec::new();
    for (name, data) in datasets {
        for &metric in metrics {
            figures.push(build_figure(name, data, metric));
        }
    }
    figures
}
