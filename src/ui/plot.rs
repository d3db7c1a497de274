use eframe::egui::{ScrollArea, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Figure grid (central panel)
// ---------------------------------------------------------------------------

const FIGURE_HEIGHT: f32 = 280.0;

/// Render one interactive chart per visible (dataset, metric) pair.
pub fn figure_grid(ui: &mut Ui, state: &AppState) {
    if state.datasets.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No benchmark CSV files found  (File → Open…)");
        });
        return;
    }

    let figures = state.figures();
    if figures.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Everything is hidden — enable a dataset and a metric");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for figure in &figures {
                ui.strong(&figure.title);

                Plot::new(figure.id.clone())
                    .legend(Legend::default())
                    .x_axis_label(figure.x_label)
                    .y_axis_label(figure.y_label)
                    .height(FIGURE_HEIGHT)
                    .allow_boxed_zoom(true)
                    .allow_drag(true)
                    .allow_scroll(true)
                    .allow_zoom(true)
                    .show(ui, |plot_ui| {
                        for series in &figure.series {
                            let color = state.color_map.color_for(&series.algorithm);
                            let points: PlotPoints =
                                series.points.iter().copied().collect();

                            let line = Line::new(points)
                                .name(&series.algorithm)
                                .color(color)
                                .width(1.5);

                            plot_ui.line(line);
                        }
                    });

                ui.add_space(12.0);
            }
        });
}
