use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dataset / metric visibility and algorithm legend
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Datasets");
    ui.separator();

    if state.datasets.is_empty() {
        ui.label("No datasets loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for ds in &mut state.datasets {
                let label = format!("{}  ({} rows)", ds.name, ds.data.len());
                ui.checkbox(&mut ds.visible, label);
            }

            ui.separator();
            ui.strong("Metrics");
            ui.checkbox(&mut state.show_time, "Time (ms)");
            ui.checkbox(&mut state.show_comparisons, "Comparisons");

            ui.separator();
            ui.strong("Algorithms");
            let present = state.present_algorithms();
            for (alg, color) in state.color_map.legend_entries() {
                if present.iter().any(|p| p == alg) {
                    ui.label(RichText::new(alg).color(color));
                }
            }
            // Names outside the fixed map render gray, in italics here.
            for alg in present.iter().filter(|a| !state.color_map.is_known(a)) {
                let color = state.color_map.color_for(alg);
                ui.label(RichText::new(alg).color(color).italics());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} datasets loaded, {} rows",
            state.datasets.len(),
            state.total_rows()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open an additional benchmark CSV by hand.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open benchmark results")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("opened")
                    .to_string();
                log::info!(
                    "loaded {} rows ({} algorithms) from {}",
                    dataset.len(),
                    dataset.algorithms.len(),
                    path.display()
                );
                state.add_dataset(name, dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
