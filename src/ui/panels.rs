use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::FileSource;
use crate::data::model::Dimension;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// A filter change requested by a widget, applied once the panel is drawn.
enum FilterAction {
    Toggle(Dimension, String),
    SelectAll(Dimension),
    Clear(Dimension),
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let mut actions = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dim in Dimension::ALL {
                let Some(all_values) = dataset.unique_values.get(&dim) else {
                    continue;
                };
                let selected = state.filters.get(&dim);

                // Show count of selected / total in the header
                let n_selected = selected.map_or(all_values.len(), |s| s.len());
                let n_total = all_values.len();
                let header_text = format!("{dim}  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.column())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                actions.push(FilterAction::SelectAll(dim));
                            }
                            if ui.small_button("None").clicked() {
                                actions.push(FilterAction::Clear(dim));
                            }
                        });

                        for val in all_values {
                            let mut checked = selected.map_or(true, |s| s.contains(val));
                            if ui.checkbox(&mut checked, val.as_str()).changed() {
                                actions.push(FilterAction::Toggle(dim, val.clone()));
                            }
                        }
                    });
            }
        });

    for action in actions {
        match action {
            FilterAction::Toggle(dim, value) => state.toggle_filter_value(dim, &value),
            FilterAction::SelectAll(dim) => state.select_all(dim),
            FilterAction::Clear(dim) => state.select_none(dim),
        }
    }
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
            if ui.button("Reload").clicked() {
                // Failures end up in `status_message`.
                let _ = state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.output.visible_indices.len()
            ));
            ui.separator();
        }

        ui.label(RichText::new(state.source.describe()).weak());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

/// Render title and description. Returns `false` when there is no dataset to
/// show, in which case the reason has been rendered instead.
pub fn header(ui: &mut Ui, state: &AppState) -> bool {
    ui.heading("🥅 Network Engineering Salary Dashboard");
    ui.label(
        "Average monthly salary of people working in network engineering, \
         filtered by month, country and local currency.",
    );
    ui.add_space(8.0);

    if state.dataset.is_some() {
        return true;
    }

    ui.centered_and_justified(|ui: &mut Ui| match &state.status_message {
        Some(msg) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {
            ui.heading("Load a dataset to begin  (File → Open…)");
        }
    });
    false
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match FileSource::new(path) {
        Ok(source) => {
            // Failures end up in `status_message`.
            let _ = state.load_from(Box::new(source));
        }
        Err(e) => {
            log::error!("Cannot open file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
