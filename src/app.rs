use eframe::egui;

use crate::data::loader::DataSource;
use crate::state::AppState;
use crate::ui::{charts, metrics, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashboardApp {
    pub state: AppState,
}

impl SalaryDashboardApp {
    /// Bind the app to a data source and perform the initial load.
    ///
    /// A failed load still yields a running app; the error is shown in
    /// place of the dashboard and File → Open / Reload stay available.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        let mut state = AppState::new(source);
        // The error is already logged and kept in `status_message`.
        let _ = state.reload();
        Self { state }
    }
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if !panels::header(ui, &self.state) {
                return;
            }
            metrics::summary_row(ui, &self.state.output.summary);
            ui.separator();
            charts::chart_row(ui, &self.state);
        });
    }
}
