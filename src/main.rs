mod app;
mod color;
mod data;
mod state;
mod ui;

use app::SalaryDashboardApp;
use data::loader::HttpSource;
use eframe::egui;

const WINDOW_TITLE: &str = "Network Engineering Salary Dashboard";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            Ok(Box::new(SalaryDashboardApp::new(Box::new(
                HttpSource::default(),
            ))))
        }),
    )
}
