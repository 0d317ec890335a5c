use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Points, Text};

use crate::color::ColorScale;
use crate::data::aggregate::{salary_range, CountryAggregate};
use crate::data::countries::centroid;
use crate::state::AppState;
use crate::ui::metrics::format_usd;

const CHART_HEIGHT: f32 = 380.0;

// ---------------------------------------------------------------------------
// Chart row (central panel)
// ---------------------------------------------------------------------------

/// Render the map and bar chart side by side, then the per-country table.
pub fn chart_row(ui: &mut Ui, state: &AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols| {
                salary_map(&mut cols[0], &state.output.by_country);
                annual_bar_chart(&mut cols[1], state);
            });
            ui.separator();
            country_table(ui, &state.output.by_country);
        });
}

// ---------------------------------------------------------------------------
// Choropleth-style world map
// ---------------------------------------------------------------------------

/// Filtered per-country means on an equirectangular lon/lat grid, one marker
/// per country coloured on the Viridis scale.
pub fn salary_map(ui: &mut Ui, table: &[CountryAggregate]) {
    ui.strong("Average monthly salary by country");

    let Some((min, max)) = salary_range(table) else {
        ui.label("No data available for the salary-by-country map.");
        return;
    };
    let scale = ColorScale::viridis(min, max);

    let (placed, unplaced): (Vec<&CountryAggregate>, Vec<&CountryAggregate>) = table
        .iter()
        .partition(|row| centroid(&row.country_en).is_some());

    Plot::new("salary_map")
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .show(ui, |plot_ui| {
            for row in &placed {
                let Some([lon, lat]) = centroid(&row.country_en) else {
                    continue;
                };
                let label = format!("{}: {}", row.country_en, format_usd(row.average_salary_usd));
                plot_ui.points(
                    Points::new(vec![[lon, lat]])
                        .radius(10.0)
                        .color(scale.color_for(row.average_salary_usd))
                        .name(label),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(lon, lat - 9.0), row.country_en.as_str())
                        .color(Color32::GRAY),
                );
            }
        });

    color_legend(ui, &scale);

    if !unplaced.is_empty() {
        let names: Vec<&str> = unplaced.iter().map(|r| r.country_en.as_str()).collect();
        ui.label(RichText::new(format!("Not placed on the map: {}", names.join(", "))).weak());
    }
}

fn color_legend(ui: &mut Ui, scale: &ColorScale) {
    const STEPS: usize = 12;
    ui.horizontal(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(format!("{}  ", format_usd(scale.min)));
        for i in 0..STEPS {
            let t = i as f64 / (STEPS - 1) as f64;
            let value = scale.min + t * (scale.max - scale.min);
            ui.label(RichText::new("■").color(scale.color_for(value)).size(18.0));
        }
        ui.label(format!("  {}", format_usd(scale.max)));
    });
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

/// Per-country means over the whole dataset. Shown only while the current
/// selection leaves at least one record, but its bars ignore the selection.
pub fn annual_bar_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Average monthly salary by country (all records)");

    if !state.has_visible_records() {
        ui.label("No data available for the salary-by-country bar chart.");
        return;
    }

    let table = &state.annual_by_country;
    let names: Vec<String> = table.iter().map(|r| r.country.clone()).collect();

    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.average_salary_usd)
                .name(&row.country)
                .fill(state.country_colors.color_for(&row.country))
                .width(0.7)
        })
        .collect();

    Plot::new("annual_bar_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Country")
        .y_axis_label("Average salary (USD)")
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average salary (USD)"));
        });

    ui.label(
        RichText::new("Computed over the full dataset; the sidebar filters do not apply.")
            .weak()
            .small(),
    );
}

// ---------------------------------------------------------------------------
// Aggregate table
// ---------------------------------------------------------------------------

/// The filtered per-country table behind the map.
pub fn country_table(ui: &mut Ui, table: &[CountryAggregate]) {
    if table.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("País");
            });
            header.col(|ui| {
                ui.strong("Country");
            });
            header.col(|ui| {
                ui.strong("Average salary (USD)");
            });
        })
        .body(|mut body| {
            for row in table {
                body.row(20.0, |mut r| {
                    r.col(|ui| {
                        ui.label(&row.country);
                    });
                    r.col(|ui| {
                        ui.label(&row.country_en);
                    });
                    r.col(|ui| {
                        ui.label(format_usd(row.average_salary_usd));
                    });
                });
            }
        });
}
