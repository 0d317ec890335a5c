use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::SummaryStats;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Render the four summary metrics side by side.
pub fn summary_row(ui: &mut Ui, stats: &SummaryStats) {
    ui.strong("💰 Average monthly salary (USD)");
    ui.columns(4, |cols| {
        metric(&mut cols[0], "Average salary (USD)", format_usd(stats.mean));
        metric(&mut cols[1], "Maximum salary (USD)", format_usd(stats.max));
        metric(&mut cols[2], "Minimum salary (USD)", format_usd(stats.min));
        metric(&mut cols[3], "Total records", stats.count.to_string());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(26.0).strong());
    });
}

/// `$1,234.56` style: two decimals, comma thousands separators.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::format_usd;

    #[test]
    fn formats_with_grouping() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.994), "$999.99");
        assert_eq!(format_usd(1000.0), "$1,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(123456.5), "$123,456.50");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_usd(-2500.5), "-$2,500.50");
        assert_eq!(format_usd(-0.001), "$0.00");
    }
}
