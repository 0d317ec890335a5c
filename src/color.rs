use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Category colours: country → Color32
// ---------------------------------------------------------------------------

/// Maps each category label (e.g. a country) to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale: salary → Color32
// ---------------------------------------------------------------------------

/// Viridis anchor colours, dark purple (low) to yellow (high).
const VIRIDIS: [(u8, u8, u8); 6] = [
    (0x44, 0x01, 0x54),
    (0x41, 0x44, 0x87),
    (0x2a, 0x78, 0x8e),
    (0x22, 0xa8, 0x84),
    (0x7a, 0xd1, 0x51),
    (0xfd, 0xe7, 0x25),
];

/// Linear colour scale over `[min, max]` using the Viridis ramp.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn viridis(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` on the scale, clamped to `[0, 1]`.
    /// A degenerate range maps everything to the middle.
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / range).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        let t = self.normalize(value) * (VIRIDIS.len() - 1) as f32;
        let lo = (t.floor() as usize).min(VIRIDIS.len() - 2);
        let frac = t - lo as f32;

        let anchor = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
            Srgb::new(r, g, b).into_format::<f32>().into_linear()
        };
        let mixed = anchor(VIRIDIS[lo]).mix(anchor(VIRIDIS[lo + 1]), frac);
        to_color32(Srgb::from_linear(mixed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(10);
        assert_eq!(palette.len(), 10);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_category_is_gray() {
        let map = ColorMap::new(["Brasil", "Japão"]);
        assert_ne!(map.color_for("Brasil"), map.color_for("Japão"));
        assert_eq!(map.color_for("França"), Color32::GRAY);
    }

    #[test]
    fn scale_endpoints_hit_viridis_anchors() {
        let scale = ColorScale::viridis(1000.0, 5000.0);
        assert_eq!(scale.color_for(1000.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(scale.color_for(5000.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        // Out-of-range values clamp.
        assert_eq!(scale.color_for(-1.0), scale.color_for(1000.0));
        assert_eq!(scale.color_for(9e9), scale.color_for(5000.0));
    }

    #[test]
    fn degenerate_range_maps_to_middle() {
        let scale = ColorScale::viridis(1500.0, 1500.0);
        assert_eq!(scale.normalize(1500.0), 0.5);
    }
}
