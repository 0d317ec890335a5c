// ---------------------------------------------------------------------------
// Country name translation (Portuguese → English)
// ---------------------------------------------------------------------------

/// Fixed Portuguese → English country names for the countries in the dataset.
pub const COUNTRY_TRANSLATIONS: [(&str, &str); 10] = [
    ("Brasil", "Brazil"),
    ("Estados Unidos", "United States"),
    ("Reino Unido", "United Kingdom"),
    ("Alemanha", "Germany"),
    ("Canadá", "Canada"),
    ("Austrália", "Australia"),
    ("Índia", "India"),
    ("Japão", "Japan"),
    ("Emirados Árabes Unidos", "United Arab Emirates"),
    ("África do Sul", "South Africa"),
];

/// English display name for a Portuguese country name.
///
/// Names outside [`COUNTRY_TRANSLATIONS`] are returned unchanged, so data that
/// already uses English names (or a country added later) still renders.
pub fn translate_country(name_pt: &str) -> &str {
    match COUNTRY_TRANSLATIONS.iter().find(|(pt, _)| *pt == name_pt) {
        Some((_, en)) => en,
        // Identity fallback.
        None => name_pt,
    }
}

// ---------------------------------------------------------------------------
// Map placement
// ---------------------------------------------------------------------------

/// Approximate geographic centre `(longitude, latitude)` by English name.
const COUNTRY_CENTROIDS: [(&str, [f64; 2]); 10] = [
    ("Brazil", [-51.9, -14.2]),
    ("United States", [-98.6, 39.8]),
    ("United Kingdom", [-2.5, 54.0]),
    ("Germany", [10.4, 51.2]),
    ("Canada", [-106.3, 56.1]),
    ("Australia", [133.8, -25.3]),
    ("India", [78.9, 22.0]),
    ("Japan", [138.3, 36.2]),
    ("United Arab Emirates", [54.0, 23.4]),
    ("South Africa", [24.7, -29.0]),
];

/// `[lon, lat]` to place a country on the map, if it is known.
pub fn centroid(name_en: &str) -> Option<[f64; 2]> {
    COUNTRY_CENTROIDS
        .iter()
        .find(|(name, _)| *name == name_en)
        .map(|(_, lon_lat)| *lon_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_translate() {
        assert_eq!(translate_country("Brasil"), "Brazil");
        assert_eq!(translate_country("Emirados Árabes Unidos"), "United Arab Emirates");
        assert_eq!(translate_country("África do Sul"), "South Africa");
        assert_eq!(translate_country("Japão"), "Japan");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(translate_country("França"), "França");
        assert_eq!(translate_country(""), "");
        // Case matters: the table is an exact lookup.
        assert_eq!(translate_country("brasil"), "brasil");
    }

    #[test]
    fn every_translation_can_be_placed() {
        for (_, en) in COUNTRY_TRANSLATIONS {
            let [lon, lat] = centroid(en).unwrap();
            assert!((-180.0..=180.0).contains(&lon), "{en}");
            assert!((-90.0..=90.0).contains(&lat), "{en}");
        }
        assert!(centroid("Atlantis").is_none());
    }
}
