use std::collections::BTreeMap;

use super::countries::translate_country;
use super::model::SalaryRecord;

// ---------------------------------------------------------------------------
// SummaryStats – the four headline metrics
// ---------------------------------------------------------------------------

/// Mean / max / min / count of `average_salary_usd` over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

impl SummaryStats {
    /// Compute the metrics; an empty input yields all zeros.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SalaryRecord>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for rec in records {
            let v = rec.average_salary_usd;
            count += 1;
            sum += v;
            max = max.max(v);
            min = min.min(v);
        }

        if count == 0 {
            return SummaryStats::default();
        }

        SummaryStats {
            mean: sum / count as f64,
            max,
            min,
            count,
        }
    }
}

// ---------------------------------------------------------------------------
// CountryAggregate – one row of a per-country table
// ---------------------------------------------------------------------------

/// Mean salary of one country with its English display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryAggregate {
    pub country: String,
    pub average_salary_usd: f64,
    pub country_en: String,
}

/// Group records by country and average their salaries.
///
/// Rows are ordered by country name; an empty input yields an empty table.
pub fn country_means<'a>(
    records: impl IntoIterator<Item = &'a SalaryRecord>,
) -> Vec<CountryAggregate> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in records {
        let (sum, n) = groups.entry(rec.country.as_str()).or_insert((0.0, 0));
        *sum += rec.average_salary_usd;
        *n += 1;
    }

    groups
        .into_iter()
        .map(|(country, (sum, n))| CountryAggregate {
            country: country.to_string(),
            average_salary_usd: sum / n as f64,
            country_en: translate_country(country).to_string(),
        })
        .collect()
}

/// `(min, max)` of the aggregated salaries, for colour scaling.
pub fn salary_range(table: &[CountryAggregate]) -> Option<(f64, f64)> {
    table.iter().fold(None, |acc, row| {
        let v = row.average_salary_usd;
        Some(match acc {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    #[test]
    fn empty_set_gives_zero_stats() {
        let stats = SummaryStats::from_records(std::iter::empty());
        assert_eq!(
            stats,
            SummaryStats {
                mean: 0.0,
                max: 0.0,
                min: 0.0,
                count: 0
            }
        );
    }

    #[test]
    fn stats_are_ordered() {
        let recs = vec![
            record("2024-01", "Brasil", "BRL", 1200.0),
            record("2024-01", "Japão", "JPY", 4100.0),
            record("2024-02", "Índia", "INR", 900.0),
        ];
        let stats = SummaryStats::from_records(&recs);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.max, 4100.0);
        assert_eq!(stats.min, 900.0);
        assert!((stats.mean - 2066.666_666).abs() < 1e-3);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn brasil_mean_is_translated() {
        let recs = vec![
            record("2024-01", "Brasil", "BRL", 1000.0),
            record("2024-02", "Brasil", "BRL", 2000.0),
        ];
        let table = country_means(&recs);
        assert_eq!(
            table,
            vec![CountryAggregate {
                country: "Brasil".into(),
                average_salary_usd: 1500.0,
                country_en: "Brazil".into(),
            }]
        );
    }

    #[test]
    fn groups_are_sorted_and_bounded() {
        let recs = vec![
            record("2024-01", "Reino Unido", "GBP", 5000.0),
            record("2024-01", "Alemanha", "EUR", 4000.0),
            record("2024-02", "Reino Unido", "GBP", 5600.0),
            record("2024-02", "Narnia", "NAR", 10.0),
        ];
        let table = country_means(&recs);
        let names: Vec<&str> = table.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, ["Alemanha", "Narnia", "Reino Unido"]);
        assert_eq!(table[1].country_en, "Narnia");
        assert_eq!(table[2].country_en, "United Kingdom");

        let uk = &table[2];
        assert!(uk.average_salary_usd >= 5000.0 && uk.average_salary_usd <= 5600.0);
        assert_eq!(salary_range(&table), Some((10.0, 5300.0)));
    }

    #[test]
    fn empty_table_has_no_range() {
        assert!(country_means(std::iter::empty()).is_empty());
        assert_eq!(salary_range(&[]), None);
    }
}
