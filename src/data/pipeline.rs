use super::aggregate::{country_means, CountryAggregate, SummaryStats};
use super::filter::{filtered_indices, FilterState};
use super::model::{SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// Filter → aggregate → translate, rerun on every selection change
// ---------------------------------------------------------------------------

/// Everything the dashboard renders for one filter selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Indices into `dataset.records` of the filtered record set.
    pub visible_indices: Vec<usize>,
    /// Headline metrics over the filtered set.
    pub summary: SummaryStats,
    /// Per-country means over the filtered set.
    pub by_country: Vec<CountryAggregate>,
}

/// Run the full pipeline for the given selection.
pub fn run(dataset: &SalaryDataset, filters: &FilterState) -> PipelineOutput {
    let visible_indices = filtered_indices(dataset, filters);
    let visible: Vec<&SalaryRecord> = visible_indices
        .iter()
        .map(|&i| &dataset.records[i])
        .collect();

    let summary = SummaryStats::from_records(visible.iter().copied());
    let by_country = country_means(visible.iter().copied());

    log::debug!(
        "pipeline: {} of {} records visible, {} countries",
        visible_indices.len(),
        dataset.len(),
        by_country.len()
    );

    PipelineOutput {
        visible_indices,
        summary,
        by_country,
    }
}

/// Per-country means over the whole dataset, ignoring any selection.
///
/// Backs the bar chart, which does not follow the sidebar filters.
pub fn annual_country_means(dataset: &SalaryDataset) -> Vec<CountryAggregate> {
    country_means(&dataset.records)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::filter::init_filter_state;
    use crate::data::model::{record, Dimension};

    fn dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            record("2024-01", "Brasil", "BRL", 1000.0),
            record("2024-02", "Brasil", "BRL", 2000.0),
            record("2024-01", "Estados Unidos", "USD", 9000.0),
            record("2024-02", "Estados Unidos", "USD", 9400.0),
            record("2024-01", "Canadá", "CAD", 6000.0),
        ])
    }

    #[test]
    fn country_selection_drives_all_outputs() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.insert(Dimension::Country, BTreeSet::from(["Brasil".to_string()]));

        let out = run(&ds, &filters);
        assert_eq!(out.visible_indices, vec![0, 1]);
        assert_eq!(out.summary.count, 2);
        assert_eq!(out.summary.mean, 1500.0);
        assert_eq!(out.summary.max, 2000.0);
        assert_eq!(out.summary.min, 1000.0);
        assert_eq!(out.by_country.len(), 1);
        assert_eq!(out.by_country[0].country_en, "Brazil");
        assert_eq!(out.by_country[0].average_salary_usd, 1500.0);
    }

    #[test]
    fn disjoint_selection_degrades_to_zero() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.insert(Dimension::Country, BTreeSet::from(["França".to_string()]));

        let out = run(&ds, &filters);
        assert!(out.visible_indices.is_empty());
        assert_eq!(out.summary, SummaryStats::default());
        assert!(out.by_country.is_empty());
    }

    #[test]
    fn annual_table_ignores_filters() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.insert(Dimension::Month, BTreeSet::from(["2024-02".to_string()]));

        let filtered = run(&ds, &filters).by_country;
        let annual = annual_country_means(&ds);

        assert_eq!(filtered.len(), 2);
        assert_eq!(annual.len(), 3);
        let us = annual.iter().find(|r| r.country == "Estados Unidos").unwrap();
        assert_eq!(us.average_salary_usd, 9200.0);
        assert_eq!(us.country_en, "United States");
    }

    #[test]
    fn country_means_stay_within_record_bounds() {
        let ds = dataset();
        let out = run(&ds, &init_filter_state(&ds));
        for row in &out.by_country {
            let values: Vec<f64> = out
                .visible_indices
                .iter()
                .map(|&i| &ds.records[i])
                .filter(|r| r.country == row.country)
                .map(|r| r.average_salary_usd)
                .collect();
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(lo <= row.average_salary_usd && row.average_salary_usd <= hi);
        }
    }
}
