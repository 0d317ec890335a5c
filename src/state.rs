use std::collections::BTreeSet;

use anyhow::Result;

use crate::color::ColorMap;
use crate::data::aggregate::CountryAggregate;
use crate::data::filter::{init_filter_state, FilterState};
use crate::data::loader::{self, DataSource};
use crate::data::model::{Dimension, SalaryDataset};
use crate::data::pipeline::{self, PipelineOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current dataset came from; `reload` fetches from it again.
    pub source: Box<dyn DataSource>,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<SalaryDataset>,

    /// Per-dimension filter selections.
    pub filters: FilterState,

    /// Result of the last pipeline run over `filters`.
    pub output: PipelineOutput,

    /// Per-country means over the unfiltered dataset, fixed at load time.
    pub annual_by_country: Vec<CountryAggregate>,

    /// Bar colour per country.
    pub country_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Empty state bound to a source; nothing is fetched yet.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            dataset: None,
            filters: FilterState::default(),
            output: PipelineOutput::default(),
            annual_by_country: Vec::new(),
            country_colors: ColorMap::new(std::iter::empty()),
            status_message: None,
        }
    }

    /// Fetch from the current source and ingest the result.
    ///
    /// On failure the previous dataset is dropped so the dashboard body is
    /// not rendered from stale data, and the error is kept for display.
    pub fn reload(&mut self) -> Result<()> {
        match loader::load(self.source.as_ref()) {
            Ok(dataset) => {
                self.set_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", self.source.describe());
                self.dataset = None;
                self.output = PipelineOutput::default();
                self.annual_by_country.clear();
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Replace the source and load from it.
    pub fn load_from(&mut self, source: Box<dyn DataSource>) -> Result<()> {
        self.source = source;
        self.reload()
    }

    /// Ingest a newly loaded dataset, select everything and run the pipeline.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.filters = init_filter_state(&dataset);
        self.annual_by_country = pipeline::annual_country_means(&dataset);
        self.country_colors = ColorMap::new(
            self.annual_by_country
                .iter()
                .map(|row| row.country.as_str()),
        );
        self.output = pipeline::run(&dataset, &self.filters);

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Rerun the pipeline after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.output = pipeline::run(ds, &self.filters);
        }
    }

    /// Whether the current selection leaves any record.
    pub fn has_visible_records(&self) -> bool {
        !self.output.visible_indices.is_empty()
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.filters.entry(dim).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values of a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            if let Some(all_vals) = ds.unique_values.get(&dim) {
                self.filters.insert(dim, all_vals.clone());
                self.refilter();
            }
        }
    }

    /// Deselect all values of a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.filters.insert(dim, BTreeSet::new());
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{Format, MemorySource};

    const CSV: &str = "\
mes,pais,moeda_local,salario_medio_usd
2024-01,Brasil,BRL,1000
2024-02,Brasil,BRL,2000
2024-01,Alemanha,EUR,5000
2024-02,Alemanha,EUR,5400
";

    fn loaded() -> AppState {
        let mut state = AppState::new(Box::new(MemorySource::new("mem.csv", Format::Csv, CSV)));
        state.reload().unwrap();
        state
    }

    #[test]
    fn load_selects_everything() {
        let state = loaded();
        assert_eq!(state.output.summary.count, 4);
        assert_eq!(state.output.by_country.len(), 2);
        assert_eq!(state.annual_by_country.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn toggling_reruns_pipeline_but_not_annual_table() {
        let mut state = loaded();
        state.toggle_filter_value(Dimension::Country, "Alemanha");

        assert_eq!(state.output.summary.count, 2);
        assert_eq!(state.output.summary.mean, 1500.0);
        assert_eq!(state.output.by_country[0].country_en, "Brazil");
        assert_eq!(state.annual_by_country.len(), 2);

        state.toggle_filter_value(Dimension::Country, "Alemanha");
        assert_eq!(state.output.summary.count, 4);
    }

    #[test]
    fn select_none_then_all() {
        let mut state = loaded();
        state.select_none(Dimension::Month);
        assert!(!state.has_visible_records());
        assert_eq!(state.output.summary.max, 0.0);
        assert!(state.output.by_country.is_empty());

        state.select_all(Dimension::Month);
        assert!(state.has_visible_records());
        assert_eq!(state.output.summary.max, 5400.0);
    }

    #[test]
    fn failed_load_clears_dataset() {
        let mut state = loaded();
        let bad = MemorySource::new("bad.csv", Format::Csv, "pais\nBrasil\n");
        assert!(state.load_from(Box::new(bad)).is_err());
        assert!(state.dataset.is_none());
        assert!(state.annual_by_country.is_empty());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("missing required column"));
    }

    #[test]
    fn reload_is_complete_when_it_returns() {
        let mut state = AppState::new(Box::new(MemorySource::new(
            "nan.csv",
            Format::Csv,
            "mes,pais,moeda_local,salario_medio_usd\n2024-01,Brasil,BRL,NaN\n",
        )));
        assert!(state.reload().is_err());
        assert!(state.dataset.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("line 2"));

        state
            .load_from(Box::new(MemorySource::new("mem.csv", Format::Csv, CSV)))
            .unwrap();
        assert!(state.status_message.is_none());
        let summary = state.output.summary;
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }
}
