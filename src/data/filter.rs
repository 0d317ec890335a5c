use std::collections::{BTreeMap, BTreeSet};

use super::model::{Dimension, SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// Filter predicate: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state: maps dimension → set of selected values.
/// An absent dimension means "no filter"; an empty set admits nothing.
pub type FilterState = BTreeMap<Dimension, BTreeSet<String>>;

/// Initialise a [`FilterState`] with every value selected.
pub fn init_filter_state(dataset: &SalaryDataset) -> FilterState {
    dataset
        .unique_values
        .iter()
        .map(|(dim, vals)| (*dim, vals.clone()))
        .collect()
}

/// Whether a record passes every active dimension filter.
pub fn passes(record: &SalaryRecord, filters: &FilterState) -> bool {
    filters
        .iter()
        .all(|(dim, selected)| selected.contains(dim.value_of(record)))
}

/// Return indices of records that pass all active filters, in source order.
pub fn filtered_indices(dataset: &SalaryDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| passes(rec, filters))
        .map(|(i, _)| i)
        .collect()
}
