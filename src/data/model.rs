use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Dimension – the three columns a user can filter on
// ---------------------------------------------------------------------------

/// A filterable column of the salary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Month,
    Country,
    Currency,
}

impl Dimension {
    /// Every dimension, in sidebar order.
    pub const ALL: [Dimension; 3] = [Dimension::Month, Dimension::Country, Dimension::Currency];

    /// Name of the source column backing this dimension.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Month => "mes",
            Dimension::Country => "pais",
            Dimension::Currency => "moeda_local",
        }
    }

    /// The record's value for this dimension.
    pub fn value_of(self, record: &SalaryRecord) -> &str {
        match self {
            Dimension::Month => &record.month,
            Dimension::Country => &record.country,
            Dimension::Currency => &record.local_currency,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dimension::Month => "Month",
            Dimension::Country => "Country",
            Dimension::Currency => "Local currency",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// Column carrying the monthly average salary in USD.
pub const SALARY_COLUMN: &str = "salario_medio_usd";

/// A single monthly salary observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "moeda_local")]
    pub local_currency: String,
    #[serde(rename = "salario_medio_usd")]
    pub average_salary_usd: f64,
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the sorted domain of every dimension.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// All records (rows), in source order.
    pub records: Vec<SalaryRecord>,
    /// For each dimension the sorted set of distinct values.
    pub unique_values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl SalaryDataset {
    /// Build the dimension domains from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut unique_values: BTreeMap<Dimension, BTreeSet<String>> = Dimension::ALL
            .iter()
            .map(|dim| (*dim, BTreeSet::new()))
            .collect();

        for record in &records {
            for dim in Dimension::ALL {
                unique_values
                    .entry(dim)
                    .or_default()
                    .insert(dim.value_of(record).to_string());
            }
        }

        SalaryDataset {
            records,
            unique_values,
        }
    }

    /// Sorted distinct values of one dimension.
    pub fn domain(&self, dim: Dimension) -> impl Iterator<Item = &String> {
        self.unique_values.get(&dim).into_iter().flatten()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(month: &str, country: &str, currency: &str, salary: f64) -> SalaryRecord {
    SalaryRecord {
        month: month.to_string(),
        country: country.to_string(),
        local_currency: currency.to_string(),
        average_salary_usd: salary,
    }
}
