/// Data layer: records, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   HTTP / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  DataSource → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SalaryDataset  │  Vec<SalaryRecord>, sorted dimension domains
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month ∧ country ∧ currency → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  summary stats, per-country means + English names
///   └───────────┘
/// ```

pub mod aggregate;
pub mod countries;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
