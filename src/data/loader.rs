use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dimension, SalaryDataset, SalaryRecord, SALARY_COLUMN};

/// Where the dashboard fetches its data from at startup.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/luisalbertool/engenheiroderedes/refs/heads/main/salarios_engenheiro_redes_mensal.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// `line` is the 1-based file line for CSV, the 1-based record for JSON.
    #[error("line {line}: '{value}' is not a finite number in '{column}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    #[error("GET {url} returned {status}")]
    HttpStatus { url: String, status: u16 },
}

// ---------------------------------------------------------------------------
// Payload format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Header row plus one record per line.
    Csv,
    /// Records-oriented array, as written by `df.to_json(orient="records")`.
    Json,
}

impl Format {
    /// Dispatch by file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(LoadError::UnsupportedExtension(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// A handle the dashboard pulls its raw table from.
pub trait DataSource {
    /// Human-readable origin, shown in the UI and logs.
    fn describe(&self) -> String;

    fn format(&self) -> Format;

    /// Fetch the complete raw payload.
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// Remote CSV/JSON fetched with a blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn format(&self) -> Format {
        if self.url.to_ascii_lowercase().ends_with(".json") {
            Format::Json
        } else {
            Format::Csv
        }
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        let response = reqwest::blocking::get(&self.url)
            .with_context(|| format!("requesting {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().context("reading response body")?;
        Ok(body.to_vec())
    }
}

/// A file on local disk; format chosen by extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
    format: Format,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = Format::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn format(&self) -> Format {
        self.format
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))
    }
}

/// An in-memory payload.
#[derive(Debug, Clone)]
pub struct MemorySource {
    pub name: String,
    pub format: Format,
    pub bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, format: Format, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            format,
            bytes: bytes.into(),
        }
    }
}

impl DataSource for MemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn format(&self) -> Format {
        self.format
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch and parse a dataset from any source.
pub fn load(source: &dyn DataSource) -> Result<SalaryDataset> {
    let origin = source.describe();
    let bytes = source
        .fetch()
        .with_context(|| format!("fetching {origin}"))?;

    let records = match source.format() {
        Format::Csv => parse_csv(&bytes),
        Format::Json => parse_json(&bytes),
    }
    .with_context(|| format!("parsing {origin}"))?;

    log::info!("Loaded {} salary records from {origin}", records.len());
    Ok(SalaryDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `mes`, `pais`, `moeda_local` and
/// `salario_medio_usd`. Any other column is ignored.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<SalaryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }
    let salary_idx = headers
        .iter()
        .position(|h| h == SALARY_COLUMN)
        .ok_or(LoadError::MissingColumn(SALARY_COLUMN))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result.context("reading CSV record")?;
        let line = raw.position().map_or(0, |p| p.line());

        let salary = raw.get(salary_idx).unwrap_or("");
        if !salary.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(LoadError::InvalidNumber {
                line,
                column: SALARY_COLUMN,
                value: salary.to_string(),
            }
            .into());
        }

        let record: SalaryRecord = raw
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::InvalidRow {
                line,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "mes": "2024-01", "pais": "Brasil", "moeda_local": "BRL", "salario_medio_usd": 1450.0 },
///   ...
/// ]
/// ```
pub fn parse_json(bytes: &[u8]) -> Result<Vec<SalaryRecord>> {
    let root: JsonValue = serde_json::from_slice(bytes).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<SalaryRecord> {
            let line = i as u64 + 1;
            let obj = row
                .as_object()
                .with_context(|| format!("record {line} is not a JSON object"))?;

            for column in required_columns() {
                if !obj.contains_key(column) {
                    return Err(LoadError::MissingColumn(column).into());
                }
            }
            if !obj[SALARY_COLUMN].is_number() {
                return Err(LoadError::InvalidNumber {
                    line,
                    column: SALARY_COLUMN,
                    value: obj[SALARY_COLUMN].to_string(),
                }
                .into());
            }

            serde_json::from_value::<SalaryRecord>(row.clone()).map_err(|e| {
                LoadError::InvalidRow {
                    line,
                    message: e.to_string(),
                }
                .into()
            })
        })
        .collect()
}

fn required_columns() -> impl Iterator<Item = &'static str> {
    Dimension::ALL
        .into_iter()
        .map(Dimension::column)
        .chain(std::iter::once(SALARY_COLUMN))
}
