// File: crates/linkplot-core/src/data.rs
// Summary: Row/Dataset model and the CSV-backed row source.

use std::path::Path;
use std::sync::Arc;

use crate::error::{ChartError, Result};

/// Immutable mapping from attribute name to raw string value.
/// Rows of one dataset share a single header list.
#[derive(Clone, Debug)]
pub struct Row {
    headers: Arc<Vec<String>>,
    values: Vec<String>,
}

impl Row {
    pub fn new(headers: Arc<Vec<String>>, values: Vec<String>) -> Self {
        Self { headers, values }
    }

    /// Convenience constructor for ad-hoc rows (tests, generated data).
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let (headers, values): (Vec<String>, Vec<String>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).unzip();
        Self { headers: Arc::new(headers), values }
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == attribute)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    /// Parse `attribute` as a finite number. `row` is only used for error reporting.
    pub fn numeric(&self, attribute: &str, row: usize) -> Result<f64> {
        let raw = self.get(attribute).ok_or_else(|| ChartError::MissingAttribute {
            attribute: attribute.to_string(),
            row,
        })?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ChartError::InvalidAttributeValue {
                attribute: attribute.to_string(),
                value: raw.to_string(),
                row,
            }),
        }
    }

    /// Raw string value, failing with `MissingAttribute` when absent.
    pub fn text(&self, attribute: &str, row: usize) -> Result<&str> {
        self.get(attribute).ok_or_else(|| ChartError::MissingAttribute {
            attribute: attribute.to_string(),
            row,
        })
    }
}

/// Rows loaded from one resource. `name` identifies the dataset for row linkage.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self { name: name.into(), rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Supplier of parsed rows for a declaration's data path.
pub trait RowSource {
    fn load(&self, path: &Path) -> Result<Dataset>;
}

/// Headered CSV files read with the `csv` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvSource;

impl CsvSource {
    /// Parse CSV text already in memory; `name` becomes the dataset name.
    pub fn parse_str(name: &str, text: &str) -> Result<Dataset> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());
        read_all(name, rdr)
    }
}

impl RowSource for CsvSource {
    fn load(&self, path: &Path) -> Result<Dataset> {
        let name = path.display().to_string();
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| load_error(&name, e))?;
        let dataset = read_all(&name, rdr)?;
        tracing::info!("Loaded {} rows from {}", dataset.len(), name);
        Ok(dataset)
    }
}

fn read_all<R: std::io::Read>(name: &str, mut rdr: csv::Reader<R>) -> Result<Dataset> {
    let headers = rdr
        .headers()
        .map_err(|e| load_error(name, e))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(ChartError::Load { path: name.to_string(), reason: "missing header row".into() });
    }
    let headers = Arc::new(headers);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| load_error(name, e))?;
        rows.push(Row::new(Arc::clone(&headers), rec.iter().map(str::to_string).collect()));
    }
    Ok(Dataset::new(name, rows))
}

fn load_error(name: &str, err: csv::Error) -> ChartError {
    ChartError::Load { path: name.to_string(), reason: err.to_string() }
}
