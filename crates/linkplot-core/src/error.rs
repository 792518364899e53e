// File: crates/linkplot-core/src/error.rs
// Summary: Error taxonomy for loading rows, building charts and dispatching interaction.

use thiserror::Error;

/// Errors raised while loading data or building a chart.
///
/// Build-time errors abort only the chart being built; siblings are unaffected.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Data resource missing or unparseable.
    #[error("failed to load rows from '{path}': {reason}")]
    Load { path: String, reason: String },

    /// A value that must be numeric could not be parsed.
    #[error("attribute '{attribute}' has non-numeric value '{value}' (row {row})")]
    InvalidAttributeValue {
        attribute: String,
        value: String,
        row: usize,
    },

    /// A row lacks an attribute the chart maps.
    #[error("attribute '{attribute}' missing from row {row}")]
    MissingAttribute { attribute: String, row: usize },

    /// Nothing to compute a domain over.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// Linear scale domain with zero or negative span.
    #[error("degenerate domain [{lo}, {hi}]: upper bound must exceed lower bound")]
    DegenerateDomain { lo: f64, hi: f64 },

    /// Category not present in a band scale's domain.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A second build was requested for a chart id that is already building or built.
    #[error("chart '{0}' is already registered")]
    DuplicateChart(String),

    /// A brush update targeted a chart without a brush region.
    #[error("chart '{0}' has no brush region")]
    NoBrushRegion(String),

    /// An operation referenced a chart id the dashboard does not know.
    #[error("unknown chart '{0}'")]
    UnknownChart(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
