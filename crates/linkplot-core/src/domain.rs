// File: crates/linkplot-core/src/domain.rs
// Summary: Numeric ([0, max]) and categorical (encounter-ordered) domains computed from rows.

use std::collections::HashMap;

use crate::data::Row;
use crate::error::{ChartError, Result};
use crate::types::{DomainFloor, DomainPadding};

/// Numeric domain, by default anchored at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericDomain {
    pub min: f64,
    pub max: f64,
    /// True when the observed span was empty and a unit span was substituted.
    pub substituted: bool,
}

impl NumericDomain {
    /// `[floor, max(row[attribute]) + padding]`; a non-positive span becomes `[floor, floor + 1]`.
    pub fn from_rows(rows: &[Row], attribute: &str, floor: DomainFloor, padding: DomainPadding) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (i, row) in rows.iter().enumerate() {
            let v = row.numeric(attribute, i)?;
            min = min.min(v);
            max = max.max(v);
        }
        let lo = match floor {
            DomainFloor::Zero => 0.0,
            DomainFloor::DataMin => min,
        };
        Ok(Self::new(lo, padding.apply(max)))
    }

    pub fn new(min: f64, max: f64) -> Self {
        if max > min {
            return Self { min, max, substituted: false };
        }
        tracing::warn!(
            "Degenerate domain [{}, {}] for numeric attribute; substituting [{}, {}]",
            min, max, min, min + 1.0
        );
        Self { min, max: min + 1.0, substituted: true }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn as_tuple(&self) -> (f64, f64) { (self.min, self.max) }
}

/// Distinct category values in first-encounter order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoricalDomain {
    categories: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoricalDomain {
    pub fn from_rows(rows: &[Row], attribute: &str) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let mut domain = Self::default();
        for (i, row) in rows.iter().enumerate() {
            domain.insert(row.text(attribute, i)?);
        }
        Ok(domain)
    }

    pub fn from_values<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut domain = Self::default();
        for v in values {
            domain.insert(v.as_ref());
        }
        domain
    }

    fn insert(&mut self, value: &str) {
        if !self.index.contains_key(value) {
            self.index.insert(value.to_string(), self.categories.len());
            self.categories.push(value.to_string());
        }
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn len(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }
}
