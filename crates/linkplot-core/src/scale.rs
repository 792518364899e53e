// File: crates/linkplot-core/src/scale.rs
// Summary: Linear (numeric) and Band (categorical) scales mapping domain values to pixels.

use crate::domain::{CategoricalDomain, NumericDomain};
use crate::error::{ChartError, Result};

/// Affine map from a continuous domain onto a pixel interval.
/// Contract: `domain.1 > domain.0`. The range may be inverted (e.g. `[height, 0]` for y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        let (lo, hi) = domain;
        if !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
            return Err(ChartError::DegenerateDomain { lo, hi });
        }
        Ok(Self { domain, range })
    }

    /// Domains produced by `NumericDomain` always have a positive span.
    pub fn from_domain(domain: &NumericDomain, range: (f64, f64)) -> Result<Self> {
        Self::new(domain.as_tuple(), range)
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel back to domain units. A zero-width range maps everything to the domain start.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    /// Round-number tick values inside the domain at a step sized for about `count` intervals.
    /// Like d3, a 1/2/5 step can yield more than `count + 1` values (`[0, 2.5]`, 4 -> six ticks).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let step = tick_step(lo, hi, count);
        if step <= 0.0 {
            return Vec::new();
        }
        // Integer-indexed ticks avoid accumulating float error (0.1 + 0.2 ...).
        let (scale_up, inc) = if step < 1.0 { (true, (1.0 / step).round()) } else { (false, step) };
        let (start, stop) = if scale_up {
            ((lo * inc).ceil(), (hi * inc).floor())
        } else {
            ((lo / inc).ceil(), (hi / inc).floor())
        };
        if stop < start {
            return Vec::new();
        }
        let n = (stop - start) as i64;
        (0..=n)
            .map(|i| {
                let k = start + i as f64;
                if scale_up { k / inc } else { k * inc }
            })
            .collect()
    }

    /// Number formatter matching the precision of `ticks(count)`.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count);
        let digits = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
        move |v: f64| format!("{:.*}", digits, v)
    }
}

/// Step between ticks: 1, 2 or 5 times a power of ten.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let nice = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Ordered categories onto equal-width, disjoint pixel bands.
///
/// `padding` is the fraction of a step left empty, applied between bands and at both ends,
/// so `n * bandwidth + (n - 1) * inner_gap + 2 * outer_gap` equals the range width.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: CategoricalDomain,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// Padding is clamped into `[0, 1)`.
    pub fn new(domain: CategoricalDomain, range: (f64, f64), padding: f64) -> Self {
        let padding = if padding.is_finite() { padding.clamp(0.0, 0.999) } else { 0.0 };
        Self { domain, range, padding }
    }

    /// Distance between the left edges of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let width = (self.range.1 - self.range.0).abs();
        width / (n + self.padding).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Empty space between two adjacent bands.
    pub fn inner_gap(&self) -> f64 {
        self.step() * self.padding
    }

    /// Empty space before the first band and after the last.
    pub fn outer_gap(&self) -> f64 {
        self.step() * self.padding
    }

    /// Left edge of the band for `category`.
    pub fn map(&self, category: &str) -> Result<f64> {
        let i = self
            .domain
            .position(category)
            .ok_or_else(|| ChartError::UnknownCategory(category.to_string()))?;
        Ok(self.band_start(i))
    }

    /// Left edge of the band at `index` in category order.
    pub fn band_start(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let lo = r0.min(r1);
        let n = self.domain.len();
        // Inverted ranges lay categories out right-to-left.
        let slot = if r1 < r0 { n.saturating_sub(1).saturating_sub(index) } else { index };
        lo + self.outer_gap() + self.step() * slot as f64
    }

    /// Band center for `category`, used for axis ticks.
    pub fn center(&self, category: &str) -> Result<f64> {
        Ok(self.map(category)? + self.bandwidth() * 0.5)
    }

    pub fn categories(&self) -> &[String] { self.domain.categories() }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn padding(&self) -> f64 { self.padding }
}
