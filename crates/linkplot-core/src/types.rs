// File: crates/linkplot-core/src/types.rs
// Summary: Shared layout configuration (frame size, margins, glyph sizes, domain policy).

/// Default frame width in pixels.
pub const WIDTH: u32 = 500;
/// Default frame height in pixels.
pub const HEIGHT: u32 = 500;
/// Default scatter point radius.
pub const POINT_RADIUS: f64 = 5.0;
/// Default band padding for bar charts.
pub const BAND_PADDING: f64 = 0.2;
/// Preferred tick count on numeric axes.
pub const TICK_COUNT: usize = 4;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every edge.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// Lower bound of a numeric domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DomainFloor {
    /// Domain starts at zero regardless of the data.
    #[default]
    Zero,
    /// Domain starts at the observed minimum.
    DataMin,
}

/// Headroom added above the observed maximum of a numeric domain.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DomainPadding {
    /// Domain ceiling is exactly the observed maximum.
    #[default]
    None,
    /// Domain ceiling is the observed maximum plus a fixed amount.
    Fixed(f64),
}

impl DomainPadding {
    pub fn apply(&self, max: f64) -> f64 {
        match *self {
            DomainPadding::None => max,
            DomainPadding::Fixed(extra) => max + extra,
        }
    }
}

/// Immutable layout configuration threaded through frame and chart construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub point_radius: f64,
    pub band_padding: f64,
    pub tick_count: usize,
    pub domain_floor: DomainFloor,
    pub domain_padding: DomainPadding,
}

impl Layout {
    /// Layout with the given frame size and default everything else.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_domain_floor(mut self, floor: DomainFloor) -> Self {
        self.domain_floor = floor;
        self
    }

    pub fn with_domain_padding(mut self, padding: DomainPadding) -> Self {
        self.domain_padding = padding;
        self
    }

    /// Usable plot width; zero when margins exceed the frame.
    pub fn plot_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    /// Usable plot height; zero when margins exceed the frame.
    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            point_radius: POINT_RADIUS,
            band_padding: BAND_PADDING,
            tick_count: TICK_COUNT,
            domain_floor: DomainFloor::Zero,
            domain_padding: DomainPadding::None,
        }
    }
}
