// File: crates/linkplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart building, linked brushing and click toggling.

pub mod axis;
pub mod chart;
pub mod click;
pub mod dashboard;
pub mod data;
pub mod domain;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod interaction;
pub mod mark;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod types;

pub use axis::{Axis, AxisEdge, AxisScale};
pub use chart::{BarSpec, Chart, ChartBuilder, ChartId, ChartKind, ChartSpec, ScatterSpec};
pub use click::DisplayRegion;
pub use dashboard::{BuildReport, ChartDeclaration, Dashboard};
pub use data::{CsvSource, Dataset, Row, RowSource};
pub use error::{ChartError, Result};
pub use frame::Frame;
pub use geometry::{PointF, RectF};
pub use interaction::{BrushPhase, Interaction, PointerEvent};
pub use mark::{Mark, MarkId, Shape};
pub use scale::{BandScale, LinearScale};
pub use scene::{Primitive, Scene, TextAnchor};
pub use selection::{DegenerateExtent, LinkKey, SelectionController, SelectionPolicy};
pub use types::{DomainFloor, DomainPadding, Insets, Layout};
