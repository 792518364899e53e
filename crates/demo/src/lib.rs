// File: crates/demo/src/lib.rs
// Summary: Iris dashboard declarations and shared setup for the demo binaries.

use std::path::{Path, PathBuf};

use linkplot_core::{BarSpec, ChartDeclaration, Dashboard, Layout, LinkKey, Row, ScatterSpec, SelectionPolicy};
use tracing_subscriber::EnvFilter;

/// Link group shared by all three iris charts.
pub const IRIS_GROUP: &str = "iris";

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Data directory from the first CLI argument, defaulting to `data/`.
pub fn data_dir_from_args() -> PathBuf {
    std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"))
}

fn species(row: &Row) -> String {
    row.get("Species").unwrap_or("unknown").to_string()
}

/// Two brushable flower scatters and the species count bars, all in one link group.
pub fn iris_declarations(data_dir: &Path) -> Vec<ChartDeclaration> {
    let iris = data_dir.join("iris.csv");
    let counts = data_dir.join("iris_count.csv");
    vec![
        ChartDeclaration::new(
            "vis1",
            &iris,
            ScatterSpec::new("Petal_Length vs Sepal_Length", "Petal_Length", "Sepal_Length")
                .classify(|r| format!("point {}", species(r))),
        )
        .with_brush()
        .linked(IRIS_GROUP),
        ChartDeclaration::new(
            "vis2",
            &iris,
            ScatterSpec::new("Petal_Width vs Sepal_Width", "Petal_Width", "Sepal_Width")
                .classify(|r| format!("point {}", species(r))),
        )
        .with_brush()
        .linked(IRIS_GROUP),
        ChartDeclaration::new(
            "vis3",
            &counts,
            BarSpec::new("Count of Species", "Species", "Count").classify(|r| format!("bar {}", species(r))),
        )
        .linked(IRIS_GROUP),
    ]
}

/// Dashboard with the iris link group: rows within `iris.csv`, species across files.
pub fn iris_dashboard() -> Dashboard {
    let mut dash = Dashboard::new(Layout::default(), SelectionPolicy::default());
    dash.define_group(IRIS_GROUP, LinkKey::RowThenAttribute("Species".into()));
    dash
}
