use std::sync::Arc;

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkplot_core::{ChartBuilder, Dataset, Row, ScatterSpec};
use linkplot_render_skia::{RenderOptions, RenderScene};

fn build_chart(n: usize) -> linkplot_core::Chart {
    let species = ["setosa", "versicolor", "virginica"];
    let rows = (0..n)
        .map(|i| {
            let x = (i as f64 * 0.37).sin() * 3.0 + 4.0;
            let y = (i as f64 * 0.11).cos() * 2.0 + 3.0;
            Row::from_pairs([("x", x.to_string()), ("y", y.to_string()), ("Species", species[i % 3].to_string())])
        })
        .collect();
    let spec = ScatterSpec::new("bench", "x", "y").classify(|r| format!("point {}", r.get("Species").unwrap_or_default()));
    ChartBuilder::default()
        .build("bench", &spec.into(), Arc::new(Dataset::new("bench", rows)))
        .expect("chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[150usize, 5_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
