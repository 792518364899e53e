// File: crates/linkplot-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces, theming and text shaping for linkplot scenes.

pub mod render;
pub mod text;
pub mod theme;

pub use render::{
    encode_png, paint_scene, render_row_to_png, render_row_to_rgba8, render_to_png, render_to_png_bytes,
    render_to_rgba8, RenderOptions, RenderScene, Rgba8,
};
pub use text::TextShaper;
pub use theme::Theme;
