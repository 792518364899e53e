// File: crates/linkplot-render-skia/src/render.rs
// Summary: Headless scene rendering using Skia CPU raster surfaces (PNG file, PNG bytes, RGBA8).

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use linkplot_core::{Chart, Frame, Primitive, Scene};

use crate::text::TextShaper;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Titles and tick labels; off for pixel-exact comparisons across platforms.
    pub draw_labels: bool,
    /// Horizontal gap between frames when several scenes share one surface.
    pub gap: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, gap: 0 }
    }
}

/// RGBA8 pixels, width, height, stride in bytes.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

/// Paint `scene` onto `canvas` in frame pixels.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    for p in &scene.primitives {
        match p {
            Primitive::Circle { center, radius, classes } => {
                let c = (center.x as f32, center.y as f32);
                canvas.draw_circle(c, *radius as f32, &fill(mark_color(theme, classes)));
                if p.has_class("border") {
                    canvas.draw_circle(c, *radius as f32, &stroke(theme.border, theme.border_width));
                }
            }
            Primitive::Rect { rect, classes } => {
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                if p.has_class("brush") {
                    canvas.draw_rect(r, &fill(theme.brush_fill));
                    canvas.draw_rect(r, &stroke(theme.brush_stroke, 1.0));
                    continue;
                }
                canvas.draw_rect(r, &fill(mark_color(theme, classes)));
                if p.has_class("border") {
                    canvas.draw_rect(r, &stroke(theme.border, theme.border_width));
                }
            }
            Primitive::Line { from, to, .. } => {
                let paint = if p.has_class("axis") {
                    stroke(theme.axis_line, 1.5)
                } else {
                    stroke(theme.tick, 1.0)
                };
                canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
            }
            Primitive::Text { at, text, anchor, size, .. } => {
                if !opts.draw_labels {
                    continue;
                }
                let color = if p.has_class("title") { theme.title } else { theme.tick_label };
                shaper.draw(canvas, text, (at.x as f32, at.y as f32), *anchor, *size, color);
            }
        }
    }
}

fn mark_color(theme: &Theme, classes: &[String]) -> skia::Color {
    if classes.iter().any(|c| c == "selected") {
        theme.selected
    } else {
        theme.mark_fill(classes)
    }
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Lay `scenes` out left to right on one surface and read it back as RGBA8.
pub fn render_row_to_rgba8(scenes: &[Scene], opts: &RenderOptions) -> Result<Rgba8> {
    if scenes.is_empty() {
        anyhow::bail!("nothing to render");
    }
    let gaps = opts.gap * (scenes.len() as u32 - 1);
    let width = scenes.iter().map(|s| s.width).sum::<u32>() + gaps;
    let height = scenes.iter().map(|s| s.height).max().unwrap_or(0);
    if width == 0 || height == 0 {
        anyhow::bail!("empty surface {}x{}", width, height);
    }

    let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        let mut x = 0.0f32;
        for scene in scenes {
            canvas.save();
            canvas.translate((x, 0.0));
            canvas.clip_rect(skia::Rect::from_wh(scene.width as f32, scene.height as f32), None, None);
            paint_scene(canvas, scene, opts, &shaper);
            canvas.restore();
            x += (scene.width + opts.gap) as f32;
        }
    }

    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    let info = skia::ImageInfo::new(
        (width as i32, height as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {}x{} pixels failed", width, height);
    }
    tracing::debug!("Rendered {} scene(s) into {}x{}", scenes.len(), width, height);
    Ok((pixels, width, height, stride))
}

pub fn render_to_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<Rgba8> {
    render_row_to_rgba8(std::slice::from_ref(scene), opts)
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png((pixels, width, height, _): Rgba8) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {}x{}", width, height))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    encode_png(render_to_rgba8(scene, opts)?)
}

pub fn render_to_png(scene: &Scene, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    write_png(render_to_png_bytes(scene, opts)?, output_png_path.as_ref())
}

pub fn render_row_to_png(scenes: &[Scene], opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    write_png(encode_png(render_row_to_rgba8(scenes, opts)?)?, output_png_path.as_ref())
}

fn write_png(bytes: Vec<u8>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Rendering entry points for anything that produces a scene.
pub trait RenderScene {
    fn to_scene(&self) -> Scene;

    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        render_to_png(&self.to_scene(), opts, output_png_path)
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        render_to_png_bytes(&self.to_scene(), opts)
    }

    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8> {
        render_to_rgba8(&self.to_scene(), opts)
    }
}

impl RenderScene for Scene {
    fn to_scene(&self) -> Scene { self.clone() }
}

impl RenderScene for Frame {
    fn to_scene(&self) -> Scene { self.scene() }
}

impl RenderScene for Chart {
    fn to_scene(&self) -> Scene { self.frame.scene() }
}
