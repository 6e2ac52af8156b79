// File: crates/figure-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::{clamp, RectI32};
use crate::grid::{fmt_tick, linspace};
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false, no text is drawn (titles, ticks, legends, annotations);
    /// pixel tests rely on this to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// When false, the grid, axis lines, and tick labels are skipped
    /// (free-form figures such as the radial call diagram).
    pub frame: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            frame: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Derive axis ranges from the series data. Bars include their baseline
    /// and full bar extent; spokes pin both axes to the ring extent. A
    /// categorical X axis keeps its slot range.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            match s.series_type {
                SeriesType::Bars => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x - s.bar_width * 0.5);
                        x_max = x_max.max(x + s.bar_width * 0.5);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                    let b = s.baseline_value();
                    y_min = y_min.min(b);
                    y_max = y_max.max(b);
                }
                SeriesType::Scatter => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Spokes => {
                    x_min = x_min.min(-RING_EXTENT);
                    x_max = x_max.max(RING_EXTENT);
                    y_min = y_min.min(-RING_EXTENT);
                    y_max = y_max.max(RING_EXTENT);
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin_frac;
        let ym = (y_max - y_min) * margin_frac;
        if !self.x_axis.is_categorical() {
            self.x_axis.min = x_min - xm;
            self.x_axis.max = x_max + xm;
        }
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent
    /// directories and overwriting any previous file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart to PNG-encoded bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read RGBA pixels");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        // Background
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        if self.frame {
            draw_grid(canvas, plot, theme);
            draw_axes(canvas, plot, &self.x_axis, &self.y_axis, theme, shaper.as_ref());
        }

        // Series, colored in insertion order
        let colors = self.assign_colors(theme);
        for (s, &color) in self.series.iter().zip(colors.iter()) {
            match s.series_type {
                SeriesType::Bars => {
                    draw_bar_series(canvas, plot, &self.x_axis, &self.y_axis, s, color)
                }
                SeriesType::Scatter => draw_scatter_series(
                    canvas, plot, &self.x_axis, &self.y_axis, s, color, theme, shaper.as_ref(),
                ),
                SeriesType::Spokes => {
                    draw_spokes_series(canvas, plot, s, color, theme, shaper.as_ref())
                }
            }
        }

        if let Some(sh) = shaper.as_ref() {
            if !self.title.is_empty() {
                sh.draw_centered(
                    canvas,
                    &self.title,
                    (opts.width / 2) as f32,
                    28.0,
                    18.0,
                    theme.title,
                    false,
                );
            }
            draw_legend(canvas, plot, &self.series, &colors, theme, sh);
        }

        Ok(surface)
    }

    /// Bar series take palette colors in the order they were added; scatter
    /// and spoke series use the theme marker/arrow colors.
    fn assign_colors(&self, theme: &Theme) -> Vec<skia::Color> {
        let mut bars_seen = 0usize;
        self.series
            .iter()
            .map(|s| match s.series_type {
                SeriesType::Bars => {
                    let c = theme.palette[bars_seen % theme.palette.len()];
                    bars_seen += 1;
                    c
                }
                SeriesType::Scatter => theme.marker,
                SeriesType::Spokes => theme.arrow,
            })
            .collect()
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// Ring positions live on the unit circle; the extent leaves room for the
// endpoint labels around it.
const RING_EXTENT: f64 = 1.4;

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, 10) {
        canvas.draw_line((x as f32, plot.top as f32), (x as f32, plot.bottom as f32), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, 6) {
        canvas.draw_line((plot.left as f32, y as f32), (plot.right as f32, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let xspan = (x.max - x.min).max(1e-9);
    let yspan = (y.max - y.min).max(1e-9);
    let sx = |v: f64| -> f32 { l + ((v - x.min) / xspan) as f32 * (r - l) };
    let sy = |v: f64| -> f32 { b - ((v - y.min) / yspan) as f32 * (b - t) };

    // Y ticks
    for v in linspace(y.min, y.max, 6) {
        let py = sy(v);
        canvas.draw_line((l - 4.0, py), (l, py), &tick_paint);
        if let Some(sh) = shaper {
            sh.draw_right(canvas, &fmt_tick(v), l - 8.0, py + 4.0, 12.0, theme.tick, true);
        }
    }

    // X ticks: category names at their slots, numeric labels otherwise
    if x.is_categorical() {
        for (i, name) in x.categories.iter().enumerate() {
            let px = sx(i as f64);
            canvas.draw_line((px, b), (px, b + 4.0), &tick_paint);
            if let Some(sh) = shaper {
                sh.draw_centered(canvas, name, px, b + 22.0, 13.0, theme.tick, false);
            }
        }
    } else {
        for v in linspace(x.min, x.max, 6) {
            let px = sx(v);
            canvas.draw_line((px, b), (px, b + 4.0), &tick_paint);
            if let Some(sh) = shaper {
                sh.draw_centered(canvas, &fmt_tick(v), px, b + 20.0, 12.0, theme.tick, true);
            }
        }
    }

    // Axis captions
    if let Some(sh) = shaper {
        if !y.label.is_empty() {
            sh.draw_left(canvas, &y.label, 10.0, t - 12.0, 13.0, theme.axis_label, false);
        }
        if !x.label.is_empty() {
            sh.draw_centered(
                canvas,
                &x.label,
                plot.center_x() as f32,
                b + 46.0,
                13.0,
                theme.axis_label,
                false,
            );
        }
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.data_xy.is_empty() {
        return;
    }
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l + ((x - x_axis.min) / xspan) as f32 * (r - l) };
    let sy = |y: f64| -> f32 { b - ((y - y_axis.min) / yspan) as f32 * (b - t) };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    let y0 = sy(series.baseline_value());
    let half = series.bar_width * 0.5;
    for &(x, v) in &series.data_xy {
        let x0 = sx(x - half);
        let x1 = sx(x + half);
        let y1 = sy(v);
        let top = y0.min(y1);
        let bot = y0.max(y1);
        let rect = skia::Rect::from_ltrb(x0, top, x1, bot.max(top + 1.0));
        canvas.draw_rect(rect, &fill);
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l + ((x - x_axis.min) / xspan) as f32 * (r - l) };
    let sy = |y: f64| -> f32 { b - ((y - y_axis.min) / yspan) as f32 * (b - t) };

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(color);

    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        let px = sx(x);
        let py = sy(y);
        canvas.draw_circle((px, py), 3.5, &marker);
        if let (Some(sh), Some(label)) = (shaper, series.point_labels.get(i)) {
            // offset like the annotations it mirrors, clamped into the plot
            let lx = clamp(px + 5.0, l, r - 4.0);
            sh.draw_left(canvas, label, lx, py - 5.0, 11.0, theme.annotation, false);
        }
    }
}

fn draw_spokes_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    series: &Series,
    color: skia::Color,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    if series.data_xy.is_empty() {
        return;
    }
    // Equal-aspect mapping: one data unit is the same number of pixels on
    // both axes, centered in the plot.
    let cx = plot.center_x() as f32;
    let cy = plot.center_y() as f32;
    let ppu = (plot.width().min(plot.height()) as f32) * 0.5 / RING_EXTENT as f32;

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.marker);

    let w_max = series.weights.iter().cloned().fold(0.0_f64, f64::max);
    let head_w = 0.05 * ppu;

    for (i, &(ux, uy)) in series.data_xy.iter().enumerate() {
        let px = cx + ux as f32 * ppu;
        let py = cy - uy as f32 * ppu;

        // arrow stops at 90% of the ring position, thickness scaled by weight
        let tip = (cx + ux as f32 * 0.9 * ppu, cy - uy as f32 * 0.9 * ppu);
        let w = series.weights.get(i).copied().unwrap_or(0.0);
        let lw = if w_max > 0.0 { 1.0 + (w / w_max) as f32 * 4.0 } else { 1.0 };
        draw_arrow(canvas, (cx, cy), tip, lw, head_w, color);

        canvas.draw_circle((px, py), 4.0, &marker);
        if let (Some(sh), Some(label)) = (shaper, series.point_labels.get(i)) {
            sh.draw_left(canvas, label, px + 5.0, py - 5.0, 12.0, theme.annotation, false);
        }
    }

    // hub
    canvas.draw_circle((cx, cy), 4.0, &marker);
    if let Some(sh) = shaper {
        if !series.hub.is_empty() {
            sh.draw_left(canvas, &series.hub, cx + 5.0, cy - 5.0, 12.0, theme.annotation, false);
        }
    }
}

/// Straight arrow with a filled triangular head at `to`.
fn draw_arrow(
    canvas: &skia::Canvas,
    from: (f32, f32),
    to: (f32, f32),
    stroke_width: f32,
    head_w: f32,
    color: skia::Color,
) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt().max(1e-3);
    let (ux, uy) = (dx / len, dy / len);
    let head_len = head_w * 1.5;

    let mut shaft = skia::Paint::default();
    shaft.set_anti_alias(true);
    shaft.set_style(skia::paint::Style::Stroke);
    shaft.set_stroke_width(stroke_width);
    shaft.set_color(color);

    let base = (to.0 - ux * head_len, to.1 - uy * head_len);
    canvas.draw_line(from, base, &shaft);

    let mut head = skia::Paint::default();
    head.set_anti_alias(true);
    head.set_style(skia::paint::Style::Fill);
    head.set_color(color);

    let half = head_w * 0.5;
    let (perp_x, perp_y) = (-uy, ux);
    let mut pb = skia::PathBuilder::new();
    pb.move_to(to);
    pb.line_to((base.0 + perp_x * half, base.1 + perp_y * half));
    pb.line_to((base.0 - perp_x * half, base.1 - perp_y * half));
    pb.close();
    let path = pb.detach();
    canvas.draw_path(&path, &head);
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: RectI32,
    series: &[Series],
    colors: &[skia::Color],
    theme: &Theme,
    shaper: &TextShaper,
) {
    let entries: Vec<(&str, skia::Color)> = series
        .iter()
        .zip(colors.iter())
        .filter(|(s, _)| !s.name.is_empty())
        .map(|(s, &c)| (s.name.as_str(), c))
        .collect();
    if entries.is_empty() {
        return;
    }

    let text_size = 12.0;
    let name_w = entries
        .iter()
        .map(|(n, _)| shaper.measure_width(n, text_size, false))
        .fold(0.0_f32, f32::max);
    let entry_h = 20.0;
    let pad = 8.0;
    let swatch = 12.0;
    let box_w = pad + swatch + 6.0 + name_w + pad;
    let box_h = pad * 2.0 + entry_h * entries.len() as f32 - 8.0;
    let x0 = plot.right as f32 - box_w - 12.0;
    let y0 = plot.top as f32 + 10.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.background);
    bg.set_alpha_f(0.85);
    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, box_w, box_h), &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.grid);
    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, box_w, box_h), &border);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    for (i, (name, color)) in entries.iter().enumerate() {
        let ey = y0 + pad + i as f32 * entry_h;
        fill.set_color(*color);
        canvas.draw_rect(skia::Rect::from_xywh(x0 + pad, ey, swatch, swatch), &fill);
        shaper.draw_left(
            canvas,
            name,
            x0 + pad + swatch + 6.0,
            ey + swatch - 1.0,
            text_size,
            theme.axis_label,
            false,
        );
    }
}
