// File: crates/chart-engine/src/chart.rs
// Summary: TrendChart input state, per-input recomputation, and the Skia raster pipeline.

use skia_safe as skia;
use thiserror::Error;

use crate::curve::CurveGeometry;
use crate::grid::{linspace, tick_indices};
use crate::hover::{hover_index, HoverState};
use crate::sample::{metric_max, Metric, Sample};
use crate::scale::{gridline_values, nice_max, GRID_STEPS};
use crate::text::{Face, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PLOT_HEIGHT};

/// Why a frame could not be produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable width observation has arrived; there is nothing to draw
    /// yet. A degraded-but-safe state, not a failure of the chart.
    #[error("container width not measured yet")]
    WidthNotMeasured,
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },
    #[error("PNG encode failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rendering configuration. `plot_height` is the fixed drawing height of
/// the curve area; the container observer supplies only the width.
pub struct RenderOptions {
    pub plot_height: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub show_tooltip: bool,
    /// Target number of x-axis date labels; long series are subsampled
    /// to roughly this many evenly spaced ticks.
    pub date_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plot_height: PLOT_HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            show_tooltip: true,
            date_ticks: 6,
        }
    }
}

/// Derived values for one frame: scale, geometry, label ticks. Rebuilt
/// whole on every input change; no incremental state.
#[derive(Clone, Debug)]
pub struct Frame {
    pub nice_max: f64,
    pub gridlines: [f64; GRID_STEPS + 1],
    pub curve: CurveGeometry,
    pub ticks: Vec<usize>,
    pub plot_width: f32,
}

/// Chart engine for one dashboard metric panel.
///
/// Inputs arrive through the setters from three independent sources: the
/// data collaborator (series), the container observer (width), and pointer
/// events (hover). Each setter synchronously runs one recomputation pass
/// (scale, then geometry); hover feeds back into drawing only.
pub struct TrendChart {
    opts: RenderOptions,
    samples: Vec<Sample>,
    metric: Metric,
    width: Option<f32>,
    hover: HoverState,
    frame: Option<Frame>,
}

impl TrendChart {
    pub fn new(metric: Metric, opts: RenderOptions) -> Self {
        Self {
            opts,
            samples: Vec::new(),
            metric,
            width: None,
            hover: HoverState::Idle,
            frame: None,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Derived frame, present once the chart has a measured positive plot
    /// width and at least one sample.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Replace the series (a refetch hands over a whole new window).
    /// Forces hover back to idle: the old target is meaningless.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        self.samples = samples;
        self.hover = HoverState::Idle;
        self.recompute();
    }

    /// Switch the plotted metric. Forces hover back to idle.
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
        self.hover = HoverState::Idle;
        self.recompute();
    }

    /// Accept a container width observation (content-box pixels).
    pub fn set_width(&mut self, container_width: f32) {
        self.width = Some(container_width);
        self.recompute();
    }

    /// Pointer moved to `x` pixels from the plot area's left edge.
    pub fn pointer_moved(&mut self, x: f32) {
        self.hover = match &self.frame {
            Some(frame) => match hover_index(x, frame.plot_width, self.samples.len()) {
                Some(i) => HoverState::Hovering(i),
                None => HoverState::Idle,
            },
            None => HoverState::Idle,
        };
    }

    /// Pointer left the chart.
    pub fn pointer_left(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// Sample under the pointer, if any. The only state the engine exposes
    /// back to its host beyond the rendered frame.
    pub fn hovered_sample(&self) -> Option<&Sample> {
        self.hover.index().and_then(|i| self.samples.get(i))
    }

    /// True once a usable width observation has arrived.
    pub fn is_measured(&self) -> bool {
        matches!(self.width, Some(w) if w >= 1.0)
    }

    fn plot_width(&self) -> Option<f32> {
        let w = self.width? - self.opts.insets.hsum() as f32;
        (w > 0.0).then_some(w)
    }

    /// One full recomputation pass: scale, then geometry. Cheap enough to
    /// run on every observed resize without debouncing.
    fn recompute(&mut self) {
        let Some(plot_w) = self.plot_width() else {
            self.frame = None;
            return;
        };
        if self.samples.is_empty() {
            self.frame = None;
            return;
        }
        let nice = nice_max(metric_max(&self.samples, self.metric));
        let curve = CurveGeometry::build(
            &self.samples,
            self.metric,
            plot_w,
            self.opts.plot_height,
            nice,
        );
        self.frame = Some(Frame {
            nice_max: nice,
            gridlines: gridline_values(nice),
            curve,
            ticks: tick_indices(self.samples.len(), self.opts.date_ticks),
            plot_width: plot_w,
        });
    }

    fn surface_size(&self) -> Result<(i32, i32), RenderError> {
        let w = match self.width {
            Some(w) if w >= 1.0 => w.round() as i32,
            _ => return Err(RenderError::WidthNotMeasured),
        };
        let h = (self.opts.plot_height + self.opts.insets.vsum() as f32).round() as i32;
        Ok((w, h.max(1)))
    }

    /// Render to an RGBA8 buffer; returns (pixels, width, height, stride)
    /// for windowed blitting.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let (w, h) = self.surface_size()?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        self.draw(surface.canvas());

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Surface { width: w, height: h });
        }
        Ok((pixels, w, h, stride))
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let (w, h) = self.surface_size()?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        self.draw(surface.canvas());

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `path`, creating parent directories.
    pub fn render_to_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Draw one frame, back to front: gridlines, area fill, curve stroke,
    /// hover guide + tooltip, date labels. An empty series draws only the
    /// placeholder message.
    fn draw(&self, canvas: &skia::Canvas) {
        let theme = &self.opts.theme;
        canvas.clear(theme.background);

        let shaper = if self.opts.draw_labels { Some(TextShaper::new()) } else { None };

        let Some(frame) = self.frame.as_ref() else {
            if self.samples.is_empty() {
                if let (Some(shaper), Some(width)) = (shaper.as_ref(), self.width) {
                    let height = self.opts.plot_height + self.opts.insets.vsum() as f32;
                    draw_placeholder(canvas, shaper, theme, width, height);
                }
            }
            return;
        };

        let ox = self.opts.insets.left as f32;
        let oy = self.opts.insets.top as f32;
        let h = self.opts.plot_height;

        draw_gridlines(canvas, frame, self.metric, theme, shaper.as_ref(), ox, oy, h);
        draw_area(canvas, frame, self.metric, theme, ox, oy, h);
        draw_curve(canvas, frame, self.metric, theme, ox, oy);
        if self.opts.show_tooltip {
            if let HoverState::Hovering(i) = self.hover {
                draw_hover(canvas, self, frame, i, shaper.as_ref(), ox, oy, h);
            }
        }
        if let Some(shaper) = shaper.as_ref() {
            draw_date_labels(canvas, &self.samples, frame, theme, shaper, ox, oy + h);
        }
    }
}

// ---- drawing helpers --------------------------------------------------------

const LABEL_SIZE: f32 = 11.0;
const TOOLTIP_SIZE: f32 = 12.0;

fn curve_path(curve: &CurveGeometry, ox: f32, oy: f32) -> Option<skia::Path> {
    let first = curve.anchors.first()?;
    let mut path = skia::Path::new();
    path.move_to((ox + first.x, oy + first.y));
    for seg in &curve.segments {
        path.cubic_to(
            (ox + seg.c1.x, oy + seg.c1.y),
            (ox + seg.c2.x, oy + seg.c2.y),
            (ox + seg.to.x, oy + seg.to.y),
        );
    }
    Some(path)
}

fn draw_gridlines(
    canvas: &skia::Canvas,
    frame: &Frame,
    metric: Metric,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    ox: f32,
    oy: f32,
    h: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for (row, y) in linspace(0.0, h as f64, frame.gridlines.len()).into_iter().enumerate() {
        let y_px = oy + y as f32;
        canvas.draw_line((ox, y_px), (ox + frame.plot_width, y_px), &paint);
        if let Some(shaper) = shaper {
            let label = metric.format(frame.gridlines[row]);
            shaper.draw_right(
                canvas,
                &label,
                ox - 8.0,
                y_px + LABEL_SIZE * 0.4,
                LABEL_SIZE,
                theme.axis_label,
                Face::Value,
            );
        }
    }
}

fn draw_area(
    canvas: &skia::Canvas,
    frame: &Frame,
    metric: Metric,
    theme: &Theme,
    ox: f32,
    oy: f32,
    h: f32,
) {
    // single sample: a marker, no area
    if frame.curve.segments.is_empty() {
        return;
    }
    let Some((last_corner, first_corner)) = frame.curve.baseline_corners(h) else { return };
    let Some(mut path) = curve_path(&frame.curve, ox, oy) else { return };
    path.line_to((ox + last_corner.x, oy + last_corner.y));
    path.line_to((ox + first_corner.x, oy + first_corner.y));
    path.close();

    let color = theme.metric_color(metric);
    let top = skia::Color::from_argb(96, color.r(), color.g(), color.b());
    let bottom = skia::Color::from_argb(0, color.r(), color.g(), color.b());

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    // dense at the curve, transparent at the baseline
    paint.set_shader(skia::gradient_shader::linear(
        (skia::Point::new(0.0, oy), skia::Point::new(0.0, oy + h)),
        skia::gradient_shader::GradientShaderColors::Colors(&[top, bottom]),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    ));
    canvas.draw_path(&path, &paint);
}

fn draw_curve(
    canvas: &skia::Canvas,
    frame: &Frame,
    metric: Metric,
    theme: &Theme,
    ox: f32,
    oy: f32,
) {
    let color = theme.metric_color(metric);
    if frame.curve.segments.is_empty() {
        if let Some(p) = frame.curve.anchors.first() {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(color);
            canvas.draw_circle((ox + p.x, oy + p.y), 3.5, &fill);
        }
        return;
    }
    let Some(path) = curve_path(&frame.curve, ox, oy) else { return };
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}

fn draw_hover(
    canvas: &skia::Canvas,
    chart: &TrendChart,
    frame: &Frame,
    index: usize,
    shaper: Option<&TextShaper>,
    ox: f32,
    oy: f32,
    h: f32,
) {
    let Some(anchor) = frame.curve.anchors.get(index) else { return };
    let Some(sample) = chart.samples.get(index) else { return };
    let theme = &chart.opts.theme;
    let x = ox + anchor.x;

    let mut guide = skia::Paint::default();
    guide.set_anti_alias(true);
    guide.set_style(skia::paint::Style::Stroke);
    guide.set_stroke_width(1.0);
    guide.set_color(theme.guide);
    canvas.draw_line((x, oy), (x, oy + h), &guide);

    let color = theme.metric_color(chart.metric);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color);
    canvas.draw_circle((x, oy + anchor.y), 4.0, &fill);
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    ring.set_color(theme.marker_ring);
    canvas.draw_circle((x, oy + anchor.y), 5.5, &ring);

    let Some(shaper) = shaper else { return };

    let date_line = sample.date.format("%b %d, %Y").to_string();
    let value_line = format!(
        "{}: {}",
        chart.metric.label(),
        chart.metric.format(chart.metric.value_of(sample))
    );

    const PAD: f32 = 8.0;
    const LINE: f32 = 15.0;
    let text_w = shaper
        .measure_width(&date_line, TOOLTIP_SIZE, Face::Label)
        .max(shaper.measure_width(&value_line, TOOLTIP_SIZE, Face::Value));
    let panel_w = text_w + PAD * 2.0;
    let panel_h = LINE * 2.0 + PAD * 2.0;

    // anchored above the marker; flipped to the left near the right edge,
    // clamped so it never leaves the chart bounds
    let mut left = x + 10.0;
    if left + panel_w > ox + frame.plot_width {
        left = x - 10.0 - panel_w;
    }
    left = left.max(ox);
    let top = (oy + anchor.y - panel_h - 10.0).max(oy);

    let rect = skia::Rect::from_xywh(left, top, panel_w, panel_h);
    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_bg);
    canvas.draw_rrect(skia::RRect::new_rect_xy(rect, 6.0, 6.0), &bg);

    let y1 = top + PAD + TOOLTIP_SIZE * 0.8;
    shaper.draw_left(canvas, &date_line, left + PAD, y1, TOOLTIP_SIZE, theme.tooltip_text, Face::Label);
    shaper.draw_left(canvas, &value_line, left + PAD, y1 + LINE, TOOLTIP_SIZE, theme.tooltip_text, Face::Value);
}

fn draw_date_labels(
    canvas: &skia::Canvas,
    samples: &[Sample],
    frame: &Frame,
    theme: &Theme,
    shaper: &TextShaper,
    ox: f32,
    baseline_y: f32,
) {
    for &i in &frame.ticks {
        let (Some(anchor), Some(sample)) = (frame.curve.anchors.get(i), samples.get(i)) else {
            continue;
        };
        let label = sample.date.format("%b %d").to_string();
        shaper.draw_center(
            canvas,
            &label,
            ox + anchor.x,
            baseline_y + 18.0,
            LABEL_SIZE,
            theme.axis_label,
            Face::Label,
        );
    }
}

fn draw_placeholder(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    width: f32,
    height: f32,
) {
    shaper.draw_center(
        canvas,
        "No data for this period",
        width * 0.5,
        height * 0.5,
        13.0,
        theme.placeholder,
        Face::Label,
    );
}
