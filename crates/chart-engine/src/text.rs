// File: crates/chart-engine/src/text.rs
// Summary: Skia textlayout shaping for axis values, date labels, and the tooltip.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Which font stack a run of text uses. Formatted values take a monospaced
/// stack so digits stay column-aligned down the axis gutter; dates and the
/// placeholder take the UI stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Value,
    Label,
}

impl Face {
    fn families(self) -> &'static [&'static str] {
        match self {
            Face::Value => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
            Face::Label => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        // system font manager resolves the family fallbacks
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn shape(&self, text: &str, size: f32, color: skia::Color, face: Face) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(face.families());

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of `text` at `size`, used to size the tooltip panel before
    /// deciding which side of the marker it fits on.
    pub fn measure_width(&self, text: &str, size: f32, face: Face) -> f32 {
        self.shape(text, size, skia::Color::TRANSPARENT, face).longest_line()
    }

    /// Draw with the left edge at `x`; `y` is the text baseline.
    pub fn draw_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        face: Face,
    ) {
        let mut p = self.shape(text, size, color, face);
        // Paragraph paints from its top-left; approximate the baseline offset
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with the right edge at `x`. Gridline values hang off the plot's
    /// left edge this way.
    pub fn draw_right(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        face: Face,
    ) {
        let mut p = self.shape(text, size, color, face);
        let w = p.longest_line();
        p.paint(canvas, (x - w, y - size * 0.8));
    }

    /// Draw centered on `cx`: date ticks and the placeholder message.
    pub fn draw_center(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        face: Face,
    ) {
        let mut p = self.shape(text, size, color, face);
        let half = p.longest_line() * 0.5;
        p.paint(canvas, (cx - half, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
