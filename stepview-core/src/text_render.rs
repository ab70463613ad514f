//! Text rendering using Parley for text layout and glyph mapping.

use parley::fontique::{Collection, CollectionOptions};
use parley::style::FontWeight;
use parley::{Alignment, FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::Affine;
use vello::peniko::{Brush, Fill};
use vello::Scene;

/// Measured extents of a laid-out piece of text.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextMetrics {
    /// Total advance width.
    pub width: f32,
    /// Total line height.
    pub height: f32,
    /// Ascent of the first line.
    pub ascent: f32,
    /// Descent of the first line.
    pub descent: f32,
}

/// Text rendering context that manages the font collection and layout state.
pub struct TextRenderContext {
    font_cx: FontContext,
    layout_cx: LayoutContext<[u8; 4]>,
}

impl TextRenderContext {
    /// Create a new text rendering context with the system fonts loaded.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    fn build_layout(
        &mut self,
        text: &str,
        font_size: f32,
        bold: bool,
        max_width: Option<f32>,
    ) -> Layout<[u8; 4]> {
        let display_scale = 1.0;
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, display_scale, true);

        builder.push_default(StyleProperty::FontSize(font_size));
        if bold {
            builder.push_default(StyleProperty::FontWeight(FontWeight::BOLD));
        }

        let mut layout = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(max_width, Alignment::Start, Default::default());
        layout
    }

    /// Measure text without rendering it.
    pub fn measure(&mut self, text: &str, font_size: f32, bold: bool) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let layout = self.build_layout(text, font_size, bold, None);
        let (ascent, descent) = layout
            .lines()
            .next()
            .map(|line| {
                let metrics = line.metrics();
                (metrics.ascent, metrics.descent)
            })
            .unwrap_or((0.0, 0.0));

        TextMetrics {
            width: layout.width(),
            height: layout.height(),
            ascent,
            descent,
        }
    }

    /// Render text into the scene at the transform's origin.
    #[allow(clippy::too_many_arguments)]
    pub fn render_text(
        &mut self,
        scene: &mut Scene,
        text: &str,
        font_size: f32,
        bold: bool,
        brush: Brush,
        transform: Affine,
        hint: bool,
        max_width: Option<f32>,
    ) {
        if text.is_empty() {
            return;
        }

        let layout = self.build_layout(text, font_size, bold, max_width);
        self.render_layout(scene, &layout, &brush, transform, hint);
    }

    fn render_layout(
        &self,
        scene: &mut Scene,
        layout: &Layout<[u8; 4]>,
        brush: &Brush,
        transform: Affine,
        hint: bool,
    ) {
        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
                let coords = run.normalized_coords();

                let glyphs: Vec<_> = glyph_run.glyphs().collect();
                if glyphs.is_empty() {
                    continue;
                }

                scene
                    .draw_glyphs(font)
                    .brush(brush)
                    .hint(hint)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(font_size)
                    .normalized_coords(coords)
                    .draw(
                        Fill::NonZero,
                        glyphs.into_iter().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }
}

impl Default for TextRenderContext {
    fn default() -> Self {
        Self::new()
    }
}
