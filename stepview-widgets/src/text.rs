use nalgebra::Vector2;
use stepview_core::app::context::AppContext;
use stepview_core::app::info::AppInfo;
use stepview_core::app::update::Update;
use stepview_core::layout::{Dimension, LayoutNode, LayoutStyle, StyleNode};
use stepview_core::signal::MaybeSignal;
use stepview_core::text_render::TextRenderContext;
use stepview_core::vg::kurbo::Affine;
use stepview_core::vg::peniko::{Brush, Color};
use stepview_core::vg::Scene;
use stepview_core::widget::{Widget, WidgetLayoutExt};
use stepview_theme::id::WidgetId;
use stepview_theme::theme::Theme;

/// Displays the given text with optional size and hinting.
///
/// ### Theming
/// You can style the text with the following properties:
/// - `color` - The color of the text.
///
/// An explicit [with_color](Text::with_color) overrides the theme, which is
/// how labels on colored surfaces (e.g. buttons) pick a readable color.
pub struct Text {
    style: MaybeSignal<LayoutStyle>,
    text: MaybeSignal<String>,
    font_size: MaybeSignal<f32>,
    hinting: MaybeSignal<bool>,
    line_gap: MaybeSignal<f32>,
    color: Option<Color>,
    text_render: TextRenderContext,
}

impl Text {
    /// Create a new text widget with the given text.
    pub fn new(text: impl Into<MaybeSignal<String>>) -> Self {
        Self {
            style: LayoutStyle::default().into(),
            text: text.into(),
            font_size: 16.0.into(),
            hinting: true.into(),
            line_gap: 7.5.into(),
            color: None,
            text_render: TextRenderContext::new(),
        }
    }

    /// Set the hinting of the text.
    ///
    /// Hinting adjusts the display of an outline font so that it lines up
    /// with a rasterized grid.
    pub fn with_hinting(mut self, hinting: impl Into<MaybeSignal<bool>>) -> Self {
        self.hinting = hinting.into();
        self
    }

    /// Set the font size of the text.
    pub fn with_font_size(mut self, size: impl Into<MaybeSignal<f32>>) -> Self {
        self.font_size = size.into();
        self
    }

    /// Set the line gap of the text.
    ///
    /// The line gap is the space between lines of text. Defaults to `7.5`.
    pub fn with_line_gap(mut self, gap: impl Into<MaybeSignal<f32>>) -> Self {
        self.line_gap = gap.into();
        self
    }

    /// Set an explicit text color, overriding the theme.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl WidgetLayoutExt for Text {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.style = layout_style.into();
    }
}

impl Widget for Text {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        _info: &mut AppInfo,
        _context: AppContext,
    ) {
        let font_size = self.font_size.get();
        let hinting = self.hinting.get();
        let text = self.text.get();

        let color = self.color.unwrap_or_else(|| {
            theme
                .of(self.widget_id())
                .and_then(|style| style.get_color("color"))
                .unwrap_or_else(|| Color::from_rgb8(0, 0, 0))
        });

        let transform = Affine::translate((
            layout_node.layout.location.x as f64,
            layout_node.layout.location.y as f64,
        ));

        let max_width = if layout_node.layout.size.width > 0.0 {
            Some(layout_node.layout.size.width)
        } else {
            None
        };

        self.text_render.render_text(
            scene,
            &text,
            font_size,
            false,
            Brush::Solid(color),
            transform,
            hinting,
            max_width,
        );
    }

    fn layout_style(&self) -> StyleNode {
        let text = self.text.get();
        let font_size = self.font_size.get();
        let line_gap = self.line_gap.get();

        // a simple approximation for line height
        let line_height = font_size + line_gap;
        let line_count = text.lines().count().max(1) as f32;
        let calculated_height = line_height * line_count;

        let style = self.style.get();

        // default to filling the available width if not explicitly set
        let width = if style.size.x == Dimension::auto() {
            Dimension::percent(1.0)
        } else {
            style.size.x
        };

        StyleNode {
            style: LayoutStyle {
                size: Vector2::new(width, Dimension::length(calculated_height)),
                ..style
            },
            children: Vec::new(),
        }
    }

    fn update(&mut self, _: &LayoutNode, _: AppContext, _: &mut AppInfo) -> Update {
        Update::empty()
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("stepview-widgets", "Text")
    }
}
