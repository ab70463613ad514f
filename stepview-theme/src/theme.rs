use vello::peniko::Color;

use crate::id::WidgetId;
use crate::style::Style;

/// The base trait for all themes.
///
/// A theme maps [WidgetId]s to [Style] maps. Widgets look their style up at
/// render time and fall back to built-in defaults for missing properties, so
/// a theme only needs to provide the properties it wants to override.
pub trait Theme {
    /// Returns the style of the widget with the given id, if the theme styles it.
    fn of(&self, id: WidgetId) -> Option<Style>;

    /// Returns the color the window is cleared with before widgets render.
    fn window_background(&self) -> Color;
}

/// The built-in light theme of the stepview toolkit.
///
/// Styled widgets and their properties:
/// - `StepView`: `color_circle`, `color_text`, `color_selected`,
///   `fill_radius`, `stroke_width`, `line_width`, `drawable_padding`,
///   `text_size`.
/// - `Button`: `color_idle`, `color_hovered`, `color_pressed`.
/// - `Text`: `color`.
#[derive(Clone)]
pub struct StepTheme {
    step_view: Style,
    button: Style,
    text: Style,
    window_background: Color,
}

impl StepTheme {
    /// Create the light variant of the theme.
    pub fn light() -> Self {
        let mut step_view = Style::new();
        step_view.set_color("color_circle", Color::from_rgb8(176, 190, 197));
        step_view.set_color("color_text", Color::from_rgb8(97, 97, 97));
        step_view.set_color("color_selected", Color::from_rgb8(33, 150, 243));
        step_view.set_float("fill_radius", 18.0);
        step_view.set_float("stroke_width", 4.0);
        step_view.set_float("line_width", 3.0);
        step_view.set_float("drawable_padding", 10.0);
        step_view.set_float("text_size", 16.0);

        let mut button = Style::new();
        button.set_color("color_idle", Color::from_rgb8(33, 150, 243));
        button.set_color("color_hovered", Color::from_rgb8(66, 165, 245));
        button.set_color("color_pressed", Color::from_rgb8(21, 101, 192));

        let mut text = Style::new();
        text.set_color("color", Color::from_rgb8(33, 33, 33));

        Self {
            step_view,
            button,
            text,
            window_background: Color::from_rgb8(250, 250, 250),
        }
    }

    /// Replace the style of a styled widget. Unknown ids are ignored.
    pub fn set_style(&mut self, id: WidgetId, style: Style) {
        if id.namespace() != "stepview-widgets" {
            log::warn!("StepTheme does not style foreign namespace {}", id);
            return;
        }

        match id.id() {
            "StepView" => self.step_view = style,
            "Button" => self.button = style,
            "Text" => self.text = style,
            _ => log::warn!("StepTheme does not style widget {}", id),
        }
    }

    /// Set the window background color.
    pub fn set_window_background(&mut self, color: Color) {
        self.window_background = color;
    }
}

impl Default for StepTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme for StepTheme {
    fn of(&self, id: WidgetId) -> Option<Style> {
        if id.namespace() != "stepview-widgets" {
            return None;
        }

        match id.id() {
            "StepView" => Some(self.step_view.clone()),
            "Button" => Some(self.button.clone()),
            "Text" => Some(self.text.clone()),
            _ => None,
        }
    }

    fn window_background(&self) -> Color {
        self.window_background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_own_namespace_only() {
        let theme = StepTheme::light();

        assert!(theme
            .of(WidgetId::new("stepview-widgets", "StepView"))
            .is_some());
        assert!(theme.of(WidgetId::new("other-crate", "StepView")).is_none());
        assert!(theme
            .of(WidgetId::new("stepview-widgets", "Unknown"))
            .is_none());
    }

    #[test]
    fn light_theme_carries_step_metrics() {
        let theme = StepTheme::light();
        let style = theme
            .of(WidgetId::new("stepview-widgets", "StepView"))
            .unwrap();

        assert_eq!(style.get_float("fill_radius"), Some(18.0));
        assert_eq!(style.get_float("stroke_width"), Some(4.0));
        assert!(style.get_color("color_selected").is_some());
    }
}
