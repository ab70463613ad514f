//! TOML theme configuration.
//!
//! The built-in [StepTheme] can be partially overridden from a TOML file.
//! Only the properties present in the file are replaced; everything else
//! keeps its built-in value.
//!
//! ```toml
//! [window]
//! background = "#fafafa"
//!
//! [step_view]
//! color_selected = "#009688"
//! fill_radius = 24.0
//!
//! [button]
//! color_idle = "#607d8b"
//!
//! [text]
//! color = "#212121"
//! ```
//!
//! The `STEPVIEW_THEME_CONFIG` environment variable points at the file to
//! load; see [theme_from_env].

use std::path::Path;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::error::ThemeConfigError;
use crate::id::WidgetId;
use crate::style::Style;
use crate::theme::{StepTheme, Theme};

/// A color in a configuration file, written as a hex string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigColor(#[serde(with = "crate::serde_color")] pub Color);

/// Theme configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Window-level overrides.
    pub window: Option<WindowSection>,
    /// Overrides for the step indicator widget.
    pub step_view: Option<StepViewSection>,
    /// Overrides for the button widget.
    pub button: Option<ButtonSection>,
    /// Overrides for the text widget.
    pub text: Option<TextSection>,
}

/// Window-level theme overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSection {
    /// Background color the window is cleared with.
    pub background: Option<ConfigColor>,
}

/// Style overrides for the step indicator widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepViewSection {
    /// Base color of circles and pending connector lines.
    pub color_circle: Option<ConfigColor>,
    /// Color of labels of steps other than the current one.
    pub color_text: Option<ConfigColor>,
    /// Color of completed fills, completed lines and the current label.
    pub color_selected: Option<ConfigColor>,
    /// Radius of the inner circle fill.
    pub fill_radius: Option<f32>,
    /// Width of the completed-circle ring.
    pub stroke_width: Option<f32>,
    /// Width of the connector lines.
    pub line_width: Option<f32>,
    /// Vertical gap between a circle and its label.
    pub drawable_padding: Option<f32>,
    /// Font size of the numbers and labels.
    pub text_size: Option<f32>,
}

/// Style overrides for the button widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonSection {
    /// Background color while idle.
    pub color_idle: Option<ConfigColor>,
    /// Background color while hovered.
    pub color_hovered: Option<ConfigColor>,
    /// Background color while pressed.
    pub color_pressed: Option<ConfigColor>,
}

/// Style overrides for the text widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSection {
    /// Text color.
    pub color: Option<ConfigColor>,
}

impl ThemeConfig {
    /// Load a theme configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a theme configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ThemeConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the configured overrides on top of the built-in light theme.
    pub fn into_theme(self) -> StepTheme {
        let mut theme = StepTheme::light();
        self.apply(&mut theme);
        theme
    }

    /// Apply the configured overrides to an existing theme.
    pub fn apply(&self, theme: &mut StepTheme) {
        if let Some(window) = &self.window {
            if let Some(ConfigColor(background)) = window.background {
                theme.set_window_background(background);
            }
        }

        if let Some(section) = &self.step_view {
            let id = WidgetId::new("stepview-widgets", "StepView");
            let mut style = theme.of(id.clone()).unwrap_or_default();
            set_color(&mut style, "color_circle", section.color_circle);
            set_color(&mut style, "color_text", section.color_text);
            set_color(&mut style, "color_selected", section.color_selected);
            set_float(&mut style, "fill_radius", section.fill_radius);
            set_float(&mut style, "stroke_width", section.stroke_width);
            set_float(&mut style, "line_width", section.line_width);
            set_float(&mut style, "drawable_padding", section.drawable_padding);
            set_float(&mut style, "text_size", section.text_size);
            theme.set_style(id, style);
        }

        if let Some(section) = &self.button {
            let id = WidgetId::new("stepview-widgets", "Button");
            let mut style = theme.of(id.clone()).unwrap_or_default();
            set_color(&mut style, "color_idle", section.color_idle);
            set_color(&mut style, "color_hovered", section.color_hovered);
            set_color(&mut style, "color_pressed", section.color_pressed);
            theme.set_style(id, style);
        }

        if let Some(section) = &self.text {
            let id = WidgetId::new("stepview-widgets", "Text");
            let mut style = theme.of(id.clone()).unwrap_or_default();
            set_color(&mut style, "color", section.color);
            theme.set_style(id, style);
        }
    }
}

fn set_color(style: &mut Style, name: &str, value: Option<ConfigColor>) {
    if let Some(ConfigColor(color)) = value {
        style.set_color(name, color);
    }
}

fn set_float(style: &mut Style, name: &str, value: Option<f32>) {
    if let Some(float) = value {
        style.set_float(name, float);
    }
}

/// Resolve the theme for an application start.
///
/// Reads the `STEPVIEW_THEME_CONFIG` environment variable; if it points at a
/// readable TOML file, the overrides are applied on top of the built-in light
/// theme. Load failures are logged and the built-in theme is used as-is.
pub fn theme_from_env() -> StepTheme {
    match std::env::var("STEPVIEW_THEME_CONFIG") {
        Ok(path) => match ThemeConfig::from_file(&path) {
            Ok(config) => {
                log::info!("loaded theme config from {}", path);
                config.into_theme()
            },
            Err(err) => {
                log::warn!("ignoring theme config {}: {}", path, err);
                StepTheme::light()
            },
        },
        Err(_) => StepTheme::light(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::peniko::Color;

    #[test]
    fn overrides_only_named_properties() {
        let config = ThemeConfig::from_str(
            r##"
            [step_view]
            color_selected = "#009688"
            fill_radius = 24.0
            "##,
        )
        .unwrap();

        let theme = config.into_theme();
        let style = theme
            .of(WidgetId::new("stepview-widgets", "StepView"))
            .unwrap();

        assert_eq!(
            style.get_color("color_selected"),
            Some(Color::from_rgb8(0x00, 0x96, 0x88))
        );
        assert_eq!(style.get_float("fill_radius"), Some(24.0));
        // untouched built-in values survive
        assert_eq!(style.get_float("stroke_width"), Some(4.0));
        assert!(style.get_color("color_circle").is_some());
    }

    #[test]
    fn window_background_override() {
        let config = ThemeConfig::from_str(
            r##"
            [window]
            background = "#000000"
            "##,
        )
        .unwrap();

        let theme = config.into_theme();
        assert_eq!(theme.window_background(), Color::from_rgb8(0, 0, 0));
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(ThemeConfig::from_str("[nonsense]\nvalue = 1\n").is_err());
        assert!(ThemeConfig::from_str("[step_view]\nfill_radius = \"big\"\n").is_err());
    }

    #[test]
    fn empty_config_is_the_builtin_theme() {
        let theme = ThemeConfig::default().into_theme();
        let builtin = StepTheme::light();
        assert_eq!(theme.window_background(), builtin.window_background());
    }
}
