//! Themes & styling for the stepview toolkit.
//!
//! Widgets identify themselves with a [WidgetId](id::WidgetId) and look up
//! their [Style](style::Style) through the [Theme](theme::Theme) trait at
//! render time. The built-in [StepTheme](theme::StepTheme) can be partially
//! overridden from a TOML file via [ThemeConfig](config::ThemeConfig).

/// Contains the theme configuration loaded from TOML files.
pub mod config;

/// Contains the theme error types.
pub mod error;

/// Contains the widget identifier type.
pub mod id;

/// Contains hex-string serialization helpers for colors.
pub mod serde_color;

/// Contains the style map and style value types.
pub mod style;

/// Contains the [Theme](theme::Theme) trait and the built-in theme.
pub mod theme;
