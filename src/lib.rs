#![warn(missing_docs)]

//! A horizontal step-indicator widget and the small UI toolkit it rides on.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use stepview_core as core;
pub use stepview_theme as theme;
pub use stepview_widgets as widgets;

/// A "prelude" for users of the stepview toolkit.
///
/// Importing this module brings into scope the most common types needed to
/// build a basic stepview application.
///
/// ```rust
/// use stepview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::{context::AppContext, update::Update, Application};
    pub use crate::core::config::{AppConfig, RenderConfig, WindowConfig};
    pub use crate::core::layout::*;
    pub use crate::core::signal::{MaybeSignal, StateSignal};
    pub use crate::core::widget::{Widget, WidgetChildExt, WidgetChildrenExt, WidgetLayoutExt};

    // Theme
    pub use crate::theme::config::{theme_from_env, ThemeConfig};
    pub use crate::theme::theme::{StepTheme, Theme};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use crate::core::vg::*;

    // Widgets
    pub use crate::widgets::button::Button;
    pub use crate::widgets::container::Container;
    pub use crate::widgets::step_view::{StepView, StepViewState};
    pub use crate::widgets::text::Text;
}
