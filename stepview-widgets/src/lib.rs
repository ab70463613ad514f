#![warn(missing_docs)]

//! Widgets for the stepview toolkit.
//!
//! The centerpiece is the [StepView](step_view::StepView) step indicator;
//! [Button](button::Button), [Text](text::Text) and
//! [Container](container::Container) are the supporting widgets a host
//! screen is built from.

/// Contains the [Button](button::Button) widget.
pub mod button;

/// Contains the [Container](container::Container) widget.
pub mod container;

/// Contains the [StepView](step_view::StepView) step indicator widget.
pub mod step_view;

/// Contains the [Text](text::Text) widget.
pub mod text;
