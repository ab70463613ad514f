#![warn(missing_docs)]

//! Core functionality for the stepview toolkit: application plumbing,
//! flexbox layout, text rendering and the [Widget](widget::Widget) trait.

pub use vello as vg;

/// Re-exports of the windowing types widgets interact with.
pub mod window {
    pub use winit::event::*;
    pub use winit::event_loop::*;
    pub use winit::keyboard::*;
    pub use winit::window::*;
}

/// Contains the application lifecycle: the [Application](app::Application)
/// trait, the runner and the event-loop handler.
pub mod app;

/// Contains the application configuration structures.
pub mod config;

/// Contains the layout style types and the flexbox computation bridge.
pub mod layout;

/// Contains reactive value holders for widget properties.
pub mod signal;

/// Contains text layout, measurement and rendering.
pub mod text_render;

/// Contains the base [Widget](widget::Widget) trait.
pub mod widget;
