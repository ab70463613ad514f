use std::num::NonZeroUsize;

use nalgebra::Vector2;
use stepview_theme::theme::Theme;

pub use vello::wgpu::PresentMode;
pub use vello::AaConfig;

/// Application configuration structure.
#[derive(Clone)]
pub struct AppConfig<T: Theme> {
    /// Window configuration.
    pub window: WindowConfig,
    /// Renderer configuration.
    pub render: RenderConfig,
    /// Theme of the application.
    pub theme: T,
}

impl<T: Default + Theme> Default for AppConfig<T> {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            render: RenderConfig::default(),
            theme: T::default(),
        }
    }
}

/// Window configuration.
#[derive(Clone)]
pub struct WindowConfig {
    /// The title of the window.
    pub title: String,
    /// The inner size of the window.
    pub size: Vector2<f64>,
    /// The minimum size of the window.
    pub min_size: Option<Vector2<f64>>,
    /// If the window should be resizeable.
    pub resizable: bool,
    /// If the window should be decorated (have borders).
    pub decorations: bool,
    /// If the window should be visible on startup.
    pub visible: bool,
    /// If the window should exit on close request (pressing the close window button).
    pub close_on_request: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "New App".to_string(),
            size: Vector2::new(800.0, 600.0),
            min_size: None,
            resizable: true,
            decorations: true,
            visible: true,
            close_on_request: true,
        }
    }
}

/// Renderer configuration.
#[derive(Clone)]
pub struct RenderConfig {
    /// The antialiasing config.
    pub antialiasing: AaConfig,
    /// The desired presentation mode of the surface. Falls back to the first
    /// mode the surface supports.
    pub present_mode: PresentMode,
    /// If the backend should use the CPU for most path processing.
    pub cpu: bool,
    /// The number of threads to use for shader initialization.
    pub init_threads: Option<NonZeroUsize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialiasing: AaConfig::Area,
            present_mode: PresentMode::AutoVsync,
            cpu: false,
            init_threads: None,
        }
    }
}
