use crate::app::context::AppContext;
use crate::app::handler::AppHandler;
use crate::app::update::UpdateManager;
use crate::config::AppConfig;
use crate::widget::Widget;
use stepview_theme::theme::Theme;
use winit::dpi::{LogicalSize, Size};
use winit::event_loop::EventLoop;
use winit::window::WindowAttributes;

/// Creates the event loop and window and drives the [AppHandler].
pub struct AppRunner<T: Theme> {
    config: AppConfig<T>,
}

impl<T: Theme> AppRunner<T> {
    /// Create a new runner with the given [AppConfig].
    pub fn new(config: AppConfig<T>) -> Self {
        Self { config }
    }

    /// Run the application with the given state and widget builder.
    pub fn run<S, W, F>(self, state: S, builder: F)
    where
        W: Widget,
        F: Fn(AppContext, S) -> W,
    {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let attrs = Self::build_window_attributes(&self.config);

        log::info!("Launching application...");
        let update = UpdateManager::new();

        event_loop
            .run_app(&mut AppHandler::new(
                attrs,
                self.config,
                builder,
                state,
                update,
            ))
            .expect("Failed to run event loop");
    }

    /// Build window attributes from the configuration.
    fn build_window_attributes(config: &AppConfig<T>) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_inner_size(LogicalSize::new(config.window.size.x, config.window.size.y))
            .with_resizable(config.window.resizable)
            .with_title(config.window.title.clone())
            .with_visible(config.window.visible)
            .with_decorations(config.window.decorations);

        attrs.min_inner_size = config
            .window
            .min_size
            .map(|v| Size::Logical(LogicalSize::new(v.x, v.y)));

        attrs
    }
}
