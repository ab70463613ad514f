use crate::app::context::AppContext;
use crate::app::runner::AppRunner;
use crate::config::AppConfig;
use crate::widget::Widget;
use stepview_theme::theme::Theme;

/// Contains the [AppContext] structure for access to the application lifecycle.
pub mod context;

/// Contains the application handler.
pub mod handler;

/// Contains the application information structure.
pub mod info;

/// Contains the [AppRunner] structure to create and run an application using `winit`.
pub mod runner;

/// Contains the update mode bitflag.
pub mod update;

/// The main application interface.
///
/// Contains the basic functions for the [AppRunner] to create and run an
/// application.
pub trait Application: Sized {
    /// The theme of the application.
    type Theme: Theme + 'static;

    /// The global state of the application.
    type State;

    /// Builds the application's widget tree.
    fn build(context: AppContext, state: Self::State) -> impl Widget;

    /// Returns the [AppConfig] for the application.
    fn config(&self) -> AppConfig<Self::Theme>;

    /// Runs the application using the [AppRunner].
    fn run(self, state: Self::State) {
        AppRunner::new(self.config()).run(state, Self::build);
    }
}
