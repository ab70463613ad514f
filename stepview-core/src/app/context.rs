use crate::app::update::{Update, UpdateManager};

/// Handle to the running application, passed to widgets during update and
/// render.
///
/// Cloning is cheap; callbacks may keep a clone to request work from outside
/// the widget pass.
#[derive(Clone)]
pub struct AppContext {
    update: UpdateManager,
}

impl AppContext {
    /// Create a new context around the shared update manager.
    pub fn new(update: UpdateManager) -> Self {
        Self { update }
    }

    /// Request work from the event loop.
    pub fn request(&self, update: Update) {
        self.update.insert(update);
    }

    /// Returns the shared update manager.
    pub fn update_manager(&self) -> &UpdateManager {
        &self.update
    }
}
