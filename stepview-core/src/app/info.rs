use nalgebra::Vector2;
use winit::event::{DeviceId, ElementState, KeyEvent, MouseButton};

/// The application information container.
///
/// Collects the input events of the current pass; [reset](AppInfo::reset) is
/// called after every widget update so events are seen exactly once.
pub struct AppInfo {
    /// The position of the cursor. If [None], the cursor left the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// The fired key events.
    pub keys: Vec<(DeviceId, KeyEvent)>,
    /// The fired mouse button events.
    pub buttons: Vec<(DeviceId, MouseButton, ElementState)>,
    /// The size of the window.
    pub size: Vector2<f64>,
}

impl AppInfo {
    /// Reset the application information for a new pass.
    pub fn reset(&mut self) {
        self.buttons.clear();
        self.keys.clear();
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            cursor_pos: None,
            keys: Vec::with_capacity(4),
            buttons: Vec::with_capacity(2),
            size: Vector2::new(0.0, 0.0),
        }
    }
}
