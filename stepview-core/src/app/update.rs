use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Work a widget requests from the event loop after handling events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Update: u8 {
        /// Redraw the scene.
        const DRAW = 1 << 0;
        /// Recompute the layout tree.
        const LAYOUT = 1 << 1;
        /// Force a full layout and draw pass.
        const FORCE = 1 << 2;
        /// Exit the application.
        const EXIT = 1 << 3;
    }
}

/// Shared holder of the pending [Update] flags.
///
/// The handler drains it each pass; widget callbacks may hold a clone and
/// insert flags from outside the update cycle.
#[derive(Clone, Default)]
pub struct UpdateManager {
    bits: Arc<AtomicU8>,
}

impl UpdateManager {
    /// Create a new manager with no pending updates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently pending updates.
    pub fn get(&self) -> Update {
        Update::from_bits_truncate(self.bits.load(Ordering::Acquire))
    }

    /// Replace the pending updates.
    pub fn set(&self, update: Update) {
        self.bits.store(update.bits(), Ordering::Release);
    }

    /// Add pending updates.
    pub fn insert(&self, update: Update) {
        self.bits.fetch_or(update.bits(), Ordering::AcqRel);
    }

    /// Remove pending updates.
    pub fn remove(&self, update: Update) {
        self.bits.fetch_and(!update.bits(), Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_flags() {
        let manager = UpdateManager::new();
        assert_eq!(manager.get(), Update::empty());

        manager.insert(Update::DRAW | Update::LAYOUT);
        assert!(manager.get().contains(Update::DRAW));

        manager.remove(Update::DRAW);
        assert_eq!(manager.get(), Update::LAYOUT);
    }
}
