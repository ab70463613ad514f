use std::sync::{Arc, RwLock};

/// A shared mutable value.
///
/// Cloning a [StateSignal] produces another handle to the same value, so
/// host code and widgets can observe each other's writes.
pub struct StateSignal<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> StateSignal<T> {
    /// Create a new state signal with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        *self.inner.write().expect("signal lock poisoned") = value;
    }

    /// Run a closure with read access to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read().expect("signal lock poisoned"))
    }

    /// Run a closure with write access to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write().expect("signal lock poisoned"))
    }
}

impl<T: Clone> StateSignal<T> {
    /// Returns a clone of the stored value.
    pub fn get(&self) -> T {
        self.inner.read().expect("signal lock poisoned").clone()
    }
}

impl<T> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for StateSignal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A widget property that is either a fixed value or a [StateSignal].
///
/// Widget setters take `impl Into<MaybeSignal<T>>`, so both plain values and
/// shared signals can be passed.
pub enum MaybeSignal<T> {
    /// A fixed value.
    Value(T),
    /// A shared signal.
    Signal(StateSignal<T>),
}

impl<T: Clone> MaybeSignal<T> {
    /// Returns the current value.
    pub fn get(&self) -> T {
        match self {
            MaybeSignal::Value(value) => value.clone(),
            MaybeSignal::Signal(signal) => signal.get(),
        }
    }
}

impl<T> MaybeSignal<T> {
    /// Wrap a fixed value.
    pub fn value(value: T) -> Self {
        MaybeSignal::Value(value)
    }
}

impl<T: Default> Default for MaybeSignal<T> {
    fn default() -> Self {
        MaybeSignal::Value(T::default())
    }
}

impl<T> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        MaybeSignal::Value(value)
    }
}

impl<T> From<StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: StateSignal<T>) -> Self {
        MaybeSignal::Signal(signal)
    }
}

impl From<&str> for MaybeSignal<String> {
    fn from(value: &str) -> Self {
        MaybeSignal::Value(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_signal_is_shared_between_clones() {
        let a = StateSignal::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);
    }

    #[test]
    fn maybe_signal_tracks_signal_writes() {
        let signal = StateSignal::new(String::from("one"));
        let fixed: MaybeSignal<String> = "fixed".into();
        let tracked: MaybeSignal<String> = signal.clone().into();

        signal.set(String::from("two"));

        assert_eq!(fixed.get(), "fixed");
        assert_eq!(tracked.get(), "two");
    }
}
