use std::sync::{Arc, RwLock};

/// Shared value with interior mutability.
///
/// The form keeps its `form_is_valid` flag in a `State<bool>` so the pending
/// debounced evaluation can write it from a spawned task while the owner
/// keeps reading it. Clones share the same value.
///
/// Lock poisoning is recovered from rather than propagated: a reader always
/// gets the last written value.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Update the value in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = State::new(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
    }

    #[test]
    fn test_update_in_place() {
        let state = State::new(vec![1]);
        state.update(|v| v.push(2));
        assert_eq!(state.get(), vec![1, 2]);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let state = State::new(0);
        let writer = state.clone();
        let _ = std::thread::spawn(move || {
            writer.update(|v| {
                *v = 7;
                panic!("poison the lock");
            });
        })
        .join();

        assert_eq!(state.get(), 7);
        state.set(8);
        assert_eq!(state.get(), 8);
    }
}
