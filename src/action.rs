//! Dispatch from raised-finger counts to application actions.
//!
//! Applications usually want "3 fingers raised" to mean something. Registering that meaning
//! here keeps count-specific branching out of the frame loop and away from the classifier:
//! adding a new gesture is one more [`CountActions::on_count`] call, not a new `if`.

/// Maps each raised-finger count (0 to 5) to an optional handler.
pub struct CountActions {
    handlers: [Option<Box<dyn FnMut() + Send>>; 6],
}

impl CountActions {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    /// Registers `action` to run whenever exactly `count` fingers are raised.
    ///
    /// Replaces a previously registered handler for the same count.
    ///
    /// # Panics
    ///
    /// This method panics when `count` is greater than 5.
    pub fn on_count<F: FnMut() + Send + 'static>(&mut self, count: u8, action: F) -> &mut Self {
        assert!(count <= 5, "a hand has at most 5 raised fingers, got {count}");
        self.handlers[count as usize] = Some(Box::new(action));
        self
    }

    /// Removes the handler registered for `count`, if any.
    pub fn clear_count(&mut self, count: u8) {
        assert!(count <= 5, "a hand has at most 5 raised fingers, got {count}");
        self.handlers[count as usize] = None;
    }

    /// Runs the handler registered for `count`.
    ///
    /// Returns whether a handler was registered (and thus ran). Counts without a handler are
    /// ignored, so callers can feed every classified frame through this unconditionally.
    ///
    /// # Panics
    ///
    /// This method panics when `count` is greater than 5.
    pub fn dispatch(&mut self, count: u8) -> bool {
        assert!(count <= 5, "a hand has at most 5 raised fingers, got {count}");
        match &mut self.handlers[count as usize] {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl Default for CountActions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[test]
    fn dispatches_registered_counts_only() {
        let fives = Arc::new(AtomicUsize::new(0));
        let mut actions = CountActions::new();
        let counter = fives.clone();
        actions.on_count(5, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert!(!actions.dispatch(0));
        assert!(actions.dispatch(5));
        assert!(actions.dispatch(5));
        assert_eq!(fives.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn reregistering_replaces_the_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut actions = CountActions::new();

        let first = hits.clone();
        actions.on_count(2, move || {
            first.fetch_add(1, Ordering::Relaxed);
        });
        let second = hits.clone();
        actions.on_count(2, move || {
            second.fetch_add(10, Ordering::Relaxed);
        });

        assert!(actions.dispatch(2));
        assert_eq!(hits.load(Ordering::Relaxed), 10);

        actions.clear_count(2);
        assert!(!actions.dispatch(2));
    }

    #[test]
    #[should_panic = "at most 5 raised fingers"]
    fn rejects_impossible_counts() {
        CountActions::new().dispatch(6);
    }
}
