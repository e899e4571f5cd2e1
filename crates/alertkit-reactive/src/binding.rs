#![forbid(unsafe_code)]

//! Binding scopes: subscription lifetimes tied to a logical owner.

use crate::observable::{Observable, Subscription};

/// Collects subscriptions for a logical scope (e.g., a bound view).
///
/// When the scope is dropped or cleared, all held subscriptions are
/// released and no callback from this scope fires again. Rebinding a view
/// clears its scope first, so observers from a previous view model cannot
/// leak into the new binding.
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Take ownership of an externally created subscription.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to an observable within this scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.subscriptions.push(sub);
        self
    }

    /// Number of active subscriptions in this scope.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all subscriptions immediately; the scope stays reusable.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl Default for BindingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn scope_holds_subscriptions() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        let mut scope = BindingScope::new();
        let s = Rc::clone(&seen);
        scope.subscribe(&obs, move |v| s.set(*v));
        assert_eq!(scope.binding_count(), 1);

        obs.set(42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn scope_drop_releases_subscriptions() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        {
            let mut scope = BindingScope::new();
            let s = Rc::clone(&seen);
            scope.subscribe(&obs, move |v| s.set(*v));
            obs.set(1);
            assert_eq!(seen.get(), 1);
        }

        obs.set(99);
        assert_eq!(seen.get(), 1, "callback must not fire after scope drop");
    }

    #[test]
    fn scope_clear_releases_and_is_reusable() {
        let obs = Observable::new(0);
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let mut scope = BindingScope::new();
        let f = Rc::clone(&first);
        scope.subscribe(&obs, move |_| f.set(true));
        scope.clear();
        assert!(scope.is_empty());

        let s = Rc::clone(&second);
        scope.subscribe(&obs, move |_| s.set(true));
        obs.set(1);
        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn scope_hold_external_subscription() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        let mut scope = BindingScope::new();
        let s = Rc::clone(&seen);
        let sub = obs.subscribe(move |v| s.set(*v));
        scope.hold(sub);
        obs.set(5);
        assert_eq!(seen.get(), 5);

        drop(scope);
        obs.set(9);
        assert_eq!(seen.get(), 5);
    }
}
