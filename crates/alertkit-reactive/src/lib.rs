#![forbid(unsafe_code)]

//! Single-threaded reactive state for UI bindings.
//!
//! An [`Observable<T>`] is a shared mutable value whose clones all point at
//! the same storage; subscribers are notified on change. A [`BindingScope`]
//! collects [`Subscription`]s for one logical owner (a bound view) so that
//! rebinding or dropping the owner cleanly disconnects every observer —
//! the explicit replacement for weak delegate back-references.
//!
//! Everything here is `Rc`-based and main-thread only, matching the
//! event-driven UI dispatch model.

pub mod binding;
pub mod observable;

pub use binding::BindingScope;
pub use observable::{Observable, Subscription};
