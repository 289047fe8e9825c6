//! Callback abstraction for component event handlers
//!
//! Components never call into the owning application directly. Every outbound
//! notification (`on_expand`, `on_width_change`, `expand_sidebar`, ...) goes
//! through a `Callback` that maps the notification into an application
//! message, so the same component can be driven headlessly in tests.
//!
//! # Examples
//!
//! ```
//! use portal_ui::Callback;
//!
//! enum Message {
//!     WidthChanged(f32),
//! }
//!
//! let on_width_change: Callback<f32, Message> = Callback::new(Message::WidthChanged);
//! assert!(matches!(on_width_change.call(230.0), Some(Message::WidthChanged(_))));
//!
//! let unset: Callback<f32, Message> = Callback::none();
//! assert!(unset.call(230.0).is_none());
//! ```

use std::fmt;

/// A callback wrapper that encapsulates optional event handlers.
///
/// An unset callback behaves as a no-op: [`Callback::call`] returns `None`.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g., a measured width)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Unit-like Callback (Callback0)
// =============================================================================

/// A callback that takes no parameters, such as `on_expand` or `collapse_sidebar`.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Call the callback without any parameters.
    ///
    /// This is a convenience method that's equivalent to `call(())`.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}
