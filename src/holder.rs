//! The process-wide singleton holder.
//!
//! [`Singleton`] is the concrete rendition of the pattern: a lazily-created,
//! process-wide value carrying two mutable fields (a name and a number),
//! reachable from anywhere via [`Singleton::instance`].
//!
//! The textbook rendition checks a plain static for null and allocates on
//! first use, which races when two threads arrive before initialisation.
//! Here the first access goes through a `std::sync::OnceLock`, so concurrent
//! first callers all observe the same allocation.
//!
//! Thread safety: the fields are stored behind `Mutex`es so that they can be
//! changed from any thread.  Each test that changes a field should restore it
//! when done (or use a [`ScopedState`] guard).

use std::sync::{Mutex, OnceLock};

/// The process-wide singleton value.
///
/// Carries a mutable **name** and **num**.  The only way to reach an instance
/// is [`Singleton::instance`]; the constructor is private, so at most one
/// instance exists per process lifetime.
pub struct Singleton {
    /// The current name.  Empty until the first [`set_name`][Self::set_name].
    name: Mutex<String>,
    /// The current number.  Zero until the first [`set_num`][Self::set_num].
    num: Mutex<i32>,
}

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

impl Singleton {
    /// Return a reference to the global singleton.
    ///
    /// The first call constructs the instance with an empty name and a zero
    /// number; every subsequent call returns the same instance.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| Singleton {
            name: Mutex::new(String::new()),
            num: Mutex::new(0),
        })
    }

    /// Return the current name.
    ///
    /// Returns the empty string if no name has been set.
    pub fn name(&self) -> String {
        self.name.lock().expect("Singleton mutex poisoned").clone()
    }

    /// Return the current number.
    ///
    /// Returns `0` if no number has been set.
    pub fn num(&self) -> i32 {
        *self.num.lock().expect("Singleton mutex poisoned")
    }

    /// Overwrite the name.  Any string is accepted.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.lock().expect("Singleton mutex poisoned") = name.into();
    }

    /// Overwrite the number.  Any value is accepted.
    pub fn set_num(&self, num: i32) {
        *self.num.lock().expect("Singleton mutex poisoned") = num;
    }
}

/// Restores the singleton's fields when dropped.
///
/// Captures the current name and number on construction and writes them back
/// on drop.  The instance itself persists; only the field values roll back.
/// Tests that mutate the shared instance wrap themselves in one of these so
/// they do not leak state into each other.
///
/// # Example
/// ```
/// use singleton_practice::{ScopedState, Singleton};
///
/// Singleton::instance().set_num(1);
/// {
///     let _restore = ScopedState::new();
///     Singleton::instance().set_num(99);
/// }
/// assert_eq!(Singleton::instance().num(), 1);
/// ```
#[must_use = "the captured state is restored when the guard is dropped"]
pub struct ScopedState {
    name: String,
    num: i32,
}

impl ScopedState {
    /// Capture the current field values of the global instance.
    pub fn new() -> Self {
        let instance = Singleton::instance();
        Self {
            name: instance.name(),
            num: instance.num(),
        }
    }
}

impl Default for ScopedState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedState {
    fn drop(&mut self) {
        let instance = Singleton::instance();
        instance.set_name(std::mem::take(&mut self.name));
        instance.set_num(self.num);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
