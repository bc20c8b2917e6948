//! The declarative half of the singleton pattern.
//!
//! The concrete [`Singleton`][crate::Singleton] holder spells the pattern out
//! by hand; this module provides the shorthand for declaring further
//! process-wide values.  `std::sync::LazyLock` is the canonical container:
//! the initialiser runs exactly once, on first dereference, even under
//! concurrent access.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Declare a lazily-initialised process-wide static.
///
/// Expands to a `static` of type `LazyLock<$ty>` whose initialiser runs on
/// the first dereference.  Doc comments and a visibility qualifier may
/// precede the name; omitting the initialiser uses `Default::default()`.
///
/// # Example
/// ```
/// use singleton_practice::define_singleton;
///
/// define_singleton!(
///     /// Greeting shared across the process.
///     GREETING, String, String::from("hello")
/// );
///
/// assert_eq!(GREETING.as_str(), "hello");
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis $name:ident, $ty:ty, $init:expr) => {
        $(#[$meta])*
        $vis static $name: std::sync::LazyLock<$ty> =
            std::sync::LazyLock::new(|| $init);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $ty:ty) => {
        $crate::define_singleton!(
            $(#[$meta])* $vis $name, $ty, <$ty as Default>::default()
        );
    };
}
