//! # singleton-practice
//!
//! A pedagogical crate demonstrating the singleton design pattern: a
//! lazily-initialised, process-wide instance holder exposing two mutable
//! fields (a name and a number) via accessor methods.
//!
//! The crate has two halves:
//!
//! * [`Singleton`] — the pattern spelled out by hand: a private static cell,
//!   a single construction point, and accessors on the shared instance.
//! * [`define_singleton!`] — the declarative shorthand for further
//!   lazily-initialised process-wide statics.
//!
//! ## Quick start
//!
//! ```rust
//! use singleton_practice::Singleton;
//!
//! let instance = Singleton::instance();
//! assert_eq!(instance.name(), "");
//! assert_eq!(instance.num(), 0);
//!
//! instance.set_name("example");
//! instance.set_num(42);
//!
//! // Every later call sees the same instance.
//! assert_eq!(Singleton::instance().name(), "example");
//! assert_eq!(Singleton::instance().num(), 42);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// The process-wide singleton holder.
pub mod holder;

/// Design patterns: singleton.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use holder::{ScopedState, Singleton};
pub use patterns::singleton::LazyLock;
