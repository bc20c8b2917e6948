//! Integration tests for the process-wide holder.
//!
//! Each file under `tests/` is its own binary and hence its own process, so
//! this is the one place the pre-initialisation defaults are observable.
//! Everything lives in a single `#[test]` to pin the order of observations.

use singleton_practice::Singleton;

#[test]
fn lifecycle_from_fresh_process() {
    // Nothing has touched the instance yet: defaults are in effect.
    let first = Singleton::instance();
    assert_eq!(first.name(), "");
    assert_eq!(first.num(), 0);

    // A write through one reference is visible through any other.
    first.set_num(7);
    let second = Singleton::instance();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.num(), 7);

    second.set_name("shared");
    assert_eq!(first.name(), "shared");
}
