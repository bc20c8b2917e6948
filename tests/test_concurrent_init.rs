//! First-access race: many threads calling `instance()` before anything else
//! in the process must all observe the same allocation.

use std::sync::{Arc, Barrier};
use std::thread;

use singleton_practice::Singleton;

#[test]
fn concurrent_first_access_yields_one_instance() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Singleton::instance() as *const Singleton as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked"))
        .collect();
    assert_eq!(addresses.len(), THREADS);
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    // The winning allocation carries the untouched defaults.
    assert_eq!(Singleton::instance().name(), "");
    assert_eq!(Singleton::instance().num(), 0);
}
