//! Async event loop support.
//!
//! The way to use this is to call [`block_on()`], which installs a
//! [`Reactor`] for the current thread. Code that needs a timer registers its
//! deadline with the reactor; the event loop parks the thread until the
//! earliest deadline passes and then calls the necessary wakers to make the
//! program progress.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod block_on;
mod reactor;
mod timer_queue;

pub use block_on::block_on;
pub use reactor::{Reactor, ScheduledTimer, WaitFor};

use core::cell::RefCell;

thread_local! {
    static REACTOR: RefCell<Option<Reactor>> = const { RefCell::new(None) };
}
