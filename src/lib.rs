#![warn(future_incompatible, unreachable_pub)]

//! Tiny async helpers for single-threaded programs.
//!
//! This is a minimal helper library built around one asynchronous primitive,
//! a timer-driven delay, plus two synchronous odds and ends that tend to
//! travel with it: capitalizing the first character of a string, and a no-op
//! placeholder callback.
//!
//! # Examples
//!
//! ```no_run
//! use lull::task::delay;
//! use lull::text::capitalize;
//!
//! #[lull::main]
//! async fn main() {
//!     delay(150).await;
//!     println!("{}, world", capitalize("hello"));
//! }
//! ```
//!
//! # Design Decisions
//!
//! This library is entirely self-contained. It does not share any traits or
//! types with other async runtimes, and it does not depend on one: a small
//! single-threaded event loop in [`runtime`] drives the timers. The loop is
//! cooperative and makes no use of worker threads, so none of the futures
//! here carry `Send` bounds.
//!
//! The timer facility is an explicit collaborator rather than hidden global
//! state: [`runtime::block_on`] installs a [`runtime::Reactor`] for the
//! duration of the call, and everything that needs a deadline registers it
//! there. Once scheduled, a timer has no cancellation handle. Dropping the
//! future before it completes unschedules the timer; there is no way to
//! revoke it while continuing to await it.

pub mod func;
pub mod runtime;
pub mod task;
pub mod text;
pub mod time;

pub use lull_macro::attr_macro_main as main;
pub use lull_macro::attr_macro_test as test;
