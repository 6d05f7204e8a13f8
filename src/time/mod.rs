//! Async time interfaces.

mod duration;
mod instant;
pub use duration::Duration;
pub use instant::Instant;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::runtime::{Reactor, ScheduledTimer, WaitFor};

/// A future that resolves once a point on the monotonic clock has passed.
///
/// A timer with no deadline never resolves. The deadline is registered with
/// the running [`Reactor`] on first poll and stays registered until the
/// timer is dropped; there is no way to cancel it while continuing to await.
#[derive(Debug)]
pub struct Timer {
    deadline: Option<Instant>,
    waiting: Option<(ScheduledTimer, WaitFor)>,
}

impl Timer {
    /// A timer that never fires.
    pub fn never() -> Timer {
        Timer {
            deadline: None,
            waiting: None,
        }
    }

    /// A timer that fires at the given deadline.
    pub fn at(deadline: Instant) -> Timer {
        Timer {
            deadline: Some(deadline),
            waiting: None,
        }
    }

    /// A timer that fires once the duration has elapsed, measured from now.
    pub fn after(duration: Duration) -> Timer {
        Timer::at(Instant::now() + duration)
    }

    /// Reset the timer to fire `duration` from now, discarding any
    /// previously registered deadline.
    pub fn set_after(&mut self, duration: Duration) {
        *self = Self::after(duration);
    }

    /// Wait for the deadline to pass.
    pub async fn wait(&self) {
        match self.deadline {
            Some(deadline) => Reactor::current().wait_for(deadline).await,
            None => std::future::pending().await,
        }
    }
}

impl Future for Timer {
    type Output = Instant;
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let Some(deadline) = this.deadline else {
            return Poll::Pending;
        };
        let (_, wait) = this.waiting.get_or_insert_with(|| {
            let timer = Reactor::current().schedule(deadline);
            let wait = timer.wait_for();
            (timer, wait)
        });
        match Pin::new(wait).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(()) => Poll::Ready(Instant::now()),
        }
    }
}
