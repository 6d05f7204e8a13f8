use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::time::Timer as AsyncTimer;
use futures_core::ready;
use pin_project_lite::pin_project;

use crate::time::{Duration, Instant};

/// Sleeps for the specified amount of time.
pub fn sleep(dur: Duration) -> Sleep {
    Sleep {
        timer: AsyncTimer::after(dur),
        completed: false,
    }
}

/// Sleeps for the specified number of milliseconds.
///
/// This is the millisecond-counted convenience form of [`sleep`]. The future
/// resolves no earlier than `ms` milliseconds after the call; there is no
/// cancellation handle, though dropping the future unschedules the timer.
///
/// # Examples
///
/// ```no_run
/// use lull::task::delay;
///
/// #[lull::main]
/// async fn main() {
///     delay(250).await;
/// }
/// ```
pub fn delay(ms: u64) -> Sleep {
    sleep(Duration::from_millis(ms))
}

pin_project! {
    /// Sleeps for the specified amount of time.
    ///
    /// Created by [`sleep`], [`delay`] and [`sleep_until`]; resolves with the
    /// [`Instant`] at which the timer was observed fired.
    ///
    /// [`sleep_until`]: crate::task::sleep_until
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Sleep {
        #[pin]
        timer: AsyncTimer,
        completed: bool,
    }
}

impl Sleep {
    pub(crate) fn until(deadline: Instant) -> Sleep {
        Sleep {
            timer: AsyncTimer::at(deadline),
            completed: false,
        }
    }
}

impl Future for Sleep {
    type Output = Instant;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        assert!(!self.completed, "future polled after completing");
        let this = self.project();
        let instant = ready!(this.timer.poll(cx));
        *this.completed = true;
        Poll::Ready(instant)
    }
}
