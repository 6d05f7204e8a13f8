use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use lull::runtime::{block_on, Reactor};
use lull::time::Timer;

#[test]
fn block_on_returns_the_future_output() {
    assert_eq!(block_on(async { 7 }), 7);
}

#[test]
fn self_waking_futures_are_repolled() {
    struct YieldNow {
        yielded: bool,
    }

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            if self.yielded {
                Poll::Ready(())
            } else {
                self.yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    block_on(YieldNow { yielded: false });
}

#[test]
#[should_panic(expected = "inside an existing block_on")]
fn nested_block_on_panics() {
    block_on(async {
        block_on(async {});
    });
}

#[test]
#[should_panic(expected = "must be called within a lull runtime")]
fn reactor_access_requires_a_runtime() {
    let _ = Reactor::current();
}

#[test]
#[should_panic(expected = "cannot make progress")]
fn waiting_on_a_never_timer_panics() {
    block_on(async {
        Timer::never().await;
    });
}
