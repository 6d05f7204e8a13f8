use super::{
    timer_queue::{EventKey, TimerQueue},
    REACTOR,
};

use crate::time::Instant;

use core::cell::RefCell;
use core::future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
struct Registration {
    key: EventKey,
}

impl Drop for Registration {
    fn drop(&mut self) {
        Reactor::current().deregister_event(self.key)
    }
}

/// A timer deadline registered with the [`Reactor`].
///
/// The registration is shared; the underlying timer is removed from the
/// reactor once the last clone is dropped.
#[derive(Debug, Clone)]
pub struct ScheduledTimer(Rc<Registration>);

impl ScheduledTimer {
    /// Create a future that resolves once the deadline has passed.
    pub fn wait_for(&self) -> WaitFor {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        let key = self.0.key;
        WaitFor {
            waitee: Waitee { key, unique },
            needs_deregistration: false,
        }
    }
}

/// A single wait on a registered timer. The `unique` field distinguishes
/// multiple waits on the same registration so each can park its own waker.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
struct Waitee {
    key: EventKey,
    unique: usize,
}

/// Future returned by [`ScheduledTimer::wait_for`].
#[must_use = "futures do nothing unless polled or .awaited"]
#[derive(Debug)]
pub struct WaitFor {
    waitee: Waitee,
    needs_deregistration: bool,
}

impl future::Future for WaitFor {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let reactor = Reactor::current();
        if reactor.ready(&self.as_ref().waitee, cx.waker()) {
            Poll::Ready(())
        } else {
            self.as_mut().needs_deregistration = true;
            Poll::Pending
        }
    }
}

impl Drop for WaitFor {
    fn drop(&mut self) {
        if self.needs_deregistration {
            Reactor::current().deregister_waitee(&self.waitee)
        }
    }
}

/// Manage the timers the current event loop is waiting on.
#[derive(Debug, Clone)]
pub struct Reactor {
    inner: Rc<RefCell<InnerReactor>>,
}

/// The private, internal `Reactor` implementation - factored out so we can take
/// a lock of the whole.
#[derive(Debug)]
struct InnerReactor {
    timers: TimerQueue,
    wakers: HashMap<Waitee, Waker>,
}

impl Reactor {
    /// Return a `Reactor` for the currently running `lull::runtime::block_on`.
    ///
    /// # Panic
    /// This will panic if called outside of `lull::runtime::block_on`.
    pub fn current() -> Self {
        REACTOR.with(|r| {
            r.borrow()
                .as_ref()
                .expect("Reactor::current must be called within a lull runtime")
                .clone()
        })
    }

    /// Create a new instance of `Reactor`
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(InnerReactor {
                timers: TimerQueue::new(),
                wakers: HashMap::new(),
            })),
        }
    }

    /// Block until new events are ready. Calls the respective wakers once done.
    ///
    /// # On Wakers and single-threaded runtimes
    ///
    /// At first glance it might seem silly that this goes through the motions
    /// of calling the wakers. The main waker we create here is little more
    /// than a flag. However, it is common and encouraged to use wakers to
    /// distinguish between events. Concurrency primitives may construct their
    /// own wakers to keep track of identity and wake more precisely. We do not
    /// control the wakers constructed by other libraries, and it is for this
    /// reason that we have to call all the wakers - even if by default they
    /// will do nothing.
    pub(crate) fn block_until(&self) {
        let mut reactor = self.inner.borrow_mut();
        for key in reactor.timers.block_until() {
            for (waitee, waker) in reactor.wakers.iter() {
                if waitee.key == key {
                    waker.wake_by_ref()
                }
            }
        }
    }

    /// Register a deadline with the reactor, to be waited on with
    /// [`ScheduledTimer::wait_for`].
    pub fn schedule(&self, deadline: Instant) -> ScheduledTimer {
        let mut reactor = self.inner.borrow_mut();
        let key = reactor.timers.insert(deadline);
        ScheduledTimer(Rc::new(Registration { key }))
    }

    fn deregister_event(&self, key: EventKey) {
        let mut reactor = self.inner.borrow_mut();
        reactor.timers.remove(key);
    }

    fn deregister_waitee(&self, waitee: &Waitee) {
        let mut reactor = self.inner.borrow_mut();
        reactor.wakers.remove(waitee);
    }

    fn ready(&self, waitee: &Waitee, waker: &Waker) -> bool {
        let mut reactor = self.inner.borrow_mut();
        assert!(
            reactor.timers.contains(waitee.key),
            "only live timers can be checked for readiness"
        );
        let ready = reactor.timers.ready(waitee.key);
        if !ready {
            reactor.wakers.insert(waitee.clone(), waker.clone());
        }
        ready
    }

    /// Wait for the deadline to pass.
    pub async fn wait_for(&self, deadline: Instant) {
        let timer = self.schedule(deadline);
        timer.wait_for().await
    }
}
