use crate::time::Instant;

use slab::Slab;
use std::thread;

/// Handle to a timer registered with the [`TimerQueue`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct EventKey(usize);

#[derive(Debug)]
enum TimerState {
    /// Deadline has not been observed to pass yet.
    Pending(Instant),
    /// Deadline passed and the key was reported by `block_until`.
    Fired,
}

/// The host timing facility: a table of monotonic-clock deadlines.
///
/// This fills the role a system poller would in an I/O reactor. Timers are
/// the only event source, so "waiting for events" is parking the thread
/// until the earliest registered deadline.
#[derive(Debug)]
pub(crate) struct TimerQueue {
    timers: Slab<TimerState>,
}

impl TimerQueue {
    pub(crate) fn new() -> Self {
        Self {
            timers: Slab::new(),
        }
    }

    pub(crate) fn insert(&mut self, deadline: Instant) -> EventKey {
        EventKey(self.timers.insert(TimerState::Pending(deadline)))
    }

    pub(crate) fn remove(&mut self, key: EventKey) {
        self.timers.remove(key.0);
    }

    pub(crate) fn contains(&self, key: EventKey) -> bool {
        self.timers.contains(key.0)
    }

    /// Whether the timer's deadline has passed. Marks the timer as fired on
    /// the first positive observation so `block_until` no longer considers
    /// it when choosing how long to park.
    pub(crate) fn ready(&mut self, key: EventKey) -> bool {
        let state = &mut self.timers[key.0];
        if let TimerState::Pending(deadline) = state {
            if *deadline > Instant::now() {
                return false;
            }
            *state = TimerState::Fired;
        }
        true
    }

    /// Park the thread until at least one pending deadline passes, and
    /// return the keys of every timer that fired.
    ///
    /// # Panic
    /// Panics when no pending timer is registered: with timers as the only
    /// event source, parking with an empty table could never wake up again.
    pub(crate) fn block_until(&mut self) -> Vec<EventKey> {
        loop {
            let now = Instant::now();
            let mut fired = Vec::new();
            let mut earliest: Option<Instant> = None;
            for (key, state) in self.timers.iter_mut() {
                if let TimerState::Pending(deadline) = state {
                    let deadline = *deadline;
                    if deadline <= now {
                        *state = TimerState::Fired;
                        fired.push(EventKey(key));
                    } else if earliest.is_none_or(|e| deadline < e) {
                        earliest = Some(deadline);
                    }
                }
            }
            if !fired.is_empty() {
                return fired;
            }
            match earliest {
                Some(deadline) => thread::sleep(deadline.duration_since(now).into()),
                None => panic!(
                    "reactor cannot make progress: the pending future is not waiting on any timer"
                ),
            }
        }
    }
}
