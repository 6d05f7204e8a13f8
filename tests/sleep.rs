use std::error::Error;
use std::pin::pin;

use futures_concurrency::prelude::*;
use futures_lite::future::poll_once;
use lull::task::{delay, sleep, sleep_until};
use lull::time::{Duration, Instant};

#[lull::test]
async fn just_sleep() -> Result<(), Box<dyn Error>> {
    sleep(Duration::from_millis(50)).await;
    Ok(())
}

#[lull::test]
async fn resolves_no_earlier_than_requested() {
    for ms in [1, 10, 35] {
        let start = Instant::now();
        delay(ms).await;
        assert!(
            start.elapsed() >= Duration::from_millis(ms),
            "delay({ms}) resolved after {:?}",
            start.elapsed()
        );
    }
}

#[lull::test]
async fn zero_delay_completes() {
    delay(0).await;
}

#[lull::test]
async fn resolves_with_the_wakeup_instant() {
    let start = Instant::now();
    let woke_at = delay(25).await;
    assert!(woke_at.duration_since(start) >= Duration::from_millis(25));
}

#[lull::test]
async fn sleep_until_a_deadline() {
    let deadline = Instant::now() + Duration::from_millis(20);
    let woke_at = sleep_until(deadline).await;
    assert!(woke_at >= deadline);
}

#[lull::test]
async fn sleep_until_an_elapsed_deadline_completes() {
    sleep_until(Instant::now()).await;
}

#[lull::test]
async fn awaiting_a_duration_sleeps() {
    let start = Instant::now();
    Duration::from_millis(15).await;
    assert!(start.elapsed() >= Duration::from_millis(15));
}

#[lull::test]
async fn concurrent_sleeps_each_honor_their_own_duration() {
    let start = Instant::now();
    let (long, short) = (delay(40), delay(10)).join().await;
    assert!(long.duration_since(start) >= Duration::from_millis(40));
    assert!(short.duration_since(start) >= Duration::from_millis(10));
}

#[lull::test]
async fn a_pending_sleep_is_not_ready_immediately() {
    assert!(poll_once(delay(60)).await.is_none());
}

#[lull::test]
#[should_panic(expected = "future polled after completing")]
async fn polling_a_completed_sleep_panics() {
    let mut slept = pin!(delay(1));
    slept.as_mut().await;
    poll_once(slept).await;
}
