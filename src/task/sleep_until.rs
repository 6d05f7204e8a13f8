use super::Sleep;
use crate::time::Instant;

/// Sleeps until the specified instant.
pub fn sleep_until(deadline: Instant) -> Sleep {
    Sleep::until(deadline)
}
