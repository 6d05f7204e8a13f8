//! Function helpers.

/// Does nothing.
///
/// A placeholder for APIs that want a default callback. Unlike a bare
/// closure, `noop` always names the same function, which keeps function
/// pointers comparable and spares callers from spelling out `|| {}`.
///
/// # Examples
///
/// ```
/// use lull::func::noop;
///
/// fn run(callback: fn()) {
///     callback();
/// }
///
/// run(noop);
/// ```
pub fn noop() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_unit() {
        #[allow(clippy::unit_cmp)]
        {
            assert_eq!(noop(), ());
        }
    }

    #[test]
    fn usable_as_a_default_callback() {
        fn with_callback(cb: fn()) {
            cb();
            cb();
        }
        with_callback(noop);
    }
}
