//! Stack growth for the recursive phases.
//!
//! Parsing and evaluation recurse once per nesting level and once per call,
//! so deep programs can exhaust the thread's stack. Wrapping the recursive
//! step in [`ensure_sufficient_stack`] moves execution onto a fresh heap
//! segment whenever the remaining stack drops below the red zone.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }
}
