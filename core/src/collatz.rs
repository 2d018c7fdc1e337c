use std::ops::RangeInclusive;

/// Counts the steps for `x` to reach 1: halve when even, otherwise `3x + 1`.
/// `steps(1)` is 0.
pub fn steps(mut x: u64) -> u64 {
    let mut steps = 0;
    while x > 1 {
        x = if x % 2 == 0 { x / 2 } else { 3 * x + 1 };
        steps += 1;
    }
    steps
}

/// Maximum step count over an inclusive range, carried as an explicit
/// accumulator rather than ambient process state.
pub fn max_steps(range: RangeInclusive<u64>) -> u64 {
    range.map(steps).max().unwrap_or(0)
}
