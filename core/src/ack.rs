/// Ackermann function, deliberately without memoization.
///
/// Call count and recursion depth grow hyperexponentially with `m`; the
/// reference invocation `ack(3, 9)` needs roughly four thousand stack
/// frames. Inputs are non-negative by construction of the `u64` domain.
pub fn ack(m: u64, n: u64) -> u64 {
    if m == 0 {
        n + 1
    } else if n == 0 {
        ack(m - 1, 1)
    } else {
        ack(m - 1, ack(m, n - 1))
    }
}
