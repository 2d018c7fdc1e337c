//! Sieve of Eratosthenes over a boolean flag vector. Two callable forms of
//! the same contract: allocate the flags internally, or sieve a
//! caller-supplied slice whose length defines the bound.

/// Counts primes up to `n` inclusive, allocating the flag vector internally.
pub fn sieve(n: usize) -> usize {
    let mut flags = vec![true; n + 1];
    tracing::debug!(flags = flags.len(), "allocated sieve flags");
    sieve_in_place(&mut flags)
}

/// Counts primes using a caller-supplied flag slice, pre-sized to `n + 1`
/// and initialized `true`. The slice length defines `n`; after the call,
/// `flags[i]` for `i >= 2` is `true` exactly when `i` is prime.
pub fn sieve_in_place(flags: &mut [bool]) -> usize {
    if flags.is_empty() {
        return 0;
    }
    let n = flags.len() - 1;
    // The outer bound is inclusive: when sqrt(n) is itself prime its square
    // must still be marked (n = 49 needs p = 7).
    let sqrt_n = (n as f64).sqrt() as usize;
    for p in 2..=sqrt_n {
        if flags[p] {
            let mut i = p * p;
            while i <= n {
                flags[i] = false;
                i += p;
            }
        }
    }
    // 0 and 1 are never prime; counting starts at 2.
    (2..=n).filter(|&i| flags[i]).count()
}
