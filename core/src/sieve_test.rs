#[cfg(test)]
mod tests {
    use crate::sieve::{sieve, sieve_in_place};

    #[test]
    fn counts_match_known_values() {
        assert_eq!(sieve(10), 4);
        assert_eq!(sieve(100), 25);
        assert_eq!(sieve(1000), 168);
    }

    #[test]
    fn zero_and_one_are_not_prime() {
        assert_eq!(sieve(0), 0);
        assert_eq!(sieve(1), 0);
        assert_eq!(sieve(2), 1);
    }

    #[test]
    fn square_of_prime_boundary() {
        // sqrt(49) = 7 is prime; the inclusive outer bound must mark 49.
        assert_eq!(sieve(49), 15);
        assert_eq!(sieve(48), 15);
        assert_eq!(sieve(4), 2);
    }

    #[test]
    fn caller_supplied_flags_match_internal_allocation() {
        let mut flags = vec![true; 101];
        assert_eq!(sieve_in_place(&mut flags), sieve(100));
        assert!(flags[2]);
        assert!(flags[97]);
        assert!(!flags[4]);
        assert!(!flags[91]);
        assert!(!flags[100]);
    }

    #[test]
    fn empty_and_tiny_flag_slices() {
        let mut empty: Vec<bool> = Vec::new();
        assert_eq!(sieve_in_place(&mut empty), 0);
        assert_eq!(sieve_in_place(&mut [true]), 0);
        assert_eq!(sieve_in_place(&mut [true, true]), 0);
    }

    #[test]
    fn reference_bound() {
        assert_eq!(sieve(1_000_000), 78_498);
    }
}
