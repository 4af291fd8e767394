use crate::core::primality::is_prime;

/// All primes in the inclusive range [start, end], ascending. A backwards
/// range (start > end) iterates to an empty result; no validation here.
/// Candidates are visited lazily, so only the primes are ever held.
pub fn find_primes(start: i64, end: i64) -> Vec<i64> {
    (start..=end).filter(|&num| is_prime(num)).collect()
}
