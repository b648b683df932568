use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns an unbounded iterator over the Fibonacci sequence, starting at F(0) = 0.
///
/// Each value is produced on demand from a constant-space accumulator pair, so a
/// consumer can print terms as they are generated without materializing the
/// sequence.
///
/// # Example
/// ```
/// use fibgen::fibonacci;
/// use num_bigint::BigUint;
/// let tenth = fibonacci::iter().nth(10).unwrap();
/// assert_eq!(tenth, BigUint::from(55u32));
/// ```
pub fn iter() -> impl Iterator<Item = BigUint> {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    std::iter::from_fn(move || {
        let next = &a + &b;
        // Emit a, then shift the pair: (a, b) <- (b, a + b)
        let current = mem::replace(&mut a, mem::replace(&mut b, next));
        Some(current)
    })
}

/// Generates the first `n` Fibonacci numbers using an iterative approach.
///
/// This algorithm computes each number by summing the two previous values,
/// collecting the results in a vector. It runs in O(n) time and uses O(n) space.
/// `n = 0` yields an empty vector.
///
/// # Example
/// ```
/// use fibgen::fibonacci;
/// use num_bigint::BigUint;
/// let fib_sequence = fibonacci::seq_iterative(10);
/// assert_eq!(fib_sequence[9], BigUint::from(34u32));
/// ```
pub fn seq_iterative(n: usize) -> Vec<BigUint> {
    iter().take(n).collect()
}

/// Computes F(`n`) by naive self-referential decomposition.
///
/// The case split is deliberate: every non-positive input, negative numbers
/// included, evaluates to 0 rather than being rejected. No memoization is
/// performed, so runtime is exponential in `n`, and large inputs will exhaust
/// the call stack before they finish. Callers that need large indices should
/// use [`crate::math::evaluate`] instead.
///
/// # Example
/// ```
/// use fibgen::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(fibonacci::recursive(10), BigUint::from(55u32));
/// assert_eq!(fibonacci::recursive(-5), BigUint::from(0u32));
/// ```
pub fn recursive(n: i64) -> BigUint {
    if n <= 0 {
        BigUint::zero()
    } else if n == 1 {
        BigUint::one()
    } else {
        recursive(n - 1) + recursive(n - 2)
    }
}
