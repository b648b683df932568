//! # Fibonacci Console Generator
//!
//! This library computes Fibonacci numbers under the indexing convention F(0) = 0,
//! F(1) = 1, and formats sequences of them for console output. It backs the `fibgen`
//! binary, which prints the first ten values of the sequence twice: once from the
//! iterative producer and once from the recursive evaluator.
//!
//! ## Key Features
//! - **Streaming Iteration**: An unbounded, constant-space iterator over the
//!   sequence, so values can be printed as they are produced.
//! - **Naive Recursion**: A deliberately memoization-free recursive evaluator that
//!   preserves the textbook exponential-time decomposition.
//! - **Fast Doubling**: An O(log n) evaluator used by tests and benchmarks to
//!   cross-validate the other two methods against an independent algorithm.
//! - **Arbitrary Precision**: All values are `BigUint`, so no index has an
//!   overflow ceiling.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `OutputError`: Enum representing failures while writing a formatted sequence
//!   to an output sink.
//!
//! ### Fibonacci Computation Approaches
//!
//! #### `fibonacci::iter`
//! Unbounded iterator over F(0), F(1), F(2), ... driven by the constant-space
//! pair recurrence. The basis for sequence generation and streaming output.
//!
//! #### `fibonacci::seq_iterative`
//! Collects the first `n` values of the sequence into a vector. Runs in O(n)
//! time and O(n) space.
//!
//! #### `fibonacci::recursive`
//! Computes F(n) by naive self-referential decomposition. Non-positive inputs,
//! negative numbers included, evaluate to 0. Exponential time.
//!
//! #### `math::evaluate`
//! Computes F(n) with the fast-doubling identities in O(log n) big-integer
//! multiplications. Not used by the console output path.
//!
//! ### Output
//!
//! #### `output::write_sequence`
//! Writes a sequence of values to any `std::io::Write` sink, each value followed
//! by a single space, terminated by one newline.
//!
//! ## Usage Example
//! ```rust
//! use fibgen::fibonacci;
//! use num_bigint::BigUint;
//! let fib_sequence = fibonacci::seq_iterative(10);
//! assert_eq!(fib_sequence[9], BigUint::from(34u32));
//! ```

pub mod fibonacci;
pub mod math;
pub mod output;
