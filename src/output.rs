use std::io::Write;

use num_bigint::BigUint;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Write error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// Writes a sequence of Fibonacci values to `out`, each value followed by a
/// single space, then terminates the line with one newline. An empty sequence
/// still emits the newline.
///
/// # Example
/// ```
/// use fibgen::{fibonacci, output};
/// let mut buf = Vec::new();
/// output::write_sequence(&mut buf, fibonacci::iter().take(5)).unwrap();
/// assert_eq!(buf, b"0 1 1 2 3 \n");
/// ```
pub fn write_sequence<W, I>(out: &mut W, values: I) -> Result<(), OutputError>
where
    W: Write,
    I: IntoIterator<Item = BigUint>,
{
    for value in values {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;

    Ok(())
}
