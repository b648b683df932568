use std::io::{self, Write};

use log::debug;

use fibgen::fibonacci;
use fibgen::output::{write_sequence, OutputError};

fn main() -> Result<(), OutputError> {
    pretty_env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    debug!("streaming the first 10 Fibonacci numbers iteratively");
    writeln!(out, "Iterative Fibonacci:")?;
    write_sequence(&mut out, fibonacci::iter().take(10))?;

    debug!("evaluating F(0)..F(9) recursively");
    writeln!(out, "Recursive Fibonacci:")?;
    write_sequence(&mut out, (0i64..10).map(fibonacci::recursive))?;

    out.flush()?;

    Ok(())
}
