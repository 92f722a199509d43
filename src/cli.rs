//! Plumbing behind the `sorter` binary, kept here so it can be tested without spawning a process.

use std::io::Write;

use tracing::{debug, trace};

use crate::{Algorithm, Error, Result};

/// Parses every argument as a base-10 `i32`, stopping at the first malformed one.
///
/// `position` in the returned error is 1-based.
pub fn parse_numbers<S: AsRef<str>>(args: &[S]) -> Result<Vec<i32>> {
    let numbers = args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            let arg = arg.as_ref();
            arg.parse::<i32>().map_err(|source| Error::InvalidNumber {
                position: i + 1,
                value: arg.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = numbers.len(), "parsed numbers");
    Ok(numbers)
}

/// Formats `v` as `a, b, c`. An empty array formats as an empty string.
pub fn format_array(v: &[i32]) -> String {
    v.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes the algorithm name and the array, applies `algorithm` in place, and writes the array
/// again.
pub fn run<W: Write>(algorithm: Algorithm, numbers: &mut [i32], out: &mut W) -> Result<()> {
    writeln!(out, "{algorithm}")?;
    writeln!(out, "{}", format_array(numbers))?;
    trace!(before = ?numbers);

    algorithm.apply(numbers);

    trace!(after = ?numbers);
    writeln!(out, "{}", format_array(numbers))?;
    out.flush()?;

    Ok(())
}
