//! Line-based questions on an arbitrary reader, so commands can be driven
//! from stdin or from a buffer in tests.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Print `question` and read one trimmed line. `None` on end of input.
pub fn ask<R: BufRead + ?Sized>(question: &str, input: &mut R) -> AppResult<Option<String>> {
    print!("{question}");
    io::stdout().flush().ok();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Yes/no question defaulting to no.
pub fn confirm<R: BufRead + ?Sized>(question: &str, input: &mut R) -> AppResult<bool> {
    let answer = ask(&format!("{question} [y/N]: "), input)?;
    Ok(matches!(
        answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("y" | "yes")
    ))
}
