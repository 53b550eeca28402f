use serde::de::DeserializeOwned;
use std::io::{self, Read};

use super::InputFormat;

/// Read a piped JSON or YAML request from stdin.
/// Returns None if stdin is a TTY (interactive) or empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    super::parse(trimmed, InputFormat::sniff(trimmed), "stdin").map(Some)
}
