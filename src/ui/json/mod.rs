//! NDJSON output for `--json`
//!
//! One JSON object per line, always with an `event` field.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write one typed event as a single NDJSON line.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write one event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
