// Gist list reporting.
// Prints one gist URL per line, stopping at the first malformed record.

use std::io::Write;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GistError, Result};
use crate::github::Gist;

/// Parse a gist list body and write each gist's URL to `out`.
///
/// Records are handled in order. URLs written before a malformed record
/// stay written; nothing after it is looked at. Returns the number printed.
pub fn print_gists<W: Write>(out: &mut W, body: &str) -> Result<usize> {
    let records: Vec<Value> = serde_json::from_str(body)?;

    if records.is_empty() {
        log::debug!("No gists reported from GitHub");
        return Ok(0);
    }

    let mut printed = 0;
    for (index, record) in records.into_iter().enumerate() {
        let gist = Gist::deserialize(record).map_err(|e| {
            log::debug!("Record {} has no usable url: {}", index, e);
            GistError::IncorrectStructure { index }
        })?;
        writeln!(out, "{}", gist.url).map_err(GistError::Output)?;
        printed += 1;
    }

    out.flush().map_err(GistError::Output)?;
    Ok(printed)
}
