use std::io::{BufRead, Write};

use super::query::PathSearcher;
use crate::error::Error;

/// Printed once before the first prompt.
pub const BANNER: &str = "type in query";
/// Printed before every line is read.
pub const PROMPT: &str = "> ";

/// Runs the interactive loop until `input` reaches end-of-stream.
///
/// Each line is searched and every hit is written to `output` on its own
/// line. A failed search ends the whole session with [`Error::Query`];
/// stream failures surface as [`Error::Prompt`].
pub fn run_prompt<R, W>(searcher: &PathSearcher, mut input: R, mut output: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER).map_err(Error::prompt)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT).map_err(Error::prompt)?;
        output.flush().map_err(Error::prompt)?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).map_err(Error::prompt)? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        for path in searcher.search(&line)? {
            writeln!(output, "{}", path).map_err(Error::prompt)?;
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
