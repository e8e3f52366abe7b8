//! JSON line I/O for the `exec` command
//!
//! - Input: one JSON operation per line on stdin, as raw bytes; a line that
//!   is not UTF-8 is left for the JSON parser to reject
//! - Output: one JSON response per line on stdout
//! - Blank lines are skipped

use std::io::{self, BufRead, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Iterate over the non-blank lines of a reader.
///
/// Only a failing read is an error here; the bytes themselves are not
/// checked.
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| line.map_err(Into::into))
        .filter(|line| !matches!(line, Ok(l) if l.iter().all(u8::is_ascii_whitespace)))
}

/// Write one value as a single JSON line
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a raw string to stdout
pub fn write_stdout(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_lines_skipped() {
        let input = "{\"op\":\"books\"}\n\n   \r\n{\"op\":\"authors\"}\n";
        let lines: Vec<Vec<u8>> = read_lines(input.as_bytes())
            .collect::<CliResult<_>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![b"{\"op\":\"books\"}".to_vec(), b"{\"op\":\"authors\"}".to_vec()]
        );
    }

    #[test]
    fn test_non_utf8_line_is_passed_through() {
        let input: &[u8] = b"{\"op\":\"\xff\"}\n{\"op\":\"books\"}\n";
        let lines: Vec<Vec<u8>> = read_lines(input).collect::<CliResult<_>>().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], b"{\"op\":\"\xff\"}".to_vec());
    }

    #[test]
    fn test_write_json_line() {
        let mut out = Vec::new();
        write_json_line(&mut out, &json!({"success": true})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"success\":true}\n");
    }
}
