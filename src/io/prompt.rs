//! Prompted single-line input.

use crate::error::{CommandError, Result};
use std::ffi::OsString;
use std::io::{BufRead, Write};

/// Writes `prompt` to `output`, then reads one line from `input`.
///
/// The prompt is flushed before reading so it is visible on a terminal.
/// Returns `None` at end of input. The trailing newline is stripped. The
/// line is returned as raw OS text, so input that is not UTF-8 is kept.
///
/// # Errors
///
/// Returns [`CommandError::InputFailed`] if writing the prompt or reading
/// the line fails.
pub fn read_prompted_line<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<OsString>>
where
    R: BufRead,
    W: Write,
{
    output
        .write_all(prompt.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| CommandError::InputFailed(format!("failed to write prompt: {e}")))?;

    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .map_err(|e| CommandError::InputFailed(e.to_string()))?;

    if read == 0 {
        return Ok(None);
    }

    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(Some(os_string_from_bytes(line)))
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_first_line_only() {
        let mut input = Cursor::new("A B\nC D\n");
        let mut output = Vec::new();

        let line = read_prompted_line(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line, Some(OsString::from("A B")));
        assert_eq!(output, b"> ");
    }

    #[test]
    fn test_strips_crlf() {
        let mut input = Cursor::new("src\r\n");
        let mut output = Vec::new();
        let line = read_prompted_line(&mut input, &mut output, "").unwrap();
        assert_eq!(line, Some(OsString::from("src")));
    }

    #[test]
    fn test_line_without_newline() {
        let mut input = Cursor::new("last");
        let mut output = Vec::new();
        let line = read_prompted_line(&mut input, &mut output, "").unwrap();
        assert_eq!(line, Some(OsString::from("last")));
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let line = read_prompted_line(&mut input, &mut output, "? ").unwrap();
        assert!(line.is_none());
        assert_eq!(output, b"? ");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_line_is_kept() {
        use std::os::unix::ffi::OsStrExt;

        let mut input = Cursor::new(vec![b'd', 0xff, b'\n']);
        let mut output = Vec::new();
        let line = read_prompted_line(&mut input, &mut output, "").unwrap().unwrap();
        assert_eq!(line.as_bytes(), &[b'd', 0xff]);
    }
}
