//! Line-based prompts

use std::io::{self, BufRead, Write};

/// Print `message` and read one line of input
///
/// Only the line terminator is removed; other whitespace is kept as typed.
/// Bytes that are not valid UTF-8 become replacement characters, so such a
/// line reaches the caller as ordinary (invalid) input. Returns `None` once
/// input is exhausted.
///
/// # Errors
///
/// Returns any I/O error from writing the prompt or reading the line.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_ending_only() {
        let mut input = Cursor::new(" a \r\nnext\n");
        let mut out = Vec::new();

        assert_eq!(
            prompt(&mut input, &mut out, "Guess: ").unwrap().as_deref(),
            Some(" a ")
        );
        assert_eq!(
            prompt(&mut input, &mut out, "Guess: ").unwrap().as_deref(),
            Some("next")
        );
        assert_eq!(String::from_utf8(out).unwrap(), "Guess: Guess: ");
    }

    #[test]
    fn prompt_empty_line() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("")
        );
    }

    #[test]
    fn prompt_last_line_without_newline() {
        let mut input = Cursor::new("3");
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("3")
        );
    }

    #[test]
    fn prompt_invalid_utf8_is_lossy() {
        let mut input = Cursor::new(b"\xff\xfe\r\nok\n".to_vec());
        let mut out = Vec::new();

        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("\u{fffd}\u{fffd}")
        );
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("ok")
        );
    }

    #[test]
    fn prompt_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(prompt(&mut input, &mut out, "> ").unwrap(), None);
    }
}
