//! Text/binary classification of template files.
//! Only files classified as text go through the renderer; anything else is copied
//! byte for byte, so the check errs on the side of calling a file binary only
//! when rendering it would clearly be unsafe.

use std::fs;
use std::io;
use std::path::Path;

// Tab, line feed, form feed, carriage return and escape appear in ordinary text files.
fn is_text_control(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | 0x0c | b'\r' | 0x1b)
}

/// Returns true if `content` must not be rendered as text.
///
/// Content is binary when it is not valid UTF-8 or when it contains a NUL or any
/// other control byte besides tab, line feed, form feed, carriage return and escape.
pub fn is_binary_content(content: &[u8]) -> bool {
    if content
        .iter()
        .any(|&byte| (byte < 0x20 && !is_text_control(byte)) || byte == 0x7f)
    {
        return true;
    }
    std::str::from_utf8(content).is_err()
}

/// Reads the file at `path` and classifies its content.
pub fn is_binary<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let content = fs::read(path)?;
    Ok(is_binary_content(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content() {
        assert!(!is_binary_content(b""));
        assert!(!is_binary_content(b"package {{ packageName }};\r\n\tclass App {}\n"));
        assert!(!is_binary_content("server.port: 8080 # 포트".as_bytes()));
        assert!(!is_binary_content(b"\x1b[32mok\x1b[0m\x0c"));
    }

    #[test]
    fn test_binary_content() {
        assert!(is_binary_content(b"PK\x03\x04\x14\x00"));
        assert!(is_binary_content(b"abc\x00def"));
        assert!(is_binary_content(&[0xff, 0xfe, b'a']));
        assert!(is_binary_content(b"del\x7f"));
    }
}
