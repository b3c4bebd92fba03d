//! Reading a script from piped input.

use crate::model::error::LoadError;
use std::io::Read;

/// Read all of `reader` as a UTF-8 script.
///
/// Generic over the reader so tests can feed bytes directly.
///
/// # Errors
///
/// Returns `LoadError::Io` on read failure or invalid UTF-8.
pub fn read_script<R: Read>(mut reader: R) -> Result<String, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_everything() {
        let input = Cursor::new("first\nsecond\n");
        assert_eq!(read_script(input).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn empty_input_is_empty_script() {
        let input = Cursor::new(Vec::<u8>::new());
        assert_eq!(read_script(input).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_error() {
        let input = Cursor::new(vec![0xffu8, 0xfe]);
        assert!(matches!(read_script(input), Err(LoadError::Io(_))));
    }
}
