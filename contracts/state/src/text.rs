//! Fixed-width text fields.
//!
//! Text is stored as raw UTF-8 bytes cut to the field width and right-padded
//! with [`PADDING_BYTE`]. The cut is byte-wise and may split a multi-byte
//! character; decoding is lossy so such a tail becomes U+FFFD.

use pinocchio::program_error::ProgramError;

use crate::error::AssuranceStateError;

/// Filler written after text shorter than its field.
pub const PADDING_BYTE: u8 = b' ';

/// Returns true if `text` fits in a field of `width` bytes without truncation.
#[inline]
pub fn fits(text: &str, width: usize) -> bool {
    text.len() <= width
}

/// Writes `text` into `field`, truncating or padding to `field.len()`.
///
/// Returns `true` when bytes were dropped.
pub fn write_padded(field: &mut [u8], text: &str) -> bool {
    let bytes = text.as_bytes();
    let copied = bytes.len().min(field.len());
    field[..copied].copy_from_slice(&bytes[..copied]);
    field[copied..].fill(PADDING_BYTE);
    copied < bytes.len()
}

/// Encodes `text` as a standalone padded array of `N` bytes.
pub fn padded<const N: usize>(text: &str) -> [u8; N] {
    let mut field = [PADDING_BYTE; N];
    write_padded(&mut field, text);
    field
}

/// Decodes a padded field, dropping trailing padding and NUL bytes.
pub fn read_padded(field: &[u8]) -> String {
    let end = field
        .iter()
        .rposition(|b| *b != PADDING_BYTE && *b != 0)
        .map_or(0, |i| i + 1);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Decodes the `width`-byte field starting at `offset` of `data`.
pub fn read_field(data: &[u8], offset: usize, width: usize) -> Result<String, ProgramError> {
    let end = offset
        .checked_add(width)
        .ok_or(AssuranceStateError::FieldTooShort)?;
    let field = data
        .get(offset..end)
        .ok_or(AssuranceStateError::FieldTooShort)?;
    Ok(read_padded(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_space_padded() {
        let field: [u8; 12] = padded("John Doe");
        assert_eq!(&field[..8], b"John Doe");
        assert!(field[8..].iter().all(|b| *b == b' '));
    }

    #[test]
    fn long_text_is_cut_without_error() {
        let mut field = [0u8; 4];
        assert!(write_padded(&mut field, "abcdefgh"));
        assert_eq!(&field, b"abcd");
    }

    #[test]
    fn exact_width_is_not_reported_as_truncated() {
        let mut field = [0u8; 4];
        assert!(!write_padded(&mut field, "abcd"));
        assert!(fits("abcd", 4));
        assert!(!fits("abcde", 4));
    }

    #[test]
    fn read_trims_padding_and_nuls() {
        assert_eq!(read_padded(b"claim  \0\0"), "claim");
        assert_eq!(read_padded(b"    "), "");
        assert_eq!(read_padded(b"a b "), "a b");
    }

    #[test]
    fn split_multibyte_tail_decodes_lossily() {
        // "é" is two bytes; keep only the first one.
        let field: [u8; 2] = padded("aé");
        assert_eq!(read_padded(&field), "a\u{FFFD}");
    }

    #[test]
    fn read_field_rejects_short_input() {
        assert!(read_field(b"abc", 1, 8).is_err());
        assert_eq!(read_field(b"xabc ", 1, 4).unwrap(), "abc");
    }
}
