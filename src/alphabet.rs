//! # Alphabet
//!
//! The fixed set of 62 characters every generated string is drawn from.

/// Uppercase letters, lowercase letters and digits
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  abcdefghijklmnopqrstuvwxyz\
                                  0123456789";

/// Number of characters in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Check if a character is part of the alphabet
///
/// ```rust
/// use randstr::alphabet::is_alphabet_char;
///
/// assert!(is_alphabet_char('q'));
/// assert!(is_alphabet_char('7'));
/// assert!(!is_alphabet_char('_'));
/// ```
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Get the alphabet character at an index
pub fn index_to_char(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|b| char::from(*b))
}
