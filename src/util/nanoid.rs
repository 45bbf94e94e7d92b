//! Short random identifiers.
//!
//! Identifiers are drawn uniformly from an alphabet using the thread-local
//! CSPRNG. Invalid settings never fail: a zero length or an empty alphabet
//! falls back to the defaults.

use std::fmt;

use rand::Rng;

/// Length used when none (or zero) is requested
pub const DEFAULT_LENGTH: usize = 8;

/// Upper/lowercase ASCII letters and digits
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A generated identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Generate an identifier with the default length and alphabet
    pub fn new() -> Self {
        Self::with_length_and_alphabet(DEFAULT_LENGTH, DEFAULT_ALPHABET)
    }

    /// Generate an identifier of `length` characters from the default alphabet
    pub fn with_length(length: usize) -> Self {
        Self::with_length_and_alphabet(length, DEFAULT_ALPHABET)
    }

    /// Generate an identifier of `length` characters drawn from `alphabet`
    pub fn with_length_and_alphabet(length: usize, alphabet: &str) -> Self {
        let length = if length == 0 { DEFAULT_LENGTH } else { length };
        let alphabet = if alphabet.is_empty() {
            DEFAULT_ALPHABET
        } else {
            alphabet
        };

        // Index by char so non-ASCII alphabets stay valid UTF-8
        let symbols: Vec<char> = alphabet.chars().collect();
        let mut rng = rand::thread_rng();

        let id = (0..length)
            .map(|_| symbols[rng.gen_range(0..symbols.len())])
            .collect();

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length_and_alphabet() {
        for _ in 0..1000 {
            let id = Id::new();
            assert_eq!(id.as_str().len(), DEFAULT_LENGTH);
            assert!(id.as_str().chars().all(|c| DEFAULT_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(Id::with_length(21).as_str().len(), 21);
        assert_eq!(Id::with_length(1).as_str().len(), 1);
    }

    #[test]
    fn test_zero_length_falls_back_to_default() {
        assert_eq!(Id::with_length(0).as_str().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn test_empty_alphabet_falls_back_to_default() {
        let id = Id::with_length_and_alphabet(32, "");
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| DEFAULT_ALPHABET.contains(c)));
    }

    #[test]
    fn test_custom_alphabet() {
        let id = Id::with_length_and_alphabet(16, "ab");
        assert!(id.as_str().chars().all(|c| c == 'a' || c == 'b'));

        let single = Id::with_length_and_alphabet(4, "x");
        assert_eq!(single.to_string(), "xxxx");
    }

    #[test]
    fn test_non_ascii_alphabet() {
        let id = Id::with_length_and_alphabet(5, "αβγ");
        assert_eq!(id.as_str().chars().count(), 5);
        assert!(id.as_str().chars().all(|c| "αβγ".contains(c)));
    }

    #[test]
    fn test_string_conversion() {
        let id = Id::with_length_and_alphabet(3, "z");
        let s: String = id.clone().into();
        assert_eq!(s, "zzz");
        assert_eq!(id.as_ref(), "zzz");
    }
}
