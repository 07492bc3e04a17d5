//! Email normalization and the MD5 email hash Gravatar keys avatars by.
//!
//! Gravatar deduplicates on the hash of the trimmed, lower-cased address, so
//! normalization always happens before hashing.

use md5::{Digest, Md5};
use std::fmt;

/// Trim surrounding whitespace and lower-case an email address.
///
/// No syntax validation is done; an empty or malformed address passes through.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `input` (32 chars).
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash identifying an email address on Gravatar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailHash(String);

impl EmailHash {
    /// Normalize `email` and hash it.
    pub fn of(email: &str) -> Self {
        EmailHash(md5_hex(&normalize_email(email)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_hex_empty_input() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn md5_hex_known_content() {
        assert_eq!(
            md5_hex("user@example.com"),
            "b58996c504c5638798eb6b511e6f49af"
        );
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  Test@Example.COM \t\n"), "test@example.com");
        assert_eq!(normalize_email(""), "");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn hash_uses_normalized_form() {
        let hash = EmailHash::of("Test@Example.COM");
        assert_eq!(hash.as_str(), md5_hex("test@example.com"));
        assert_eq!(hash.as_str(), "55502f40dc8b7c769880b10874abc9d0");
    }

    #[test]
    fn equivalent_addresses_share_a_hash() {
        let variants = [
            "user@example.com",
            "USER@EXAMPLE.COM",
            "  User@Example.com",
            "user@example.com\n",
        ];
        for v in variants {
            assert_eq!(EmailHash::of(v), EmailHash::of("user@example.com"), "{v:?}");
        }
    }

    #[test]
    fn empty_and_blank_email_hash_to_empty_digest() {
        assert_eq!(EmailHash::of("").as_str(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(EmailHash::of("  ").as_str(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn hash_is_32_lowercase_hex_chars() {
        let hash = EmailHash::of("Someone.Else@Example.org");
        assert_eq!(hash.as_str().len(), 32);
        assert!(hash
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
