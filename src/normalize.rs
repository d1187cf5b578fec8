/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of Crockford32.
 *
 * Crockford32 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Crockford32 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Crockford32. If not, see <https://www.gnu.org/licenses/>.
 */

//! Normalization of human-entered base-32 strings.

#[cfg(feature = "alloc")]
use core::fmt::{self, Formatter};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Whether differences between an input string and its normalized form are
/// tolerated or rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorMode {
    /// Normalization changes are applied silently. This is the default.
    Silent,
    /// Any input that is not already in normalized form is an error.
    Strict,
}

impl Default for ErrorMode {
    fn default() -> Self {
        Self::Silent
    }
}

/// An error returned when input needed normalization in
/// [`ErrorMode::Strict`] mode.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[derive(Debug)]
pub struct NormalizationRequired {
    original: String,
}

#[cfg(feature = "alloc")]
impl NormalizationRequired {
    pub(crate) fn new(original: &str) -> Self {
        Self {
            original: String::from(original),
        }
    }

    /// The string that required normalization.
    pub fn original(&self) -> &str {
        &self.original
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for NormalizationRequired {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "string {:?} requires normalization", self.original)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for NormalizationRequired {}

#[cfg(feature = "alloc")]
fn replace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c.to_ascii_uppercase() {
            '-' => {}
            'I' | 'L' => out.push('1'),
            'O' => out.push('0'),
            c => out.push(c),
        }
    }
    out
}

/// Normalizes `s`: uppercases, maps `I` and `L` to `1` and `O` to `0`, and
/// strips hyphens.
///
/// Uppercasing happens first, so `i`, `l`, and `o` are substituted too.
/// Normalization is idempotent.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn normalize(s: &str) -> String {
    replace(s)
}

/// Normalizes `s` with the given error mode.
///
/// This function is like [`normalize`], but in [`ErrorMode::Strict`] mode
/// any input not already in normalized form is rejected.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn normalize_with(
    s: &str,
    mode: ErrorMode,
) -> Result<String, NormalizationRequired> {
    let normalized = replace(s);
    if mode == ErrorMode::Strict && normalized != s {
        return Err(NormalizationRequired::new(s));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_canonical_strings_through() {
        assert_eq!(normalize("ABC"), "ABC");
        assert_eq!(normalize_with("ABC", ErrorMode::Strict).unwrap(), "ABC");
        assert_eq!(normalize_with("DY2N", ErrorMode::Strict).unwrap(), "DY2N");
    }

    #[test]
    fn substitutes_and_strips() {
        assert_eq!(normalize("A-B-C"), "ABC");
        assert_eq!(normalize("A-B-C-IiLlOo"), "ABC111100");
        assert_eq!(normalize("dy2n"), "DY2N");
        assert_eq!(normalize("4-5-6"), "456");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn is_idempotent() {
        for &s in &["A-B-C-IiLlOo", "abc", "0o1i-", "", "*~$=U"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn strict_mode_rejects_changes() {
        for &s in &["A-B-C", "abc", "A-B-C-IiLlOo"] {
            let err = normalize_with(s, ErrorMode::Strict).unwrap_err();
            assert_eq!(err.original(), s);
            assert!(err.to_string().contains(s));
        }
    }

    #[test]
    fn silent_is_the_default_mode() {
        assert_eq!(ErrorMode::default(), ErrorMode::Silent);
        assert_eq!(normalize_with("abc", ErrorMode::Silent).unwrap(), "ABC");
    }
}
