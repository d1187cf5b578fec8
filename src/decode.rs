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

//! Functions and types for decoding Crockford base-32 strings.

use super::alphabet::digit_value;
use super::normalize::{normalize_with, ErrorMode, NormalizationRequired};
use super::{BASE, CHECK_BASE};

use core::fmt::{self, Formatter};

use alloc::string::String;

/// An error encountered while decoding a Crockford base-32 string.
#[non_exhaustive]
#[derive(Debug)]
pub enum DecodeError {
    /// The input (or the value portion of a checked input) was empty.
    Empty,
    /// The input needed normalization in [`ErrorMode::Strict`] mode.
    ///
    /// Check symbols are always decoded strictly, so this can also occur
    /// for the last character of a checked input in any mode.
    NormalizationRequired(NormalizationRequired),
    /// The normalized input contains characters outside the permitted
    /// alphabet.
    InvalidCharacter(String),
    /// The trailing check symbol does not match the decoded value.
    InvalidChecksum {
        /// The check symbol that was present.
        check: char,
        /// The value portion of the input.
        value: String,
    },
    /// The input encodes a value larger than `u64::MAX`.
    Overflow(String),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Empty => write!(f, "cannot decode an empty string"),
            Self::NormalizationRequired(e) => write!(f, "{}", e),
            Self::InvalidCharacter(s) => {
                write!(f, "string {:?} contains invalid characters", s)
            }
            Self::InvalidChecksum {
                check,
                value,
            } => write!(
                f,
                "check symbol {:?} is not the correct value for {:?}",
                check, value,
            ),
            Self::Overflow(s) => {
                write!(f, "string {:?} encodes a value larger than 64 bits", s)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

enum AccumulateError {
    InvalidCharacter,
    Overflow,
}

/// Positional base-32 evaluation of an already-normalized string.
fn accumulate(s: &str) -> Result<u64, AccumulateError> {
    let mut total: u64 = 0;
    for c in s.chars() {
        let value = match digit_value(c) {
            Some(v) if u64::from(v) < BASE => u64::from(v),
            _ => return Err(AccumulateError::InvalidCharacter),
        };
        total = total
            .checked_mul(BASE)
            .and_then(|total| total.checked_add(value))
            .ok_or(AccumulateError::Overflow)?;
    }
    Ok(total)
}

/// Decodes a Crockford base-32 string in [`ErrorMode::Silent`] mode.
pub fn decode(s: &str) -> DecodeResult<u64> {
    decode_with(s, ErrorMode::Silent)
}

/// Decodes a Crockford base-32 string with the given error mode.
///
/// This function is like [`decode`], but in [`ErrorMode::Strict`] mode any
/// input that would be changed by normalization is rejected.
pub fn decode_with(s: &str, mode: ErrorMode) -> DecodeResult<u64> {
    if s.is_empty() {
        return Err(Error::Empty);
    }
    let normalized =
        normalize_with(s, mode).map_err(Error::NormalizationRequired)?;
    if normalized.is_empty() {
        return Err(Error::InvalidCharacter(normalized));
    }
    match accumulate(&normalized) {
        Ok(total) => Ok(total),
        Err(AccumulateError::InvalidCharacter) => {
            Err(Error::InvalidCharacter(normalized))
        }
        Err(AccumulateError::Overflow) => Err(Error::Overflow(normalized)),
    }
}

/// Decodes the trailing check symbol, which is never normalized: the full
/// 37-symbol alphabet is legal, but only in its canonical form.
fn check_value(check: char) -> DecodeResult<u8> {
    let mut buf = [0; 4];
    let s = &*check.encode_utf8(&mut buf);
    let normalized = normalize_with(s, ErrorMode::Strict)
        .map_err(Error::NormalizationRequired)?;
    match digit_value(check) {
        Some(value) => Ok(value),
        None => Err(Error::InvalidCharacter(normalized)),
    }
}

/// Decodes a checked Crockford base-32 string in [`ErrorMode::Silent`] mode.
///
/// The last character is taken as a check symbol and verified against the
/// decoded value mod 37; see
/// [`encode_check`](crate::encode::encode_check).
pub fn decode_check(s: &str) -> DecodeResult<u64> {
    decode_check_with(s, ErrorMode::Silent)
}

/// Decodes a checked Crockford base-32 string with the given error mode.
///
/// The error mode applies to the value portion only; the check symbol is
/// always decoded in [`ErrorMode::Strict`] mode.
pub fn decode_check_with(s: &str, mode: ErrorMode) -> DecodeResult<u64> {
    let mut chars = s.chars();
    let check = match chars.next_back() {
        Some(c) => c,
        None => return Err(Error::Empty),
    };
    let value_part = chars.as_str();

    let value = decode_with(value_part, mode)?;
    if u64::from(check_value(check)?) != value % CHECK_BASE {
        return Err(Error::InvalidChecksum {
            check,
            value: String::from(value_part),
        });
    }
    Ok(value)
}
