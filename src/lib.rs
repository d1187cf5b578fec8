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

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

//! Douglas Crockford's base 32: unsigned integers encoded with an alphabet
//! chosen for human transcription (no I, L, O, or U), decoded
//! case-insensitively with tolerance for the usual substitution mistakes,
//! optionally guarded by a trailing mod-37 check symbol.

mod alphabet;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub mod decode;
pub mod encode;
pub mod normalize;

#[cfg(feature = "alloc")]
extern crate alloc;

const BASE: u64 = 32;
const CHECK_BASE: u64 = 37;

// 13 base-32 digits cover `u64::MAX`; one more slot holds a check symbol.
const MAX_DIGITS: usize = 13;
const MAX_CHECK_DIGITS: usize = MAX_DIGITS + 1;

#[macro_use]
mod digit {
    #[derive(Clone, Copy)]
    pub struct Digit(u8);

    #[macro_export]
    macro_rules! const_digit {
        ($n:expr) => {{
            use crate::digit::Digit;
            const DIGIT: Digit = Digit::__const($n);
            DIGIT
        }};
    }

    impl Digit {
        pub fn new(x: u8) -> Option<Self> {
            (x < 37).then(|| Self(x))
        }

        /// # Safety
        ///
        /// `x` must be less than 37.
        pub unsafe fn new_unchecked(x: u8) -> Self {
            debug_assert!(x < 37);
            Self(x)
        }

        #[doc(hidden)]
        pub const fn __const(n: u8) -> Self {
            const BOUNDS_CHECK: [u8; 1] = [0];
            Self(n + BOUNDS_CHECK[(n >= 37) as usize])
        }
    }

    impl From<Digit> for u8 {
        fn from(d: Digit) -> u8 {
            d.0
        }
    }
}

use digit::Digit;

pub use alphabet::{ALPHABET, CHECK_ALPHABET};

#[cfg(feature = "alloc")]
pub use decode::decode;
#[cfg(feature = "alloc")]
pub use decode::decode_check;
#[cfg(feature = "alloc")]
pub use decode::decode_check_with;
#[cfg(feature = "alloc")]
pub use decode::decode_with;

#[cfg(feature = "alloc")]
pub use encode::encode;
#[cfg(feature = "alloc")]
pub use encode::encode_check;
pub use encode::encode_check_to_chars;
pub use encode::encode_to_chars;

pub use normalize::ErrorMode;
#[cfg(feature = "alloc")]
pub use normalize::normalize;
#[cfg(feature = "alloc")]
pub use normalize::normalize_with;
