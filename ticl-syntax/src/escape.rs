// This file is part of ticl, a tiny embeddable command language.
// Copyright (C) 2026 the ticl developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Backslash-escape decoding.
//!
//! The evaluator applies [`unescape`] to every token the parser classifies
//! as needing decoding. Brace groups are never decoded.

use thiserror::Error;

/// Error for a backslash followed by nothing, an unknown letter, or an `x`
/// without a hex digit.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("invalid escape sequence in \"{0}\"")]
pub struct EscapeError(pub String);

/// Decodes the recognized escapes:
/// `\\`, `\n`, `\t`, `\r`, `\"`, `\[`, `\]`, `\e`, and `\xHH` with one or
/// two hex digits.
pub fn unescape(s: &str) -> Result<String, EscapeError> {
    let mut decoded = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => decoded.push('\\'),
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('"') => decoded.push('"'),
            Some('[') => decoded.push('['),
            Some(']') => decoded.push(']'),
            Some('e') => decoded.push('\x1b'),
            Some('x') => {
                let mut value = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    let mut rest = chars.clone();
                    match rest.next().and_then(|d| d.to_digit(16)) {
                        Some(digit) => {
                            value = value * 16 + digit;
                            chars = rest;
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err(EscapeError(s.to_owned()));
                }
                decoded.push(char::from(value as u8));
            }
            _ => return Err(EscapeError(s.to_owned())),
        }
    }
    Ok(decoded)
}
