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

//! Type definitions for evaluation outcomes.
//!
//! Every evaluation step in ticl either completes normally or is diverted:
//! an error unwinds to the nearest `catch` (or the embedder), `return`
//! unwinds to the enclosing procedure call, and `break`/`continue` unwind to
//! the enclosing loop. Inside the interpreter this is expressed with
//! [`ControlFlow`]; the numeric [`ReturnCode`] is the stable surface the
//! embedding API, `catch`, and `return` expose.

use std::fmt::Display;
use std::ops::ControlFlow;
use thiserror::Error;

/// Reason an evaluation stopped before completing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Divert {
    /// An error unwinding to the nearest `catch` or the embedder.
    ///
    /// The interpreter result carries the diagnostic message.
    Error,

    /// Return from the enclosing procedure.
    ///
    /// The interpreter result carries the return value.
    Return,

    /// Break out of the enclosing loop.
    Break,

    /// Continue with the next iteration of the enclosing loop.
    Continue,
}

/// Result of evaluating a script, a command, or part of one.
///
/// `Continue(())` is the OK outcome; `Break(divert)` stops the enclosing
/// evaluation and propagates until some construct consumes the divert.
pub type Result<T = ()> = ControlFlow<Divert, T>;

/// Numeric evaluation outcome, as observed by `catch`, produced by
/// `return`, and returned from the embedding API.
///
/// The numeric values are stable: `Ok` is 0, `Error` is −1, and the
/// diverting codes are small positive integers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum ReturnCode {
    Ok = 0,
    Error = -1,
    Return = 1,
    Break = 2,
    Continue = 3,
}

impl ReturnCode {
    /// Returns the numeric value of the code.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl From<Divert> for ReturnCode {
    fn from(divert: Divert) -> Self {
        match divert {
            Divert::Error => ReturnCode::Error,
            Divert::Return => ReturnCode::Return,
            Divert::Break => ReturnCode::Break,
            Divert::Continue => ReturnCode::Continue,
        }
    }
}

impl From<Result> for ReturnCode {
    fn from(result: Result) -> Self {
        match result {
            ControlFlow::Continue(()) => ReturnCode::Ok,
            ControlFlow::Break(divert) => divert.into(),
        }
    }
}

impl From<ReturnCode> for Result {
    fn from(code: ReturnCode) -> Self {
        match code {
            ReturnCode::Ok => ControlFlow::Continue(()),
            ReturnCode::Error => ControlFlow::Break(Divert::Error),
            ReturnCode::Return => ControlFlow::Break(Divert::Return),
            ReturnCode::Break => ControlFlow::Break(Divert::Break),
            ReturnCode::Continue => ControlFlow::Break(Divert::Continue),
        }
    }
}

/// Error for a number that is not one of the [`ReturnCode`] values
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("invalid return code {0}")]
pub struct CodeRangeError(pub i64);

impl TryFrom<i64> for ReturnCode {
    type Error = CodeRangeError;

    fn try_from(number: i64) -> std::result::Result<Self, CodeRangeError> {
        match number {
            0 => Ok(ReturnCode::Ok),
            -1 => Ok(ReturnCode::Error),
            1 => Ok(ReturnCode::Return),
            2 => Ok(ReturnCode::Break),
            3 => Ok(ReturnCode::Continue),
            _ => Err(CodeRangeError(number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn code_values_are_stable() {
        assert_eq!(ReturnCode::Ok.value(), 0);
        assert_eq!(ReturnCode::Error.value(), -1);
        assert_eq!(ReturnCode::Return.value(), 1);
        assert_eq!(ReturnCode::Break.value(), 2);
        assert_eq!(ReturnCode::Continue.value(), 3);
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(ReturnCode::Error.to_string(), "-1");
        assert_eq!(ReturnCode::Ok.to_string(), "0");
    }

    #[test]
    fn round_trip_through_control_flow() {
        for code in [
            ReturnCode::Ok,
            ReturnCode::Error,
            ReturnCode::Return,
            ReturnCode::Break,
            ReturnCode::Continue,
        ] {
            assert_eq!(ReturnCode::from(Result::from(code)), code);
        }
    }

    #[test]
    fn numeric_conversion() {
        assert_eq!(ReturnCode::try_from(-1), Ok(ReturnCode::Error));
        assert_eq!(ReturnCode::try_from(3), Ok(ReturnCode::Continue));
        assert_matches!(ReturnCode::try_from(4), Err(CodeRangeError(4)));
        assert_matches!(ReturnCode::try_from(-2), Err(CodeRangeError(-2)));
    }
}
