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

//! Integer arithmetic for the ticl command language.
//!
//! Everything in ticl is a string; this crate owns the conversions between
//! strings and `i64` and the application of the unary and binary operator
//! commands. Conversion is strict: an optional sign, at least one digit of
//! the requested base, and nothing else. Anything malformed is a
//! [`NumeralError`].
//!
//! Operator application uses checked arithmetic throughout; results that do
//! not fit `i64` are an [`EvalError::Overflow`] rather than a wrap.

use thiserror::Error;

/// Error for a string that is not a valid integer numeral
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("NaN: \"{0}\"")]
pub struct NumeralError(pub String);

/// Parses a strict decimal numeral.
pub fn parse_integer(s: &str) -> Result<i64, NumeralError> {
    parse_radix(s, 10)
}

/// Parses a strict numeral in the given base (2 to 36).
///
/// No base prefix (`0x` and friends) is accepted; digits above 9 may be in
/// either case.
pub fn parse_radix(s: &str, radix: u32) -> Result<i64, NumeralError> {
    debug_assert!((2..=36).contains(&radix));
    i64::from_str_radix(s, radix).map_err(|_| NumeralError(s.to_owned()))
}

/// Formats a number in the given base (2 to 36), lowercase digits.
#[must_use]
pub fn format_radix(number: i64, radix: u32) -> String {
    debug_assert!((2..=36).contains(&radix));
    let mut magnitude = number.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let digit = (magnitude % u64::from(radix)) as u32;
        digits.push(char::from_digit(digit, radix).unwrap_or('0'));
        magnitude /= u64::from(radix);
        if magnitude == 0 {
            break;
        }
    }
    if number < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Cause of a failed operator application
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("overflow")]
    Overflow,
    #[error("negative exponent")]
    NegativeExponent,
    #[error("domain error")]
    Domain,
}

/// Unary operator commands
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unary {
    /// `!`
    Not,
    /// `~`
    Complement,
    /// `abs`
    Abs,
    /// `bool`
    Bool,
}

impl Unary {
    /// Looks an operator up by its command name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        use Unary::*;
        match name {
            "!" => Some(Not),
            "~" => Some(Complement),
            "abs" => Some(Abs),
            "bool" => Some(Bool),
            _ => None,
        }
    }

    /// Applies the operator.
    pub fn apply(self, operand: i64) -> Result<i64, EvalError> {
        use Unary::*;
        Ok(match self {
            Not => i64::from(operand == 0),
            Complement => !operand,
            Abs => operand.checked_abs().ok_or(EvalError::Overflow)?,
            Bool => i64::from(operand != 0),
        })
    }
}

/// Binary operator commands
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Binary {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `pow`
    Power,
    /// `log`
    Log,
}

impl Binary {
    /// Looks an operator up by its command name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        use Binary::*;
        match name {
            "+" => Some(Add),
            "-" => Some(Subtract),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "%" => Some(Remainder),
            ">" => Some(Greater),
            ">=" => Some(GreaterEqual),
            "<" => Some(Less),
            "<=" => Some(LessEqual),
            "==" => Some(Equal),
            "!=" => Some(NotEqual),
            "<<" => Some(ShiftLeft),
            ">>" => Some(ShiftRight),
            "&" => Some(BitAnd),
            "|" => Some(BitOr),
            "^" => Some(BitXor),
            "min" => Some(Min),
            "max" => Some(Max),
            "pow" => Some(Power),
            "log" => Some(Log),
            _ => None,
        }
    }

    /// Applies the operator.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        use Binary::*;
        Ok(match self {
            Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow)?,
            Subtract => lhs.checked_sub(rhs).ok_or(EvalError::Overflow)?,
            Multiply => lhs.checked_mul(rhs).ok_or(EvalError::Overflow)?,
            Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)?
            }
            Remainder => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_rem(rhs).ok_or(EvalError::Overflow)?
            }
            Greater => i64::from(lhs > rhs),
            GreaterEqual => i64::from(lhs >= rhs),
            Less => i64::from(lhs < rhs),
            LessEqual => i64::from(lhs <= rhs),
            Equal => i64::from(lhs == rhs),
            NotEqual => i64::from(lhs != rhs),
            ShiftLeft => {
                let amount = shift_amount(rhs)?;
                let result = lhs.checked_shl(amount).ok_or(EvalError::Overflow)?;
                if result >> amount != lhs {
                    return Err(EvalError::Overflow);
                }
                result
            }
            ShiftRight => {
                let amount = shift_amount(rhs)?;
                lhs.checked_shr(amount).ok_or(EvalError::Overflow)?
            }
            BitAnd => lhs & rhs,
            BitOr => lhs | rhs,
            BitXor => lhs ^ rhs,
            Min => lhs.min(rhs),
            Max => lhs.max(rhs),
            Power => {
                if rhs < 0 {
                    return Err(EvalError::NegativeExponent);
                }
                let exponent = u32::try_from(rhs).map_err(|_| EvalError::Overflow)?;
                lhs.checked_pow(exponent).ok_or(EvalError::Overflow)?
            }
            Log => {
                if lhs <= 0 || rhs < 2 {
                    return Err(EvalError::Domain);
                }
                let mut value = lhs;
                let mut result = 0;
                while value >= rhs {
                    value /= rhs;
                    result += 1;
                }
                result
            }
        })
    }
}

fn shift_amount(rhs: i64) -> Result<u32, EvalError> {
    u32::try_from(rhs)
        .ok()
        .filter(|&amount| amount < i64::BITS)
        .ok_or(EvalError::Overflow)
}
