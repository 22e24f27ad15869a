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

//! Arithmetic operator commands
//!
//! Every operator is registered as a command of its own (`+ 2 2`, not an
//! expression language); they all share this dispatcher, which keys on the
//! name it was invoked under. Unary operators take exactly one operand,
//! binary operators exactly two, and all operands are strict decimal
//! integers.
//!
//! Division or remainder by zero, out-of-range results, a negative `pow`
//! exponent, and `log` outside `a > 0, b >= 2` are errors.

use std::ops::ControlFlow::Continue;
use ticl_arith::{Binary, Unary};
use ticl_env::semantics::Result;
use ticl_env::Interp;

use crate::common;

/// Names this module registers, one command per operator.
pub const OPERATORS: &[&str] = &[
    "!", "~", "abs", "bool", "+", "-", "*", "/", "%", ">", ">=", "<", "<=", "==", "!=", "<<",
    ">>", "&", "|", "^", "min", "max", "pow", "log",
];

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    let name = args[0].as_str();
    if let Some(operator) = Unary::from_name(name) {
        if args.len() != 2 {
            return interp.error_arity(2, &args);
        }
        let operand = common::integer(interp, &args[1])?;
        match operator.apply(operand) {
            Ok(result) => {
                interp.set_result_integer(result);
                Continue(())
            }
            Err(error) => interp.error(error.to_string()),
        }
    } else if let Some(operator) = Binary::from_name(name) {
        if args.len() != 3 {
            return interp.error_arity(3, &args);
        }
        let lhs = common::integer(interp, &args[1])?;
        let rhs = common::integer(interp, &args[2])?;
        match operator.apply(lhs, rhs) {
            Ok(result) => {
                interp.set_result_integer(result);
                Continue(())
            }
            Err(error) => interp.error(error.to_string()),
        }
    } else {
        interp.error(format!("unknown operator '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture, run};
    use ticl_env::semantics::ReturnCode;

    #[test]
    fn basic_arithmetic() {
        let interp = &mut fixture();
        assert_ok(interp, "+  2 2", "4");
        assert_ok(interp, "* -2 9", "-18");
        assert_ok(interp, "- 5 7", "-2");
        assert_ok(interp, "/ 7 2", "3");
        assert_ok(interp, "% 7 2", "1");
    }

    #[test]
    fn comparisons_and_bits() {
        let interp = &mut fixture();
        assert_ok(interp, "< 1 2", "1");
        assert_ok(interp, ">= 2 2", "1");
        assert_ok(interp, "!= 2 2", "0");
        assert_ok(interp, "<< 5 3", "40");
        assert_ok(interp, "& 7 14", "6");
        assert_ok(interp, "^ 7 14", "9");
    }

    #[test]
    fn unary_operators() {
        let interp = &mut fixture();
        assert_ok(interp, "! 0", "1");
        assert_ok(interp, "~ 0", "-1");
        assert_ok(interp, "abs -9", "9");
        assert_ok(interp, "bool 42", "1");
    }

    #[test]
    fn named_binary_operators() {
        let interp = &mut fixture();
        assert_ok(interp, "min 3 -4", "-4");
        assert_ok(interp, "max 3 -4", "3");
        assert_ok(interp, "pow 2 10", "1024");
        assert_ok(interp, "log 1000 10", "3");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let interp = &mut fixture();
        let (code, message) = run(interp, "/ 1 0");
        assert_eq!(code, ReturnCode::Error);
        assert_eq!(message, "division by zero");
        assert_eq!(run(interp, "% 1 0").0, ReturnCode::Error);
    }

    #[test]
    fn domain_errors() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "pow 2 -1").0, ReturnCode::Error);
        assert_eq!(run(interp, "log 0 2").0, ReturnCode::Error);
        assert_eq!(run(interp, "log 8 1").0, ReturnCode::Error);
    }

    #[test]
    fn operands_are_strict_numerals() {
        let interp = &mut fixture();
        let (code, message) = run(interp, "+ 2 2x");
        assert_eq!(code, ReturnCode::Error);
        assert_eq!(message, "NaN: \"2x\"");
    }

    #[test]
    fn operator_arity() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "+ 1").0, ReturnCode::Error);
        assert_eq!(run(interp, "! 1 2").0, ReturnCode::Error);
    }
}
