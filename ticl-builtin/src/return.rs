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

//! Return built-in
//!
//! # Syntax
//!
//! ```ticl
//! return [value [code]]
//! ```
//!
//! # Semantics
//!
//! Sets the result to `value` (empty if omitted) and diverts with the
//! return code, which the enclosing procedure call translates to OK. An
//! explicit numeric `code` substitutes any of the stable codes: `0` (OK;
//! evaluation simply continues), `-1` (error), `1` (return), `2` (break),
//! or `3` (continue). Any other number is an error.

use ticl_env::semantics::{Result, ReturnCode};
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    let code = match args.len() {
        1 | 2 => ReturnCode::Return,
        3 => {
            let number = match ticl_arith::parse_integer(&args[2]) {
                Ok(number) => number,
                Err(error) => return interp.error(error.to_string()),
            };
            match ReturnCode::try_from(number) {
                Ok(code) => code,
                Err(error) => return interp.error(error.to_string()),
            }
        }
        _ => return interp.error_arity(3, &args),
    };
    let value = args.into_iter().nth(1).unwrap_or_default();
    interp.set_result(value);
    code.into()
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{fixture, run};
    use ticl_env::semantics::ReturnCode;

    #[test]
    fn bare_return_diverts_with_empty_result() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "return"), (ReturnCode::Return, "".to_owned()));
    }

    #[test]
    fn value_becomes_the_result() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "return x"), (ReturnCode::Return, "x".to_owned()));
    }

    #[test]
    fn explicit_error_code() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "return fail -1"), (ReturnCode::Error, "fail".to_owned()));
    }

    #[test]
    fn code_zero_continues_evaluation() {
        let interp = &mut fixture();
        assert_eq!(
            run(interp, "return ignored 0; concat after"),
            (ReturnCode::Ok, "after".to_owned())
        );
    }

    #[test]
    fn malformed_codes_are_errors() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "return x 9").0, ReturnCode::Error);
        assert_eq!(run(interp, "return x 1x").0, ReturnCode::Error);
    }
}
