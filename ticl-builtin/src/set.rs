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

//! Set built-in
//!
//! The **`set`** built-in reads or writes a variable.
//!
//! # Syntax
//!
//! ```ticl
//! set name [value]
//! ```
//!
//! # Semantics
//!
//! With one operand, the result is the value of the variable `name`; it is
//! an error if the variable is undefined. With two operands, `value` is
//! assigned to `name` (creating it in the current frame if needed, or
//! writing through a link) and also becomes the result.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    match args.len() {
        2 => match interp.frames.get(&args[1]) {
            Some(value) => {
                let value = value.to_owned();
                interp.set_result(value);
                Continue(())
            }
            None => {
                let message = format!("no such variable '{}'", args[1]);
                interp.error(message)
            }
        },
        3 => {
            let mut args = args;
            let value = args.pop().unwrap_or_default();
            interp.frames.set(&args[1], value.clone());
            interp.set_result(value);
            Continue(())
        }
        _ => interp.error_arity(3, &args),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture, run};
    use ticl_env::semantics::ReturnCode;

    #[test]
    fn set_then_read() {
        let interp = &mut fixture();
        assert_ok(interp, "set a 54", "54");
        assert_ok(interp, "set a", "54");
        assert_eq!(interp.var_integer("a"), Ok(54));
    }

    #[test]
    fn literal_value_is_kept_verbatim() {
        let interp = &mut fixture();
        assert_ok(interp, "set a 54; set b 3; set c -4x", "-4x");
        assert_eq!(interp.var_integer("a"), Ok(54));
        assert_eq!(interp.var("c"), Some("-4x"));
        assert!(interp.var_integer("c").is_err());
    }

    #[test]
    fn reading_an_undefined_variable_fails() {
        let interp = &mut fixture();
        let (code, message) = run(interp, "set missing");
        assert_eq!(code, ReturnCode::Error);
        assert_eq!(message, "no such variable 'missing'");
    }

    #[test]
    fn arity() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "set").0, ReturnCode::Error);
        assert_eq!(run(interp, "set a b c").0, ReturnCode::Error);
    }
}
