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

//! Catch built-in
//!
//! # Syntax
//!
//! ```ticl
//! catch script varname
//! ```
//!
//! # Semantics
//!
//! Evaluates `script` and swallows whatever divert it produces. The
//! numeric return code of the script (0 OK, −1 error, 1 return, 2 break,
//! 3 continue) is stored into the variable `varname` and also becomes the
//! result. `catch` itself always succeeds; it is the only way a script can
//! observe and recover from an error.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::{Result, ReturnCode};
use ticl_env::Interp;
use ticl_semantics::eval;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 {
        return interp.error_arity(3, &args);
    }
    let code = ReturnCode::from(eval(interp, &args[1]));
    interp.frames.set(&args[2], code.to_string());
    interp.set_result(code.to_string());
    Continue(())
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture};

    #[test]
    fn catches_unknown_command() {
        let interp = &mut fixture();
        assert_ok(interp, "catch {foo} r", "-1");
        assert_eq!(interp.var("r"), Some("-1"));
    }

    #[test]
    fn reports_success() {
        let interp = &mut fixture();
        assert_ok(interp, "catch {concat ok} r", "0");
        assert_eq!(interp.var("r"), Some("0"));
    }

    #[test]
    fn captures_explicit_codes() {
        let interp = &mut fixture();
        assert_ok(interp, "catch {return x} r", "1");
        assert_ok(interp, "catch {break} r", "2");
        assert_ok(interp, "catch {continue} r", "3");
        assert_ok(interp, "catch {return boom -1} r", "-1");
    }
}
