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

//! If built-in
//!
//! ```ticl
//! if condition then-body [else else-body]
//! ```
//!
//! The condition script is evaluated and its result parsed as a strict
//! integer; non-zero selects `then-body`. Only the 3- and 5-word forms are
//! accepted, and the fourth word must literally be `else`. When no branch
//! is taken the result is empty.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_semantics::eval;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 && args.len() != 5 {
        return interp.error_arity(3, &args);
    }
    if args.len() == 5 && args[3] != "else" {
        let message = format!("expected 'else' but got '{}'", args[3]);
        return interp.error(message);
    }

    eval(interp, &args[1])?;
    let condition = match interp.result_integer() {
        Ok(condition) => condition,
        Err(error) => return interp.error(error.to_string()),
    };

    if condition != 0 {
        eval(interp, &args[2])
    } else if args.len() == 5 {
        eval(interp, &args[4])
    } else {
        interp.set_result("");
        Continue(())
    }
}
