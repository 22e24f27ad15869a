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

//! While built-in
//!
//! ```ticl
//! while condition body
//! ```
//!
//! The condition is re-evaluated before each iteration and parsed as a
//! strict integer; zero ends the loop with an OK outcome and an empty
//! result. A `continue` divert from the body starts the next iteration, a
//! `break` divert ends the loop; errors and `return` propagate.

use std::ops::ControlFlow::{Break, Continue};
use ticl_env::semantics::{Divert, Result};
use ticl_env::Interp;
use ticl_semantics::eval;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 {
        return interp.error_arity(3, &args);
    }
    loop {
        eval(interp, &args[1])?;
        let condition = match interp.result_integer() {
            Ok(condition) => condition,
            Err(error) => return interp.error(error.to_string()),
        };
        if condition == 0 {
            break;
        }
        match eval(interp, &args[2]) {
            Continue(()) | Break(Divert::Continue) => {}
            Break(Divert::Break) => break,
            diverted => return diverted,
        }
    }
    interp.set_result("");
    Continue(())
}
