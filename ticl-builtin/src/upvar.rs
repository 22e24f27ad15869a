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

//! Upvar built-in
//!
//! # Syntax
//!
//! ```ticl
//! upvar level other mine
//! ```
//!
//! # Semantics
//!
//! Makes the local variable `mine` an alias of the variable `other` in the
//! frame addressed by `level` (as in `uplevel`). The target variable is
//! created empty if it does not exist; reads and writes of `mine` then go
//! through to it. A link of a variable directly to itself is rejected.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

use crate::common;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 4 {
        return interp.error_arity(4, &args);
    }
    let target = common::level(interp, &args[1])?;
    match interp.frames.link(&args[3], target, &args[2]) {
        Ok(()) => {
            interp.set_result("");
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}
