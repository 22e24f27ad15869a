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

//! Uplevel built-in
//!
//! # Syntax
//!
//! ```ticl
//! uplevel level script...
//! ```
//!
//! # Semantics
//!
//! Joins the remaining operands with spaces and evaluates the resulting
//! script with the call frame of an ancestor as the current frame. `level`
//! is a number of parents to climb, or `#n` for the frame at absolute
//! depth *n* (`#0` is the global frame). The frame is restored afterwards,
//! whatever the script's outcome, and the script's result and divert pass
//! through unchanged.

use itertools::Itertools;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_semantics::eval;

use crate::common;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() < 3 {
        return interp.error_arity(3, &args);
    }
    let target = common::level(interp, &args[1])?;
    let script = args[2..].iter().join(" ");

    let saved = interp.frames.swap_current(target);
    let flow = eval(interp, &script);
    interp.frames.swap_current(saved);
    flow
}
