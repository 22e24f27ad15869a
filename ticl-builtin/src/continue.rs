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

//! Continue built-in
//!
//! The **`continue`** built-in diverts evaluation to the next iteration of
//! the enclosing `while` loop. It takes no operands.

use std::ops::ControlFlow::Break;
use ticl_env::semantics::{Divert, Result};
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 1 {
        return interp.error_arity(1, &args);
    }
    interp.set_result("");
    Break(Divert::Continue)
}
