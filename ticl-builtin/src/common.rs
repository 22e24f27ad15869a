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

//! Common argument helpers for built-in implementations.
//!
//! These return the interpreter's [`Result`] type so call sites can use
//! `?`: on failure the diagnostic is already on the interpreter and the
//! error divert propagates.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

/// Parses an operand as a strict decimal integer.
pub fn integer(interp: &mut Interp, operand: &str) -> Result<i64> {
    match ticl_arith::parse_integer(operand) {
        Ok(number) => Continue(number),
        Err(error) => interp.error(error.to_string()),
    }
}

/// Resolves a level operand (`n` climbs parents, `#n` is absolute) to a
/// frame index.
pub fn level(interp: &mut Interp, operand: &str) -> Result<usize> {
    match interp.frames.resolve_level(operand) {
        Ok(frame) => Continue(frame),
        Err(error) => interp.error(error.to_string()),
    }
}
