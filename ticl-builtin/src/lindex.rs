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

//! Lindex built-in
//!
//! ```ticl
//! lindex list index
//! ```
//!
//! Returns the element of `list` at the zero-based `index`, or the empty
//! string when the index is out of range.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_semantics::list;

use crate::common;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 {
        return interp.error_arity(3, &args);
    }
    let index = common::integer(interp, &args[2])?;
    match list::elements(&args[1]) {
        Ok(elements) => {
            let element = usize::try_from(index)
                .ok()
                .and_then(|index| elements.into_iter().nth(index))
                .unwrap_or_default();
            interp.set_result(element);
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}
