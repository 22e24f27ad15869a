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

//! Join-args built-in
//!
//! ```ticl
//! join-args sep args...
//! ```
//!
//! Joins the operands after `sep` with `sep` itself, without any list
//! parsing.

use itertools::Itertools;
use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() < 2 {
        return interp.error_arity(2, &args);
    }
    let joined = args[2..].iter().join(&args[1]);
    interp.set_result(joined);
    Continue(())
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture};

    #[test]
    fn joins_operands_directly() {
        let interp = &mut fixture();
        assert_ok(interp, "join-args , a b c", "a,b,c");
        assert_ok(interp, "join-args {, } a b", "a, b");
        assert_ok(interp, "join-args ,", "");
    }
}
