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

//! Concat built-in
//!
//! ```ticl
//! concat args...
//! ```
//!
//! Joins the operands with single spaces; a single operand is returned
//! unchanged and no operands yield the empty string.

use itertools::Itertools;
use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    let joined = args[1..].iter().join(" ");
    interp.set_result(joined);
    Continue(())
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture};

    #[test]
    fn joins_with_spaces() {
        let interp = &mut fixture();
        assert_ok(interp, "concat a b c", "a b c");
    }

    #[test]
    fn single_word_round_trips() {
        let interp = &mut fixture();
        assert_ok(interp, "concat word", "word");
    }

    #[test]
    fn no_operands_yield_empty() {
        let interp = &mut fixture();
        assert_ok(interp, "concat", "");
    }
}
