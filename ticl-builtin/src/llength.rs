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

//! Llength built-in
//!
//! ```ticl
//! llength list
//! ```
//!
//! Returns the number of elements in `list`.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_semantics::list;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 2 {
        return interp.error_arity(2, &args);
    }
    match list::elements(&args[1]) {
        Ok(elements) => {
            interp.set_result_integer(elements.len() as i64);
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture};

    #[test]
    fn counts_elements() {
        let interp = &mut fixture();
        assert_ok(interp, "llength {a b c}", "3");
        assert_ok(interp, "llength {a {b c} d}", "3");
        assert_ok(interp, "llength {}", "0");
        assert_ok(interp, "llength {one}", "1");
    }
}
