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

//! Join built-in
//!
//! ```ticl
//! join list sep
//! ```
//!
//! Splits `list` with the program lexer (brace groups stay together) and
//! joins the elements with `sep`.

use itertools::Itertools;
use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_semantics::list;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 {
        return interp.error_arity(3, &args);
    }
    match list::elements(&args[1]) {
        Ok(elements) => {
            let joined = elements.iter().join(&args[2]);
            interp.set_result(joined);
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture, run};
    use ticl_env::semantics::ReturnCode;

    #[test]
    fn joins_list_elements() {
        let interp = &mut fixture();
        assert_ok(interp, "join {a b c} ,", "a,b,c");
        assert_ok(interp, "join {a {b c} d} -", "a-b c-d");
        assert_ok(interp, "join {} ,", "");
    }

    #[test]
    fn malformed_lists_are_errors() {
        // `string char 123` smuggles in an unbalanced `{`.
        let interp = &mut fixture();
        assert_eq!(run(interp, "join [string char 123]a ,").0, ReturnCode::Error);
    }
}
