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

//! Rename built-in
//!
//! ```ticl
//! rename src dst
//! ```
//!
//! Moves the command `src` to the name `dst`; an empty `dst` deletes the
//! command. Renaming over an existing command is an error.

use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 3 {
        return interp.error_arity(3, &args);
    }
    match interp.commands.rename(&args[1], &args[2]) {
        Ok(()) => {
            interp.set_result("");
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
    fn renames_a_procedure() {
        let interp = &mut fixture();
        assert_ok(interp, "proc f {} { concat hi }; rename f g; g", "hi");
        assert_eq!(run(interp, "f").0, ReturnCode::Error);
    }

    #[test]
    fn empty_destination_deletes() {
        let interp = &mut fixture();
        assert_ok(interp, "proc f {} {}; rename f {}", "");
        assert_eq!(run(interp, "f").0, ReturnCode::Error);
    }

    #[test]
    fn conflicts_and_missing_sources_are_errors() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "rename missing new").0, ReturnCode::Error);
        let (code, message) = run(interp, "rename set concat");
        assert_eq!(code, ReturnCode::Error);
        assert_eq!(message, "'concat' already defined");
    }
}
