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

//! Proc built-in
//!
//! # Syntax
//!
//! ```ticl
//! proc name arglist body
//! ```
//!
//! # Semantics
//!
//! Registers a procedure. `arglist` is a list of parameter names; when the
//! procedure is called each parameter is bound positionally in a fresh
//! call frame and `body` is evaluated there. Calling with the wrong number
//! of arguments is an error, as is registering over an existing command.
//!
//! Both `arglist` and `body` are kept as unevaluated source; `info
//! command` can read them back.

use std::ops::ControlFlow::Continue;
use std::rc::Rc;
use ticl_env::command::{Body, Procedure};
use ticl_env::semantics::Result;
use ticl_env::Interp;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 4 {
        return interp.error_arity(4, &args);
    }
    let mut args = args.into_iter();
    let _command = args.next();
    let name = args.next().unwrap_or_default();
    let params = args.next().unwrap_or_default();
    let body = args.next().unwrap_or_default();

    let procedure = Rc::new(Procedure { params, body });
    match interp.commands.define(name, Body::Procedure(procedure)) {
        Ok(()) => {
            interp.set_result("");
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}
