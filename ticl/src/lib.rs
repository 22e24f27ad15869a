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

//! ticl is a tiny embeddable command language in the Tcl family.
//!
//! A program is a sequence of commands; each command is a list of words
//! built from literals, `{brace groups}`, `"quoted strings"`, `$variables`,
//! and `[nested scripts]`. This crate re-exports the layer crates and
//! provides the batteries-included constructor.
//!
//! ```
//! use std::ops::ControlFlow::Continue;
//!
//! let mut interp = ticl::interpreter();
//! assert_eq!(ticl::eval(&mut interp, "+ 2 2"), Continue(()));
//! assert_eq!(interp.result(), "4");
//! ```
//!
//! Hosts extend the language by registering native commands; see
//! [`env::command`](ticl_env::command). The result of the most recent
//! command stays on the interpreter until the next one replaces it.

pub use ticl_arith as arith;
pub use ticl_builtin as builtin;
pub use ticl_env as env;
pub use ticl_fnmatch as fnmatch;
pub use ticl_semantics as semantics;
pub use ticl_syntax as syntax;

pub use ticl_env::Interp;
pub use ticl_semantics::eval;

/// Creates an interpreter with the built-in command library registered and
/// the `version` variable defined.
#[must_use]
pub fn interpreter() -> Interp {
    let mut interp = Interp::new();
    builtin::register(&mut interp);
    interp
}
