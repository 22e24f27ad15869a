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

//! Evaluator for the ticl command language.
//!
//! [`eval`] turns source text into command invocations against a
//! [`ticl_env::Interp`]: it drives the lexer, substitutes variable and
//! command references, assembles adjacent tokens into words, and dispatches
//! each completed command. Control-flow built-ins re-enter `eval` for their
//! bodies, so the whole interpreter is one recursive routine guarded by the
//! interpreter's recursion limit.

mod eval;
pub mod list;

pub use eval::{call_procedure, eval};
