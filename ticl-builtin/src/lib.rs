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

//! Implementation of the ticl built-in commands.
//!
//! Each built-in is implemented in the submodule named after the command.
//! The submodule contains the `main` function with the standard native
//! command signature; the module documentation describes the command. The
//! [`common`] module provides argument helpers shared between built-ins.
//!
//! [`register`] installs the whole library into an interpreter and defines
//! the `version` variable. The arithmetic operators all share one
//! dispatcher in [`math`], registered once per operator name.

pub mod catch;
pub mod common;
pub mod concat;
pub mod eval;
pub mod info;
pub mod join;
pub mod join_args;
pub mod lindex;
pub mod llength;
pub mod math;
pub mod proc;
pub mod rename;
pub mod set;
pub mod string;
pub mod unset;
pub mod uplevel;
pub mod upvar;

pub mod r#break;
pub mod r#continue;
pub mod r#if;
pub mod r#return;
pub mod r#while;

use ticl_env::command::Body;
use ticl_env::semantics;
use ticl_env::Interp;

/// Value of the predefined `version` variable.
pub const VERSION: i64 = 1;

type Main = fn(&mut Interp, Vec<String>) -> semantics::Result;

/// Returns an iterator over all the built-in commands.
///
/// Each item is the command name and its implementation. The math operators
/// all map to [`math::main`], which dispatches on the name it was invoked
/// under.
pub fn iter() -> impl Iterator<Item = (&'static str, Main)> {
    let named: [(&'static str, Main); 20] = [
        ("break", r#break::main),
        ("catch", catch::main),
        ("concat", concat::main),
        ("continue", r#continue::main),
        ("eval", eval::main),
        ("if", r#if::main),
        ("info", info::main),
        ("join", join::main),
        ("join-args", join_args::main),
        ("lindex", lindex::main),
        ("llength", llength::main),
        ("proc", proc::main),
        ("rename", rename::main),
        ("return", r#return::main),
        ("set", set::main),
        ("string", string::main),
        ("unset", unset::main),
        ("uplevel", uplevel::main),
        ("upvar", upvar::main),
        ("while", r#while::main),
    ];
    named
        .into_iter()
        .chain(math::OPERATORS.iter().map(|&name| (name, math::main as Main)))
}

/// Installs the built-in library and the `version` variable.
///
/// Names that are already taken are left alone, so a host can override a
/// built-in by registering its own command first.
pub fn register(interp: &mut Interp) {
    for (name, function) in iter() {
        let _ = interp.commands.define(name.to_owned(), Body::native(function));
    }
    interp.set_var_integer("version", VERSION);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_installs_everything_once() {
        let mut interp = Interp::new();
        register(&mut interp);
        let count = interp.commands.len();
        assert_eq!(count, iter().count());
        assert!(interp.commands.get("set").is_some());
        assert!(interp.commands.get("+").is_some());
        assert!(interp.commands.get("string").is_some());
        assert_eq!(interp.var_integer("version"), Ok(VERSION));

        // Re-registration keeps the existing definitions.
        register(&mut interp);
        assert_eq!(interp.commands.len(), count);
    }
}
