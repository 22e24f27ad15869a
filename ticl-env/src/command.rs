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

//! The command table.
//!
//! Two kinds of commands are observable to a script: native commands (the
//! built-ins and anything the host registers) and procedures defined with
//! `proc`. Both are stored behind `Rc` so the evaluator can clone a
//! definition out of the table before invoking it; a command that renames or
//! deletes itself keeps running on its own copy.
//!
//! The table preserves registration order so `info command` can address
//! records by index.

use crate::semantics;
use crate::Interp;
use std::rc::Rc;
use thiserror::Error;

/// Signature of a native command.
///
/// The command receives the whole argument list, name included, and reports
/// through the interpreter result. Closures can capture whatever private
/// state the host wants to expose.
pub type NativeFn = Rc<dyn Fn(&mut Interp, Vec<String>) -> semantics::Result>;

/// A user-defined procedure: both fields are unevaluated source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Procedure {
    /// Whitespace-separated parameter names
    pub params: String,
    /// Script evaluated in a fresh frame when the procedure is called
    pub body: String,
}

/// What a command does when dispatched.
#[derive(Clone)]
pub enum Body {
    Native(NativeFn),
    Procedure(Rc<Procedure>),
}

impl Body {
    /// Wraps a plain function as a native command body.
    pub fn native(function: fn(&mut Interp, Vec<String>) -> semantics::Result) -> Self {
        Body::Native(Rc::new(function))
    }
}

// Not derived automatically because NativeFn is not Debug
impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Native(function) => f
                .debug_tuple("Native")
                .field(&Rc::as_ptr(function))
                .finish(),
            Body::Procedure(procedure) => f.debug_tuple("Procedure").field(procedure).finish(),
        }
    }
}

/// One command record.
#[derive(Clone, Debug)]
pub struct Command {
    pub name: String,
    pub body: Body,
}

/// Error registering a command under a name that is taken
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("'{0}' already defined")]
pub struct DefineError(pub String);

/// Error renaming a command
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum RenameError {
    #[error("no such command '{0}'")]
    NotFound(String),
    #[error("'{0}' already defined")]
    Conflict(String),
}

/// Registration-ordered set of commands with unique names.
///
/// Lookups scan linearly; the table holds a few dozen entries and the
/// simplicity keeps index addressing and uniqueness obvious.
#[derive(Clone, Debug, Default)]
pub struct CommandSet {
    commands: Vec<Command>,
}

impl CommandSet {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Looks a command up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Returns the registration index of a named command.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|command| command.name == name)
    }

    /// Returns the command at a registration index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// Iterates over the commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Registers a command. Fails if the name is taken.
    pub fn define(&mut self, name: String, body: Body) -> Result<(), DefineError> {
        if self.get(&name).is_some() {
            return Err(DefineError(name));
        }
        self.commands.push(Command { name, body });
        Ok(())
    }

    /// Removes a command, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Command> {
        let index = self.index_of(name)?;
        Some(self.commands.remove(index))
    }

    /// Moves a command to a new name; an empty destination deletes it.
    pub fn rename(&mut self, src: &str, dst: &str) -> Result<(), RenameError> {
        if dst.is_empty() {
            self.remove(src)
                .map(drop)
                .ok_or_else(|| RenameError::NotFound(src.to_owned()))
        } else if self.get(dst).is_some() {
            Err(RenameError::Conflict(dst.to_owned()))
        } else {
            let mut command = self
                .remove(src)
                .ok_or_else(|| RenameError::NotFound(src.to_owned()))?;
            command.name = dst.to_owned();
            self.commands.push(command);
            Ok(())
        }
    }
}
