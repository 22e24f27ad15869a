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

//! Interpreter state for the ticl command language.
//!
//! [`Interp`] owns everything a script can observe: the command table, the
//! call-frame stack with its variables, the result string, the current line
//! number, and the evaluation limits. It contains no evaluation logic of its
//! own; the `ticl-semantics` crate drives it.
//!
//! Commands communicate exclusively through the result channel: before
//! returning OK a command sets the result (possibly to the empty string);
//! on failure it sets a diagnostic message and returns an error divert.

pub mod command;
pub mod limits;
pub mod semantics;
pub mod variable;

use command::CommandSet;
use limits::Limits;
use semantics::Divert;
use std::ops::ControlFlow;
use thiserror::Error;
use ticl_arith::NumeralError;
use variable::FrameStack;

/// Error raised when evaluator nesting exceeds the configured limit
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("recursion limit exceeded")]
pub struct RecursionError;

/// Error reading a variable as an integer
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum VarError {
    #[error("no such variable '{0}'")]
    Undefined(String),
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

/// One interpreter instance.
///
/// Strictly single-threaded; all nested evaluation reuses this one value on
/// the native call stack.
#[derive(Debug)]
pub struct Interp {
    /// The command table
    pub commands: CommandSet,
    /// Call frames and their variables
    pub frames: FrameStack,
    /// Evaluation limits
    pub limits: Limits,
    /// Line of the outermost script the evaluator is positioned at
    pub line: u64,
    result: String,
    nesting: usize,
}

impl Interp {
    /// Creates an interpreter with default limits and no commands.
    ///
    /// Registering the built-in command library is the embedder's (or the
    /// `ticl` facade's) job, keeping this crate free of evaluation logic.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates an interpreter with the given limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Interp {
            commands: CommandSet::new(),
            frames: FrameStack::new(),
            limits,
            line: 1,
            result: String::new(),
            nesting: 0,
        }
    }

    /// The current result string.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Replaces the result.
    pub fn set_result<S: Into<String>>(&mut self, result: S) {
        self.result = result.into();
    }

    /// Replaces the result with a formatted integer.
    pub fn set_result_integer(&mut self, result: i64) {
        self.result = result.to_string();
    }

    /// Parses the result as a strict decimal integer.
    pub fn result_integer(&self) -> Result<i64, NumeralError> {
        ticl_arith::parse_integer(&self.result)
    }

    /// Sets an error message as the result and yields the error divert.
    ///
    /// Returning the divert from here lets command implementations write
    /// `return interp.error(...)`.
    pub fn error<T, S: Into<String>>(&mut self, message: S) -> ControlFlow<Divert, T> {
        self.result = message.into();
        ControlFlow::Break(Divert::Error)
    }

    /// Reports a wrong number of arguments for the command in `args[0]`.
    pub fn error_arity<T>(&mut self, expected: usize, args: &[String]) -> ControlFlow<Divert, T> {
        let name = args.first().map(String::as_str).unwrap_or_default();
        let message = format!(
            "wrong number of arguments for '{}': expected {}, got '{}'",
            name,
            expected,
            args.join(" "),
        );
        self.error(message)
    }

    /// Reads a variable visible from the current frame.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.frames.get(name)
    }

    /// Writes a variable in the current frame.
    pub fn set_var<S: Into<String>>(&mut self, name: &str, value: S) {
        self.frames.set(name, value.into());
    }

    /// Reads a variable and parses it as a strict decimal integer.
    pub fn var_integer(&self, name: &str) -> Result<i64, VarError> {
        let value = self
            .frames
            .get(name)
            .ok_or_else(|| VarError::Undefined(name.to_owned()))?;
        Ok(ticl_arith::parse_integer(value)?)
    }

    /// Writes a variable as a formatted integer.
    pub fn set_var_integer(&mut self, name: &str, value: i64) {
        self.frames.set(name, value.to_string());
    }

    /// Accounts for one level of evaluator nesting.
    ///
    /// Returns the new depth, 1 being the outermost evaluation. Every
    /// successful call must be paired with [`end_nesting`](Self::end_nesting).
    pub fn begin_nesting(&mut self) -> Result<usize, RecursionError> {
        if self.nesting >= self.limits.max_recursion {
            return Err(RecursionError);
        }
        self.nesting += 1;
        Ok(self.nesting)
    }

    /// Releases one level of evaluator nesting.
    pub fn end_nesting(&mut self) {
        debug_assert!(self.nesting > 0);
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Current evaluator nesting depth.
    #[must_use]
    pub fn nesting(&self) -> usize {
        self.nesting
    }
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}
