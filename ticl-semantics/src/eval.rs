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

//! The evaluation loop and procedure calls.

use crate::list;
use std::ops::ControlFlow::{Break, Continue};
use ticl_env::command::{Body, Procedure};
use ticl_env::semantics::{Divert, Result};
use ticl_env::Interp;
use ticl_syntax::escape;
use ticl_syntax::parser::{Parser, TokenKind};

/// Evaluates a script.
///
/// The result of the last command remains on the interpreter; an empty
/// script leaves an empty result. Any divert unwinds immediately with the
/// in-progress command's argument list dropped.
///
/// Every entry to this function counts one level against the interpreter's
/// recursion limit, so `[...]` substitutions and built-in body evaluations
/// are bounded along with procedure calls.
pub fn eval(interp: &mut Interp, script: &str) -> Result {
    let depth = match interp.begin_nesting() {
        Ok(depth) => depth,
        Err(error) => return interp.error(error.to_string()),
    };
    let flow = eval_script(interp, script, depth == 1);
    interp.end_nesting();
    flow
}

fn eval_script(interp: &mut Interp, script: &str, outermost: bool) -> Result {
    interp.set_result("");
    if outermost {
        interp.line = 1;
    }

    let mut parser = Parser::new(script);
    let mut argv: Vec<String> = Vec::new();
    let mut prev = TokenKind::Eol;
    loop {
        let token = match parser.next_token() {
            Ok(token) => token,
            Err(error) => return interp.error(error.to_string()),
        };
        if outermost {
            // Nested evaluations leave the counter alone: their newlines
            // were counted when the enclosing token was scanned.
            interp.line = parser.line();
        }

        let word = match token.kind {
            TokenKind::Eof => break,
            TokenKind::Sep => {
                prev = TokenKind::Sep;
                continue;
            }
            TokenKind::Eol => {
                prev = TokenKind::Eol;
                dispatch(interp, &mut argv)?;
                continue;
            }
            TokenKind::Var => match interp.frames.get(token.text) {
                Some(value) => value.to_owned(),
                None => {
                    let message = format!("no such variable '{}'", token.text);
                    return interp.error(message);
                }
            },
            TokenKind::Cmd => {
                eval(interp, token.text)?;
                interp.result().to_owned()
            }
            TokenKind::Esc => match escape::unescape(token.text) {
                Ok(decoded) => decoded,
                Err(error) => return interp.error(error.to_string()),
            },
            TokenKind::Str => token.text.to_owned(),
        };

        if matches!(prev, TokenKind::Sep | TokenKind::Eol) {
            if argv.len() >= interp.limits.max_args {
                let name = argv.first().cloned().unwrap_or_default();
                return interp.error(format!("too many arguments for '{name}'"));
            }
            argv.push(word);
        } else {
            // Adjacent tokens concatenate into the same word.
            match argv.last_mut() {
                Some(last) => last.push_str(&word),
                None => argv.push(word),
            }
        }
        prev = token.kind;
    }
    Continue(())
}

/// Dispatches one completed command and consumes its argument list.
fn dispatch(interp: &mut Interp, argv: &mut Vec<String>) -> Result {
    if argv.is_empty() {
        return Continue(());
    }
    let args = std::mem::take(argv);
    let body = match interp.commands.get(&args[0]) {
        Some(command) => command.body.clone(),
        None => {
            let message = format!("no such command '{}'", args[0]);
            return interp.error(message);
        }
    };
    match body {
        Body::Native(function) => function(interp, args),
        Body::Procedure(procedure) => call_procedure(interp, &procedure, args),
    }
}

/// Invokes a procedure: binds the arguments in a fresh frame, evaluates the
/// body, and pops the frame again no matter how the body came out.
///
/// A `return` divert from the body is consumed here; everything else
/// propagates to the caller.
pub fn call_procedure(interp: &mut Interp, procedure: &Procedure, args: Vec<String>) -> Result {
    let parameters = match list::elements(&procedure.params) {
        Ok(parameters) => parameters,
        Err(error) => return interp.error(error.to_string()),
    };
    if args.len() != parameters.len() + 1 {
        return interp.error_arity(parameters.len() + 1, &args);
    }

    interp.frames.push();
    for (parameter, argument) in parameters.iter().zip(args.into_iter().skip(1)) {
        interp.frames.set(parameter, argument);
    }
    let flow = eval(interp, &procedure.body);
    interp.frames.pop();

    match flow {
        Break(Divert::Return) => Continue(()),
        other => other,
    }
}
