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

//! Host bindings for the command-line interpreter.
//!
//! These commands touch the operating system and therefore live in the
//! binary, not in the built-in library: `puts`, `gets`, `getenv`,
//! `system`, `exit`, and `clock`.

use std::ops::ControlFlow::Continue;
use std::time::{SystemTime, UNIX_EPOCH};
use ticl::env::command::Body;
use ticl::env::semantics::Result;
use ticl::Interp;

/// Registers the host commands.
pub fn register(interp: &mut Interp) {
    let commands: [(&str, fn(&mut Interp, Vec<String>) -> Result); 6] = [
        ("puts", puts),
        ("gets", gets),
        ("getenv", getenv),
        ("system", system),
        ("exit", exit),
        ("clock", clock),
    ];
    for (name, function) in commands {
        let _ = interp.commands.define(name.to_owned(), Body::native(function));
    }
}

/// `puts string`: writes the operand and a newline to standard output.
fn puts(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 2 {
        return interp.error_arity(2, &args);
    }
    println!("{}", args[1]);
    interp.set_result("");
    Continue(())
}

/// `gets`: reads one line from standard input, without the newline.
fn gets(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 1 {
        return interp.error_arity(1, &args);
    }
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(_) => {
            while line.ends_with(['\n', '\r']) {
                line.pop();
            }
            interp.set_result(line);
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}

/// `getenv name`: the value of an environment variable, empty if unset.
fn getenv(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 2 {
        return interp.error_arity(2, &args);
    }
    let value = std::env::var(&args[1]).unwrap_or_default();
    interp.set_result(value);
    Continue(())
}

/// `system command`: runs a shell command; the result is its exit status.
fn system(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 2 {
        return interp.error_arity(2, &args);
    }
    match std::process::Command::new("sh").arg("-c").arg(&args[1]).status() {
        Ok(status) => {
            interp.set_result_integer(i64::from(status.code().unwrap_or(-1)));
            Continue(())
        }
        Err(error) => interp.error(error.to_string()),
    }
}

/// `exit [status]`: terminates the process.
fn exit(interp: &mut Interp, args: Vec<String>) -> Result {
    let status = match args.get(1) {
        Some(status) => match ticl::arith::parse_integer(status) {
            Ok(status) => status,
            Err(error) => return interp.error(error.to_string()),
        },
        None => 0,
    };
    std::process::exit(status as i32)
}

/// `clock`: seconds since the Unix epoch.
fn clock(interp: &mut Interp, args: Vec<String>) -> Result {
    if args.len() != 1 {
        return interp.error_arity(1, &args);
    }
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);
    interp.set_result_integer(seconds);
    Continue(())
}
