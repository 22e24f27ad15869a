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

//! The ticl command-line interpreter.
//!
//! With an operand, runs the named script file (remaining operands are
//! published to the script as the space-joined `argv` variable). Without
//! operands, runs a line-oriented read-eval-print loop on standard input.

use std::io::{BufRead, Write};
use std::ops::ControlFlow::{Break, Continue};
use std::process::ExitCode;
use ticl::env::semantics::{Divert, ReturnCode};
use ticl::Interp;

mod host;

fn main() -> ExitCode {
    let mut arguments = std::env::args().skip(1);
    let mut interp = ticl::interpreter();
    host::register(&mut interp);
    match arguments.next() {
        Some(path) => run_file(&mut interp, &path, arguments.collect()),
        None => repl(&mut interp),
    }
}

fn run_file(interp: &mut Interp, path: &str, rest: Vec<String>) -> ExitCode {
    interp.set_var("argv", rest.join(" "));
    let script = match std::fs::read_to_string(path) {
        Ok(script) => script,
        Err(error) => {
            eprintln!("ticl: {path}: {error}");
            return ExitCode::FAILURE;
        }
    };
    match ticl::eval(interp, &script) {
        Continue(()) => ExitCode::SUCCESS,
        Break(Divert::Error) => {
            eprintln!("ticl: {path}:{}: {}", interp.line, interp.result());
            ExitCode::FAILURE
        }
        // A stray return/break/continue from the top level is not an error.
        Break(_) => ExitCode::SUCCESS,
    }
}

fn repl(interp: &mut Interp) -> ExitCode {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("ticl> ");
        if std::io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                eprintln!("ticl: {error}");
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };
        match ReturnCode::from(ticl::eval(interp, &line)) {
            ReturnCode::Ok => {
                if !interp.result().is_empty() {
                    println!("{}", interp.result());
                }
            }
            code => println!("[{code}] {}", interp.result()),
        }
    }
}
