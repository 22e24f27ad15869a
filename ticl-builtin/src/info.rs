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

//! Info built-in
//!
//! # Syntax
//!
//! ```ticl
//! info command [name | index field]
//! info line
//! info level
//! info width
//! info limits what
//! info features what
//! ```
//!
//! # Semantics
//!
//! - `info command` returns the number of registered commands;
//!   `info command name` the registration index of the named command; and
//!   `info command index field` (field being `name`, `args`, or `body`)
//!   the requested field of the record at that index. Native commands
//!   report `{built-in <ptr> <ptr>}` for `args` and `body`.
//! - `info line` is the current line of the outermost script.
//! - `info level` is the current call-frame depth (0 at top level).
//! - `info width` is the bit width of the integer type.
//! - `info limits recursion|arguments` reports the evaluation limits.
//! - `info features strict-numeric|floating-point|unicode` reports the
//!   configuration flags as 0 or 1.

use std::ops::ControlFlow::Continue;
use std::rc::Rc;
use ticl_env::command::{Body, Command};
use ticl_env::semantics::Result;
use ticl_env::Interp;

use crate::common;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    let Some(query) = args.get(1).map(String::as_str) else {
        return interp.error_arity(2, &args);
    };
    match query {
        "command" => command(interp, &args),
        "line" => {
            if args.len() != 2 {
                return interp.error_arity(2, &args);
            }
            interp.set_result_integer(interp.line as i64);
            Continue(())
        }
        "level" => {
            if args.len() != 2 {
                return interp.error_arity(2, &args);
            }
            interp.set_result_integer(interp.frames.depth() as i64);
            Continue(())
        }
        "width" => {
            if args.len() != 2 {
                return interp.error_arity(2, &args);
            }
            interp.set_result_integer(i64::from(i64::BITS));
            Continue(())
        }
        "limits" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let limit = match args[2].as_str() {
                "recursion" => interp.limits.max_recursion,
                "arguments" => interp.limits.max_args,
                other => return interp.error(format!("unknown limit '{other}'")),
            };
            interp.set_result_integer(limit as i64);
            Continue(())
        }
        "features" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let flag = match args[2].as_str() {
                "strict-numeric" => 1,
                "floating-point" => 0,
                "unicode" => 0,
                other => return interp.error(format!("unknown feature '{other}'")),
            };
            interp.set_result_integer(flag);
            Continue(())
        }
        other => interp.error(format!("unknown info query '{other}'")),
    }
}

fn field_of(command: &Command, field: &str) -> Option<String> {
    match field {
        "name" => Some(command.name.clone()),
        "args" | "body" => Some(match &command.body {
            Body::Procedure(procedure) => {
                if field == "args" {
                    procedure.params.clone()
                } else {
                    procedure.body.clone()
                }
            }
            Body::Native(function) => {
                let pointer = Rc::as_ptr(function) as *const ();
                format!("{{built-in {pointer:p} {pointer:p}}}")
            }
        }),
        _ => None,
    }
}

fn command(interp: &mut Interp, args: &[String]) -> Result {
    match args.len() {
        2 => {
            interp.set_result_integer(interp.commands.len() as i64);
            Continue(())
        }
        3 => match interp.commands.index_of(&args[2]) {
            Some(index) => {
                interp.set_result_integer(index as i64);
                Continue(())
            }
            None => {
                let message = format!("no such command '{}'", args[2]);
                interp.error(message)
            }
        },
        4 => {
            let index = common::integer(interp, &args[2])?;
            let record = usize::try_from(index)
                .ok()
                .and_then(|index| interp.commands.get_by_index(index));
            let Some(record) = record else {
                return interp.error(format!("no command at index {index}"));
            };
            match field_of(record, &args[3]) {
                Some(value) => {
                    interp.set_result(value);
                    Continue(())
                }
                None => {
                    let message = format!("unknown command field '{}'", args[3]);
                    interp.error(message)
                }
            }
        }
        _ => interp.error_arity(4, args),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{assert_ok, fixture, run};
    use ticl_env::semantics::ReturnCode;

    #[test]
    fn command_count_and_index() {
        let interp = &mut fixture();
        let count = interp.commands.len();
        assert_ok(interp, "info command", &count.to_string());
        assert_ok(interp, "info command break", "0");
        assert_eq!(run(interp, "info command missing").0, ReturnCode::Error);
    }

    #[test]
    fn procedure_fields_are_readable() {
        let interp = &mut fixture();
        assert_ok(interp, "proc f {a b} { concat $a $b }", "");
        let index = interp.commands.index_of("f").unwrap().to_string();
        assert_ok(interp, &format!("info command {index} name"), "f");
        assert_ok(interp, &format!("info command {index} args"), "a b");
        assert_ok(interp, &format!("info command {index} body"), " concat $a $b ");
    }

    #[test]
    fn native_fields_report_built_in() {
        let interp = &mut fixture();
        let (code, result) = run(interp, "info command 0 args");
        assert_eq!(code, ReturnCode::Ok);
        assert!(result.starts_with("{built-in 0x"), "{result:?}");
        assert!(result.ends_with('}'), "{result:?}");
    }

    #[test]
    fn level_reports_frame_depth() {
        let interp = &mut fixture();
        assert_ok(interp, "info level", "0");
        assert_ok(interp, "proc depth {} { info level }; depth", "1");
    }

    #[test]
    fn width_and_limits_and_features() {
        let interp = &mut fixture();
        assert_ok(interp, "info width", "64");
        let recursion = interp.limits.max_recursion.to_string();
        assert_ok(interp, "info limits recursion", &recursion);
        let arguments = interp.limits.max_args.to_string();
        assert_ok(interp, "info limits arguments", &arguments);
        assert_ok(interp, "info features strict-numeric", "1");
        assert_ok(interp, "info features floating-point", "0");
        assert_eq!(run(interp, "info limits disk").0, ReturnCode::Error);
        assert_eq!(run(interp, "info features jit").0, ReturnCode::Error);
    }

    #[test]
    fn line_reports_the_script_position() {
        let interp = &mut fixture();
        assert_ok(interp, "concat x\nconcat y\ninfo line", "3");
    }

    #[test]
    fn unknown_queries_are_errors() {
        let interp = &mut fixture();
        assert_eq!(run(interp, "info nonsense").0, ReturnCode::Error);
        assert_eq!(run(interp, "info").0, ReturnCode::Error);
    }
}
