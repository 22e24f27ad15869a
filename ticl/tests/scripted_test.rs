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

//! Whole-script tests through the public API.

use assert_matches::assert_matches;
use std::cell::RefCell;
use std::ops::ControlFlow::Continue;
use std::rc::Rc;
use ticl::env::command::Body;
use ticl::env::limits::Limits;
use ticl::env::semantics::ReturnCode;
use ticl::env::VarError;
use ticl::Interp;

fn run(interp: &mut Interp, script: &str) -> (ReturnCode, String) {
    let code = ticl::eval(interp, script).into();
    (code, interp.result().to_owned())
}

fn ok(script: &str) -> String {
    let mut interp = ticl::interpreter();
    let (code, result) = run(&mut interp, script);
    assert_eq!(code, ReturnCode::Ok, "script: {script:?}, result: {result:?}");
    result
}

#[test]
fn arithmetic_commands() {
    assert_eq!(ok("+  2 2"), "4");
    assert_eq!(ok("* -2 9"), "-18");
}

#[test]
fn join_a_brace_list() {
    assert_eq!(ok("join {a b c} ,"), "a,b,c");
}

#[test]
fn return_with_an_error_code() {
    let mut interp = ticl::interpreter();
    assert_eq!(
        run(&mut interp, "return fail -1"),
        (ReturnCode::Error, "fail".to_owned())
    );
}

#[test]
fn strict_integer_accessors() {
    let mut interp = ticl::interpreter();
    let (code, _) = run(&mut interp, "set a 54; set b 3; set c -4x");
    assert_eq!(code, ReturnCode::Ok);
    assert_eq!(interp.var_integer("a"), Ok(54));
    assert_eq!(interp.var("c"), Some("-4x"));
    assert_matches!(interp.var_integer("c"), Err(VarError::Numeral(_)));
}

#[test]
fn procedure_increment() {
    assert_eq!(ok("proc f {x} { + $x 1 }; f 41"), "42");
}

#[test]
fn while_loop_counts() {
    assert_eq!(ok("set i 0; while {< $i 3} {set i [+ $i 1]}; set i"), "3");
}

#[test]
fn catch_reports_the_code() {
    let mut interp = ticl::interpreter();
    let (code, result) = run(&mut interp, "catch {foo} r");
    assert_eq!(code, ReturnCode::Ok);
    assert_eq!(result, "-1");
    assert_eq!(interp.var("r"), Some("-1"));
}

#[test]
fn line_counter_after_evaluation() {
    let mut interp = ticl::interpreter();
    let (code, _) = run(&mut interp, "* 4 4\nset a 3\n\n");
    assert_eq!(code, ReturnCode::Ok);
    assert_eq!(interp.line, 4);
}

#[test]
fn glob_matching() {
    assert_eq!(ok("string match a*c abc"), "1");
}

#[test]
fn empty_program() {
    let mut interp = ticl::interpreter();
    interp.set_result("stale");
    assert_eq!(run(&mut interp, ""), (ReturnCode::Ok, "".to_owned()));
}

#[test]
fn reverse_round_trip() {
    for s in ["", "a", "hello world", "a b {c} $d"] {
        let mut interp = ticl::interpreter();
        interp.set_var("s", s);
        let (code, result) = run(
            &mut interp,
            "string reverse [string reverse $s]",
        );
        assert_eq!(code, ReturnCode::Ok);
        assert_eq!(result, s);
    }
}

#[test]
fn hex_round_trip() {
    for n in ["0", "1", "255", "4096", "65535"] {
        let mut interp = ticl::interpreter();
        interp.set_var("n", n);
        let (code, result) = run(
            &mut interp,
            "string hex2dec [string dec2hex $n]",
        );
        assert_eq!(code, ReturnCode::Ok);
        assert_eq!(result, n);
    }
}

#[test]
fn concat_of_a_single_word_is_identity() {
    assert_eq!(ok("concat word"), "word");
}

#[test]
fn bracket_nesting_respects_the_recursion_limit() {
    let make = |brackets: usize| {
        let mut script = "concat x".to_owned();
        for _ in 0..brackets {
            script = format!("concat [{script}]");
        }
        script
    };

    // Depth 1 is the outermost evaluation, so limit - 1 brackets fit.
    let mut interp = Interp::with_limits(Limits::new(8, 128));
    ticl::builtin::register(&mut interp);
    assert_eq!(run(&mut interp, &make(7)), (ReturnCode::Ok, "x".to_owned()));

    let mut interp = Interp::with_limits(Limits::new(8, 128));
    ticl::builtin::register(&mut interp);
    let (code, message) = run(&mut interp, &make(8));
    assert_eq!(code, ReturnCode::Error);
    assert_eq!(message, "recursion limit exceeded");
}

#[test]
fn procedure_arity_boundaries() {
    let mut interp = ticl::interpreter();
    let (code, _) = run(&mut interp, "proc f {a b} { concat $a $b }");
    assert_eq!(code, ReturnCode::Ok);
    let (code, message) = run(&mut interp, "f 1");
    assert_eq!(code, ReturnCode::Error);
    assert_eq!(
        message,
        "wrong number of arguments for 'f': expected 3, got 'f 1'"
    );
    assert_eq!(run(&mut interp, "f 1 2 3").0, ReturnCode::Error);
}

#[test]
fn version_variable_is_defined() {
    let interp = ticl::interpreter();
    assert_eq!(interp.var_integer("version"), Ok(ticl::builtin::VERSION));
}

#[test]
fn host_commands_carry_captured_state() {
    // The Rust rendition of a command's private data: captured state.
    let sink = Rc::new(RefCell::new(Vec::<String>::new()));
    let captured = Rc::clone(&sink);
    let mut interp = ticl::interpreter();
    interp
        .commands
        .define(
            "collect".to_owned(),
            Body::Native(Rc::new(move |interp: &mut Interp, args: Vec<String>| {
                captured.borrow_mut().extend(args.into_iter().skip(1));
                interp.set_result("");
                Continue(())
            })),
        )
        .unwrap();

    let (code, _) = run(&mut interp, "collect a b; collect [+ 1 2]");
    assert_eq!(code, ReturnCode::Ok);
    assert_eq!(*sink.borrow(), ["a", "b", "3"]);
}

#[test]
fn quoting_and_substitution_interplay() {
    assert_eq!(ok(r#"set name world; concat "hello, $name""#), "hello, world");
    assert_eq!(ok(r#"concat {no $subst here}"#), "no $subst here");
    assert_eq!(ok(r#"concat "result: [+ 1 1]""#), "result: 2");
    assert_eq!(ok(r"concat a\tb"), "a\tb");
}

#[test]
fn comments_and_separators() {
    assert_eq!(
        ok("# a program\nset a 1; set b 2\n# middle comment\n+ $a $b"),
        "3"
    );
}

#[test]
fn a_small_program() {
    let script = "\
proc fizzbuzz {n} {
    if {== [% $n 15] 0} {return fizzbuzz}
    if {== [% $n 3] 0} {return fizz}
    if {== [% $n 5] 0} {return buzz}
    return $n
}
set out {}
set i 1
while {<= $i 15} {
    set out [concat $out [fizzbuzz $i]]
    set i [+ $i 1]
}
string trim $out
";
    assert_eq!(
        ok(script),
        "1 2 fizz 4 buzz fizz 7 8 fizz buzz 11 fizz 13 14 fizzbuzz"
    );
}

#[test]
fn frames_stay_balanced_across_failures() {
    let mut interp = ticl::interpreter();
    let scripts = [
        "proc f {} { missing }; catch {f} r",
        "catch {uplevel 1 nothing} r",
        "proc g {a} {}; catch {g} r",
    ];
    for script in scripts {
        let (code, _) = run(&mut interp, script);
        assert_eq!(code, ReturnCode::Ok, "script: {script:?}");
        assert_eq!(interp.frames.depth(), 0, "script: {script:?}");
    }
}
