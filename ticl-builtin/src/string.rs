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

//! String built-in
//!
//! # Syntax
//!
//! ```ticl
//! string operation arg...
//! ```
//!
//! # Semantics
//!
//! One command, many operations:
//!
//! - `length s`, `toupper s`, `tolower s`, `reverse s`
//! - `trim s [class]`, `trimleft s [class]`, `trimright s [class]`: the
//!   class defaults to ASCII whitespace
//! - `index s n`: `n` may be negative to count from the end; the result
//!   is empty past either end
//! - `range s first last`: inclusive, clamped to the string
//! - `match pattern s`: glob match (`*`, `?`, `%` escape)
//! - `equal a b`, `compare a b`, `compare-no-case a b`
//! - `repeat s n`, `first needle hay [start]`
//! - `ordinal s`, `char n`: code point of the first character and back
//! - `dec2hex n`, `hex2dec s`, `hash s`
//! - `is class s`: character classes (`alnum`, `alpha`, `digit`, `graph`,
//!   `lower`, `print`, `punct`, `space`, `upper`, `xdigit`, `ascii`,
//!   `control`, `wordchar`) and value classes (`false`, `true`, `boolean`,
//!   `integer`)
//!
//! Case operations are ASCII-only. `hash` is the DJB2 hash of the bytes.

use std::cmp::Ordering;
use std::ops::ControlFlow::Continue;
use ticl_env::semantics::Result;
use ticl_env::Interp;
use ticl_fnmatch::Pattern;

use crate::common;

pub fn main(interp: &mut Interp, args: Vec<String>) -> Result {
    let Some(operation) = args.get(1).map(String::as_str) else {
        return interp.error_arity(2, &args);
    };
    match operation {
        "length" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            interp.set_result_integer(args[2].chars().count() as i64);
            Continue(())
        }
        "toupper" | "tolower" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let converted = if operation == "toupper" {
                args[2].to_ascii_uppercase()
            } else {
                args[2].to_ascii_lowercase()
            };
            interp.set_result(converted);
            Continue(())
        }
        "trim" | "trimleft" | "trimright" => {
            if args.len() != 3 && args.len() != 4 {
                return interp.error_arity(3, &args);
            }
            let class = args.get(3).map(String::as_str);
            let pred = |c: char| match class {
                Some(class) => class.contains(c),
                None => c.is_ascii_whitespace(),
            };
            let trimmed = match operation {
                "trim" => args[2].trim_matches(pred),
                "trimleft" => args[2].trim_start_matches(pred),
                _ => args[2].trim_end_matches(pred),
            }
            .to_owned();
            interp.set_result(trimmed);
            Continue(())
        }
        "reverse" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let reversed: String = args[2].chars().rev().collect();
            interp.set_result(reversed);
            Continue(())
        }
        "index" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            let index = common::integer(interp, &args[3])?;
            let characters: Vec<char> = args[2].chars().collect();
            let index = if index < 0 {
                (characters.len() as i64 + index).max(0)
            } else {
                index
            };
            let result = usize::try_from(index)
                .ok()
                .and_then(|index| characters.get(index))
                .map(|c| c.to_string())
                .unwrap_or_default();
            interp.set_result(result);
            Continue(())
        }
        "range" => {
            if args.len() != 5 {
                return interp.error_arity(5, &args);
            }
            let first = common::integer(interp, &args[3])?;
            let last = common::integer(interp, &args[4])?;
            let characters: Vec<char> = args[2].chars().collect();
            let first = first.max(0) as usize;
            let last = last.min(characters.len() as i64 - 1);
            let result: String = if last < 0 || first as i64 > last {
                String::new()
            } else {
                characters[first..=last as usize].iter().collect()
            };
            interp.set_result(result);
            Continue(())
        }
        "match" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            match Pattern::new(&args[2]) {
                Ok(pattern) => {
                    interp.set_result_integer(i64::from(pattern.is_match(&args[3])));
                    Continue(())
                }
                Err(error) => interp.error(error.to_string()),
            }
        }
        "equal" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            interp.set_result_integer(i64::from(args[2] == args[3]));
            Continue(())
        }
        "compare" | "compare-no-case" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            let ordering = if operation == "compare" {
                args[2].cmp(&args[3])
            } else {
                args[2]
                    .to_ascii_lowercase()
                    .cmp(&args[3].to_ascii_lowercase())
            };
            let result = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            interp.set_result_integer(result);
            Continue(())
        }
        "repeat" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            let count = common::integer(interp, &args[3])?;
            let count = usize::try_from(count).unwrap_or(0);
            interp.set_result(args[2].repeat(count));
            Continue(())
        }
        "first" => {
            if args.len() != 4 && args.len() != 5 {
                return interp.error_arity(4, &args);
            }
            let start = match args.get(4) {
                Some(start) => common::integer(interp, start)?,
                None => 0,
            };
            let offset = usize::try_from(start)
                .ok()
                .and_then(|start| args[3].get(start..).map(|hay| (start, hay)))
                .and_then(|(start, hay)| hay.find(&args[2]).map(|found| start + found));
            let result = offset.map(|offset| offset as i64).unwrap_or(-1);
            interp.set_result_integer(result);
            Continue(())
        }
        "ordinal" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let ordinal = args[2].chars().next().map(u32::from).unwrap_or(0);
            interp.set_result_integer(i64::from(ordinal));
            Continue(())
        }
        "char" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let code = common::integer(interp, &args[2])?;
            let character = u32::try_from(code).ok().and_then(char::from_u32);
            match character {
                Some(character) => {
                    interp.set_result(character.to_string());
                    Continue(())
                }
                None => interp.error(format!("invalid character code {code}")),
            }
        }
        "dec2hex" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            let number = common::integer(interp, &args[2])?;
            interp.set_result(ticl_arith::format_radix(number, 16));
            Continue(())
        }
        "hex2dec" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            match ticl_arith::parse_radix(&args[2], 16) {
                Ok(number) => {
                    interp.set_result_integer(number);
                    Continue(())
                }
                Err(error) => interp.error(error.to_string()),
            }
        }
        "hash" => {
            if args.len() != 3 {
                return interp.error_arity(3, &args);
            }
            interp.set_result_integer(i64::from(djb2(&args[2])));
            Continue(())
        }
        "is" => {
            if args.len() != 4 {
                return interp.error_arity(4, &args);
            }
            match holds(&args[2], &args[3]) {
                Some(result) => {
                    interp.set_result_integer(i64::from(result));
                    Continue(())
                }
                None => {
                    let message = format!("unknown character class '{}'", args[2]);
                    interp.error(message)
                }
            }
        }
        other => interp.error(format!("unknown string operation '{other}'")),
    }
}

/// DJB2 over the bytes of the string.
fn djb2(s: &str) -> u32 {
    s.bytes()
        .fold(5381u32, |hash, byte| {
            hash.wrapping_mul(33).wrapping_add(u32::from(byte))
        })
}

fn is_false_word(s: &str) -> bool {
    ["0", "false", "no", "off"]
        .iter()
        .any(|word| s.eq_ignore_ascii_case(word))
}

fn is_true_word(s: &str) -> bool {
    ["1", "true", "yes", "on"]
        .iter()
        .any(|word| s.eq_ignore_ascii_case(word))
}

/// Tests a subject against a class; `None` for an unknown class name.
fn holds(class: &str, subject: &str) -> Option<bool> {
    let all = |pred: fn(char) -> bool| subject.chars().all(pred);
    Some(match class {
        "alnum" => all(|c| c.is_ascii_alphanumeric()),
        "alpha" => all(|c| c.is_ascii_alphabetic()),
        "digit" => all(|c| c.is_ascii_digit()),
        "graph" => all(|c| c.is_ascii_graphic()),
        "lower" => all(|c| c.is_ascii_lowercase()),
        "print" => all(|c| c.is_ascii_graphic() || c == ' '),
        "punct" => all(|c| c.is_ascii_punctuation()),
        "space" => all(|c| c.is_ascii_whitespace()),
        "upper" => all(|c| c.is_ascii_uppercase()),
        "xdigit" => all(|c| c.is_ascii_hexdigit()),
        "ascii" => all(|c| c.is_ascii()),
        "control" => all(|c| c.is_ascii_control()),
        "wordchar" => all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "false" => is_false_word(subject),
        "true" => is_true_word(subject),
        "boolean" => is_false_word(subject) || is_true_word(subject),
        "integer" => ticl_arith::parse_integer(subject).is_ok(),
        _ => return None,
    })
}
