// This file is part of ticl, a tiny embeddable command language.
// Copyright (C) 2026 the ticl developers

//! This crate provides glob-style pattern matching for the `string match`
//! command of the ticl language.
//!
//! The pattern syntax is deliberately small:
//!
//! - `*` matches any sequence of characters, including the empty one
//! - `?` matches any single character
//! - `%` escapes the following character (so `%*` matches a literal `*`);
//!   a trailing `%` matches itself
//! - any other character matches itself
//!
//! Matching is performed by translating the pattern into an anchored regular
//! expression, which makes the `*`/`?` backtracking linear instead of the
//! exponential worst case of a naive matcher.
//!
//! ```
//! # use ticl_fnmatch::Pattern;
//! let pattern = Pattern::new("a*c").unwrap();
//! assert!(pattern.is_match("abc"));
//! assert!(!pattern.is_match("abx"));
//! ```

use regex::Regex;
use thiserror::Error;

/// Pattern component
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Atom {
    /// Literal character
    Char(char),
    /// Pattern that matches a single character (`?`)
    AnyChar,
    /// Pattern that matches any string (`*`)
    AnyString,
}

/// Error returned when a pattern cannot be compiled.
///
/// The only failure mode is the compiled regular expression exceeding the
/// regex engine's size limit, which takes a pathologically long pattern.
#[derive(Clone, Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] regex::Error);

/// Compiled glob pattern
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

fn parse(pattern: &str) -> Vec<Atom> {
    let mut atoms = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        atoms.push(match c {
            '*' => Atom::AnyString,
            '?' => Atom::AnyChar,
            '%' => Atom::Char(chars.next().unwrap_or('%')),
            _ => Atom::Char(c),
        });
    }
    atoms
}

impl Pattern {
    /// Compiles a pattern.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let mut regex = String::with_capacity(pattern.len() + 8);
        regex.push_str(r"\A(?s:");
        for atom in parse(pattern) {
            match atom {
                Atom::AnyString => regex.push_str(".*"),
                Atom::AnyChar => regex.push('.'),
                Atom::Char(c) => {
                    if regex_syntax::is_meta_character(c) {
                        regex.push('\\');
                    }
                    regex.push(c);
                }
            }
        }
        regex.push_str(r")\z");
        Ok(Pattern {
            regex: Regex::new(&regex)?,
        })
    }

    /// Tests whether the whole subject matches the pattern.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }
}
