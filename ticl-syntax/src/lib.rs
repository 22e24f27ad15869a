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

//! Lexer for the ticl command language.
//!
//! A ticl program is a sequence of commands separated by newlines or
//! semicolons. Each command is a sequence of words separated by blanks, and
//! each word is assembled from adjacent tokens: bare literals, brace groups
//! (no substitution), double-quoted segments (substitution active), `$name`
//! variable references, and `[script]` command substitutions.
//!
//! The [`parser`] module produces the token stream the evaluator consumes.
//! The [`escape`] module decodes backslash escapes in tokens the parser
//! marks as needing decoding.

pub mod escape;
pub mod parser;

pub use escape::unescape;
pub use parser::{Parser, Token, TokenKind};
