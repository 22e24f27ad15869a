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

//! Tokenization of ticl source text.
//!
//! [`Parser`] is a byte-level scanner that yields one [`Token`] per call to
//! [`next_token`](Parser::next_token). Word assembly (concatenating adjacent
//! tokens) and substitution are the evaluator's job; the parser only
//! classifies and slices the source.
//!
//! The scanner state is transient: one `Parser` serves one evaluation of one
//! source string. The line counter advances exactly once per newline byte
//! consumed, wherever it occurs, so a caller can mirror it into a
//! user-visible line number.

use thiserror::Error;

/// Classification of a [`Token`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// Run of blanks between words
    Sep,
    /// Command terminator: newlines and semicolons, possibly mixed with blanks
    Eol,
    /// Literal text that needs no decoding (brace groups, a lone `$`)
    Str,
    /// Literal text that needs backslash-escape decoding
    Esc,
    /// Variable reference; the text is the name without the `$`
    Var,
    /// Command substitution; the text is the script without the brackets
    Cmd,
    /// End of input
    Eof,
}

/// One lexeme of a source string.
///
/// The `text` slice borrows from the parsed source. For `Var` tokens it
/// excludes the leading `$`; for `Cmd` and brace-group `Str` tokens it
/// excludes the delimiters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Cause of a tokenization error
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum ErrorCause {
    #[error("unmatched '['")]
    UnclosedCommand,
    #[error("unmatched '{{'")]
    UnclosedBrace,
    #[error("unclosed '\"'")]
    UnclosedQuote,
}

/// Tokenization error, carrying the line it was detected on
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("{cause} at line {line}")]
pub struct Error {
    pub cause: ErrorCause,
    pub line: u64,
}

/// Scanner over one source string.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    src: &'a str,
    pos: usize,
    in_quote: bool,
    prev: TokenKind,
    line: u64,
}

impl<'a> Parser<'a> {
    /// Creates a scanner positioned at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Parser {
            src,
            pos: 0,
            in_quote: false,
            prev: TokenKind::Eol,
            line: 1,
        }
    }

    /// Returns 1 plus the number of newlines consumed so far.
    #[must_use]
    pub fn line(&self) -> u64 {
        self.line
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.src.as_bytes().get(self.pos) == Some(&b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Consumes a backslash and the byte it protects, if any.
    fn bump_escaped(&mut self) {
        self.bump();
        if self.peek().is_some() {
            self.bump();
        }
    }

    fn error(&self, cause: ErrorCause) -> Error {
        Error {
            cause,
            line: self.line,
        }
    }

    /// Returns the next token.
    ///
    /// After the last content token, one `Eol` is synthesized (unless the
    /// previous token already was one) so every command is terminated; all
    /// later calls return `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'a>, Error> {
        loop {
            let Some(byte) = self.peek() else {
                return self.finish();
            };
            let token = match byte {
                b' ' | b'\t' if !self.in_quote => self.scan_separator(),
                b'\n' | b'\r' | b';' if !self.in_quote => self.scan_terminator(),
                b'[' => self.scan_command()?,
                b'$' => self.scan_variable(),
                b'#' if self.prev == TokenKind::Eol => {
                    self.skip_comment();
                    continue;
                }
                _ => self.scan_word()?,
            };
            self.prev = token.kind;
            return Ok(token);
        }
    }

    fn finish(&mut self) -> Result<Token<'a>, Error> {
        if self.in_quote {
            return Err(self.error(ErrorCause::UnclosedQuote));
        }
        let kind = match self.prev {
            TokenKind::Eol | TokenKind::Eof => TokenKind::Eof,
            _ => TokenKind::Eol,
        };
        self.prev = kind;
        Ok(Token { kind, text: "" })
    }

    fn scan_separator(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(b' ' | b'\t' | b'\r') = self.peek() {
            self.bump();
        }
        Token {
            kind: TokenKind::Sep,
            text: &self.src[start..self.pos],
        }
    }

    fn scan_terminator(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | b';') = self.peek() {
            self.bump();
        }
        Token {
            kind: TokenKind::Eol,
            text: &self.src[start..self.pos],
        }
    }

    fn skip_comment(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'\n' {
                break;
            }
            self.bump();
        }
    }

    fn scan_variable(&mut self) -> Token<'a> {
        let dollar = self.pos;
        self.bump();
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            // A lone `$` is an ordinary one-byte literal.
            Token {
                kind: TokenKind::Str,
                text: &self.src[dollar..start],
            }
        } else {
            Token {
                kind: TokenKind::Var,
                text: &self.src[start..self.pos],
            }
        }
    }

    fn scan_command(&mut self) -> Result<Token<'a>, Error> {
        self.bump(); // [
        let start = self.pos;
        let mut level = 1u32;
        let mut blevel = 0u32;
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorCause::UnclosedCommand)),
                Some(b'\\') => self.bump_escaped(),
                Some(b'{') => {
                    blevel += 1;
                    self.bump();
                }
                Some(b'}') if blevel > 0 => {
                    blevel -= 1;
                    self.bump();
                }
                Some(b'[') if blevel == 0 => {
                    level += 1;
                    self.bump();
                }
                Some(b']') if blevel == 0 => {
                    level -= 1;
                    if level == 0 {
                        let text = &self.src[start..self.pos];
                        self.bump();
                        return Ok(Token {
                            kind: TokenKind::Cmd,
                            text,
                        });
                    }
                    self.bump();
                }
                Some(_) => self.bump(),
            }
        }
    }

    fn scan_braces(&mut self) -> Result<Token<'a>, Error> {
        self.bump(); // {
        let start = self.pos;
        let mut level = 1u32;
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorCause::UnclosedBrace)),
                Some(b'\\') => self.bump_escaped(),
                Some(b'{') => {
                    level += 1;
                    self.bump();
                }
                Some(b'}') => {
                    level -= 1;
                    if level == 0 {
                        let text = &self.src[start..self.pos];
                        self.bump();
                        return Ok(Token {
                            kind: TokenKind::Str,
                            text,
                        });
                    }
                    self.bump();
                }
                Some(_) => self.bump(),
            }
        }
    }

    fn scan_word(&mut self) -> Result<Token<'a>, Error> {
        // Brace and quote groups only open at the start of a word.
        let new_word = matches!(
            self.prev,
            TokenKind::Sep | TokenKind::Eol | TokenKind::Str
        );
        if new_word && !self.in_quote {
            match self.peek() {
                Some(b'{') => return self.scan_braces(),
                Some(b'"') => {
                    self.in_quote = true;
                    self.bump();
                }
                _ => {}
            }
        }

        let start = self.pos;
        let mut blevel = 0u32;
        loop {
            let Some(byte) = self.peek() else {
                if self.in_quote {
                    return Err(self.error(ErrorCause::UnclosedQuote));
                }
                break;
            };
            match byte {
                b'\\' => self.bump_escaped(),
                b'$' | b'[' => break,
                b'"' if self.in_quote && blevel == 0 => {
                    let text = &self.src[start..self.pos];
                    self.bump();
                    self.in_quote = false;
                    return Ok(Token {
                        kind: TokenKind::Esc,
                        text,
                    });
                }
                b' ' | b'\t' | b'\n' | b'\r' | b';' if !self.in_quote => break,
                b'{' if self.in_quote => {
                    blevel += 1;
                    self.bump();
                }
                b'}' if self.in_quote && blevel > 0 => {
                    blevel -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
        Ok(Token {
            kind: TokenKind::Esc,
            text: &self.src[start..self.pos],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokens(src: &str) -> Vec<(TokenKind, String)> {
        let mut parser = Parser::new(src);
        let mut tokens = Vec::new();
        loop {
            let token = parser.next_token().unwrap();
            tokens.push((token.kind, token.text.to_owned()));
            if token.kind == TokenKind::Eof {
                return tokens;
            }
        }
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokens(src).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn empty_input_yields_eof_only() {
        assert_eq!(kinds(""), [TokenKind::Eof]);
    }

    #[test]
    fn bare_words_and_separators() {
        use TokenKind::*;
        assert_eq!(
            tokens("set a 54"),
            [
                (Esc, "set".to_owned()),
                (Sep, " ".to_owned()),
                (Esc, "a".to_owned()),
                (Sep, " ".to_owned()),
                (Esc, "54".to_owned()),
                (Eol, "".to_owned()),
                (Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn final_eol_is_synthesized_once() {
        use TokenKind::*;
        assert_eq!(kinds("a"), [Esc, Eol, Eof]);
        assert_eq!(kinds("a\n"), [Esc, Eol, Eof]);
        assert_eq!(kinds("a;"), [Esc, Eol, Eof]);
    }

    #[test]
    fn semicolons_and_newlines_terminate() {
        use TokenKind::*;
        assert_eq!(kinds("a;b"), [Esc, Eol, Esc, Eol, Eof]);
        assert_eq!(kinds("a\nb"), [Esc, Eol, Esc, Eol, Eof]);
        assert_eq!(kinds("a ; \n b"), [Esc, Eol, Esc, Eol, Eof]);
    }

    #[test]
    fn variable_tokens() {
        use TokenKind::*;
        assert_eq!(
            tokens("$foo_1"),
            [
                (Var, "foo_1".to_owned()),
                (Eol, "".to_owned()),
                (Eof, "".to_owned()),
            ]
        );
        // Adjacent text stays in the same word; the parser just slices.
        assert_eq!(kinds("a$b"), [Esc, Var, Eol, Eof]);
    }

    #[test]
    fn lone_dollar_is_a_literal() {
        assert_eq!(
            tokens("$ x"),
            [
                (TokenKind::Str, "$".to_owned()),
                (TokenKind::Sep, " ".to_owned()),
                (TokenKind::Esc, "x".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn command_substitution() {
        assert_eq!(
            tokens("[+ 1 [2]]"),
            [
                (TokenKind::Cmd, "+ 1 [2]".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn brackets_inside_braces_do_not_count() {
        assert_eq!(
            tokens("[a {]} b]"),
            [
                (TokenKind::Cmd, "a {]} b".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn brace_group_is_literal() {
        assert_eq!(
            tokens("{a $b [c] {d}}"),
            [
                (TokenKind::Str, "a $b [c] {d}".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn braces_mid_word_are_literal() {
        use TokenKind::*;
        assert_eq!(
            tokens("a{b}"),
            [
                (Esc, "a{b}".to_owned()),
                (Eol, "".to_owned()),
                (Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn quoted_group_splits_at_substitutions() {
        use TokenKind::*;
        assert_eq!(
            tokens("\"a $b c\""),
            [
                (Esc, "a ".to_owned()),
                (Var, "b".to_owned()),
                (Esc, " c".to_owned()),
                (Eol, "".to_owned()),
                (Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn quoted_group_keeps_terminators_literal() {
        use TokenKind::*;
        assert_eq!(
            tokens("\"a;b\nc\""),
            [
                (Esc, "a;b\nc".to_owned()),
                (Eol, "".to_owned()),
                (Eof, "".to_owned()),
            ]
        );
    }

    #[test]
    fn comment_only_after_terminator() {
        use TokenKind::*;
        assert_eq!(kinds("# comment\nset a 1"), [Eol, Esc, Sep, Esc, Sep, Esc, Eol, Eof]);
        // After another token `#` is ordinary text.
        assert_eq!(kinds("a #b"), [Esc, Sep, Esc, Eol, Eof]);
    }

    #[test]
    fn line_counting() {
        let mut parser = Parser::new("* 4 4\nset a 3\n\n");
        while parser.next_token().unwrap().kind != TokenKind::Eof {}
        assert_eq!(parser.line(), 4);
    }

    #[test]
    fn line_counting_inside_groups() {
        let mut parser = Parser::new("{a\nb} [c\nd]");
        while parser.next_token().unwrap().kind != TokenKind::Eof {}
        assert_eq!(parser.line(), 3);
    }

    #[test]
    fn unclosed_delimiters_are_errors() {
        let mut parser = Parser::new("[a b");
        assert_matches!(
            parser.next_token(),
            Err(Error {
                cause: ErrorCause::UnclosedCommand,
                ..
            })
        );

        let mut parser = Parser::new("{a b");
        assert_matches!(
            parser.next_token(),
            Err(Error {
                cause: ErrorCause::UnclosedBrace,
                ..
            })
        );

        let mut parser = Parser::new("\"a b");
        assert_matches!(
            parser.next_token(),
            Err(Error {
                cause: ErrorCause::UnclosedQuote,
                ..
            })
        );
    }

    #[test]
    fn error_reports_line() {
        let mut parser = Parser::new("a\nb\n[c");
        let error = loop {
            match parser.next_token() {
                Ok(_) => {}
                Err(error) => break error,
            }
        };
        assert_eq!(error.line, 3);
        assert_eq!(error.to_string(), "unmatched '[' at line 3");
    }

    #[test]
    fn escaped_bytes_do_not_terminate() {
        assert_eq!(
            tokens(r"a\ b"),
            [
                (TokenKind::Esc, r"a\ b".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
        assert_eq!(
            tokens(r"{a\}b}"),
            [
                (TokenKind::Str, r"a\}b".to_owned()),
                (TokenKind::Eol, "".to_owned()),
                (TokenKind::Eof, "".to_owned()),
            ]
        );
    }
}
