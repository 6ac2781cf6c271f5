/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The cursor contract between the host parser and the
//! scanner, plus a string backed implementation of it used
//! by embedders and the test suite.

/// The handle a host hands to the scanner on every call.
/// The scanner never owns the input; it peeks, consumes and
/// seals token extents through this interface only.
pub trait Lexer {
    /// The next code point without consuming it, None at
    /// end of input
    fn lookahead(&self) -> Option<char>;

    /// Consume one code point. When skip is true the code
    /// point is dropped from the current token's extent
    fn advance(&mut self, skip: bool);

    /// Seal the current token's extent at the current
    /// position
    fn mark_end(&mut self);

    /// Zero based column of the lookahead on its line
    fn column(&self) -> usize;

    /// True at end of input
    fn eof(&self) -> bool;
}

/// A Lexer over an in-memory string. Everything consumed
/// past the last mark_end is provisional: begin rewinds to
/// the committed position, which is how a failed scan call
/// leaves the cursor untouched.
#[derive(Debug, Clone)]
pub struct StrLexer<'a> {
    src: &'a str,
    cursor: usize,
    column: usize,
    start: usize,
    end: usize,
    content: bool,
}

impl<'a> StrLexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            cursor: 0,
            column: 0,
            start: 0,
            end: 0,
            content: false,
        }
    }

    /// Start the next token at the last committed end
    /// position, discarding anything consumed past it
    pub fn begin(&mut self) {
        self.cursor = self.end;
        self.start = self.end;
        self.column = column_at(self.src, self.end);
        self.content = false;
    }

    /// The extent committed by the last mark_end
    pub fn token(&self) -> &'a str {
        &self.src[self.start..self.end]
    }

    /// Byte offset of the committed end position
    pub fn offset(&self) -> usize {
        self.end
    }
}

impl<'a> Lexer for StrLexer<'a> {
    fn lookahead(&self) -> Option<char> {
        self.src[self.cursor..].chars().next()
    }

    fn advance(&mut self, skip: bool) {
        let c = match self.lookahead() {
            Some(c) => c,
            None => return,
        };

        self.cursor += c.len_utf8();
        self.column = match c {
            '\n' | '\r' => 0,
            _ => self.column + 1,
        };

        match skip {
            // Leading skipped code points move the token
            // start forward; once the token has content a
            // skip no longer can
            true if !self.content => self.start = self.cursor,
            false => self.content = true,
            _ => {}
        }
    }

    fn mark_end(&mut self) {
        self.end = self.cursor;
    }

    fn column(&self) -> usize {
        self.column
    }

    fn eof(&self) -> bool {
        self.cursor >= self.src.len()
    }
}

/// Column of the given byte offset, counted in code points
/// from the last line break
fn column_at(src: &str, offset: usize) -> usize {
    let line_start = src[..offset]
        .rfind(|c| c == '\n' || c == '\r')
        .map(|at| at + 1)
        .unwrap_or(0);

    src[line_start..offset].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn column() {
        let data = "abc\nefg\nhijkl";
        let expected = vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 4, 5];
        let mut lexer = StrLexer::new(data);

        assert_eq!(lexer.column(), 0);

        for column in expected {
            lexer.advance(false);

            assert_eq!(lexer.column(), column, "@ offset {}", lexer.cursor);
        }
    }

    #[test]
    fn extent() {
        let mut lexer = StrLexer::new("  word ");

        lexer.begin();
        lexer.advance(true);
        lexer.advance(true);

        for _ in 0.."word".len() {
            lexer.advance(false);
        }
        lexer.mark_end();

        assert_eq!(lexer.token(), "word");
    }

    #[test]
    fn extent_empty() {
        let mut lexer = StrLexer::new("    x");

        lexer.begin();
        while lexer.lookahead() == Some(' ') {
            lexer.advance(true);
        }
        lexer.mark_end();

        assert_eq!(lexer.token(), "");
        assert_eq!(lexer.column(), 4);
    }

    #[test]
    fn rewind_uncommitted() {
        let mut lexer = StrLexer::new("ab");

        lexer.begin();
        lexer.advance(false);
        lexer.mark_end();
        lexer.advance(false);

        // The second advance was never committed
        lexer.begin();

        assert_eq!(lexer.lookahead(), Some('b'));
        assert_eq!(lexer.token(), "");
    }

    #[test]
    fn resume_column() {
        let mut lexer = StrLexer::new("a\n  b");

        lexer.begin();
        lexer.advance(false);
        lexer.mark_end();

        lexer.begin();
        lexer.advance(true);
        lexer.advance(true);
        lexer.advance(true);

        assert_eq!(lexer.column(), 2);
        assert_eq!(lexer.lookahead(), Some('b'));
    }
}
