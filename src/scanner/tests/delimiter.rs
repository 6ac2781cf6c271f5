/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases for delimiter frames: grouping, newline
//! suppression, and the auto close of blocks left open when
//! a closing delimiter or comma arrives.

use pretty_assertions::assert_eq;

use super::*;
use crate::token::TokenKind;

#[test]
fn newline_suppressed_in_parens()
{
    let mut s = ScanIter::new("(a,\n b)");

    tokens!(s =>
        | LParen,
        | LowerId("a"),
        | Comma,
        | LowerId("b")    => "the newline inside parens is not significant",
        | RParen,
        | Newline         => "expected the synthetic EOF newline",
        @ None
    );
}

#[test]
fn newline_on_request_in_parens()
{
    // The parser may still ask for a newline inside a
    // delimiter; the scanner only suppresses unrequested
    // ones
    let valid = TokenSet::all() - TokenSet::START_BLOCK;
    let mut lexer = StrLexer::new("(\n  a)");
    let mut scan = Scanner::new();

    lexer.begin();
    assert_eq!(scan.scan(&mut lexer, valid), Some(TokenKind::LParen));

    lexer.begin();
    assert_eq!(scan.scan(&mut lexer, valid), Some(TokenKind::Newline));

    lexer.begin();
    assert_eq!(scan.scan(&mut lexer, valid), Some(TokenKind::LowerId));
}

#[test]
fn auto_close_on_rparen()
{
    let mut s = ScanIter::new("f(a:\n    b)\n");

    tokens!(s =>
        | LowerId("f"),
        | LParen,
        | LowerId("a"),
        | Colon,
        | StartBlock,
        | LowerId("b"),
        | Newline         => "the rparen terminates the open block first",
        | EndBlock,
        | RParen,
        | Newline,
        @ None
    );
}

#[test]
fn auto_close_on_comma()
{
    let mut s = ScanIter::new("f(a:\n    b, c)\n");

    tokens!(s =>
        | LowerId("f"),
        | LParen,
        | LowerId("a"),
        | Colon,
        | StartBlock,
        | LowerId("b"),
        | Newline,
        | EndBlock        => "the comma closes the block before it",
        | Comma,
        | LowerId("c"),
        | RParen,
        | Newline,
        @ None
    );
}

#[test]
fn auto_close_without_newline_on_offer()
{
    let base = TokenSet::all() - TokenSet::START_BLOCK - TokenSet::NEWLINE;
    let mut lexer = StrLexer::new("f(a:\n  b)");
    let mut scan = Scanner::new();

    let expected = [
        (base, TokenKind::LowerId),
        (base, TokenKind::LParen),
        (base, TokenKind::LowerId),
        (base, TokenKind::Colon),
        (base | TokenSet::START_BLOCK, TokenKind::StartBlock),
        (base, TokenKind::LowerId),
        (base, TokenKind::EndBlock),
        (base, TokenKind::RParen),
    ];

    for &(valid, kind) in expected.iter()
    {
        lexer.begin();

        assert_eq!(scan.scan(&mut lexer, valid), Some(kind));
    }
}

#[test]
fn toplevel_comma_closes_nothing()
{
    // No delimiter frame beneath, so the comma is just a
    // comma
    let mut s = ScanIter::new("a, b\n");

    tokens!(s =>
        | LowerId("a"),
        | Comma,
        | LowerId("b"),
        | Newline,
        @ None
    );
}

#[test]
fn brackets()
{
    let mut s = ScanIter::new("x[1, 2]\n");

    tokens!(s =>
        | LowerId("x"),
        | LBracket,
        | IntLiteral("1"),
        | Comma,
        | IntLiteral("2"),
        | RBracket,
        | Newline,
        @ None
    );
}

#[test]
fn row_keyword_frees_the_bracket()
{
    let mut s = ScanIter::new("row[Str]\n");

    tokens!(s =>
        | KwRow,
        | LBracket,
        | UpperId("Str"),
        | RBracket,
        | Newline,
        @ None
    );
}

#[test]
fn braces_are_column_zero_blocks()
{
    let mut s = ScanIter::new("{a = 1, b = 2}\n");

    tokens!(s =>
        | LBrace,
        | LowerId("a"),
        | Eq,
        | IntLiteral("1"),
        | Comma           => "a comma inside braces closes nothing",
        | LowerId("b"),
        | Eq,
        | IntLiteral("2"),
        | RBrace,
        | Newline,
        @ None
    );
}

#[test]
fn lambda_open()
{
    let mut s = ScanIter::new("\\(x) + 1\n");

    tokens!(s =>
        | BackslashLParen,
        | LowerId("x"),
        | RParen,
        | Plus,
        | IntLiteral("1"),
        | Newline,
        @ None
    );
}

#[test]
fn stray_backslash_fails()
{
    let mut s = ScanIter::new("\\x");

    tokens!(s =>
        @ None => "a backslash without a paren scans nothing"
    );
}

#[test]
fn nested_groups()
{
    let mut s = ScanIter::new("f(g[h(x)])\n");

    tokens!(s =>
        | LowerId("f"),
        | LParen,
        | LowerId("g"),
        | LBracket,
        | LowerId("h"),
        | LParen,
        | LowerId("x"),
        | RParen,
        | RBracket,
        | RParen,
        | Newline,
        @ None
    );
}
