/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Tokens the scanner may hand back to the parser.
///
/// The grammar addresses these by ordinal, so the order is
/// a compatibility contract; the explicit discriminants
/// mark where each group begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind
{
    // Layout
    /// An indented block opens; combines a newline with the
    /// indent that follows it
    StartBlock = 0,
    /// An indented block ends
    EndBlock,
    /// A line break that terminates a statement
    Newline,

    // Identifiers
    UpperId = 3,
    LowerId,
    /// A 'quoted loop label
    Label,

    // Literals
    IntLiteral = 6,
    CharLiteral,

    // String fragments
    BeginStr = 8,
    EndStr,
    StringContent,
    /// The backtick opening an interpolation hole
    BeginInterpolation,
    /// The backtick closing an interpolation hole
    EndInterpolation,

    // Comments, folded between meaningful tokens as extras
    BlockComment = 13,
    LineComment,

    // Delimiters
    LParen = 15,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    /// A '\(' opening an anonymous function
    BackslashLParen,

    // Punctuation
    Colon = 22,
    Comma,
    Dot,
    DotDot,
    Eq,
    Underscore,
    Slash,
    Semicolon,

    // Operators
    Plus = 30,
    Minus,
    Star,
    EqEq,
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Lshift,
    Rshift,
    Amp,
    AmpAmp,
    Pipe,
    Tilde,
    Exclamation,
    Percent,
    Caret,
    PlusEq,
    MinusEq,
    StarEq,
    CaretEq,

    // Keywords
    KwAnd = 52,
    KwAs,
    KwBreak,
    KwContinue,
    KwDo,
    KwElif,
    KwElse,
    KwFn,
    /// The type level `Fn`, distinct from the `fn` keyword
    KwUpperFn,
    KwFor,
    KwIf,
    KwImpl,
    KwImport,
    KwIn,
    KwIs,
    KwLet,
    KwLoop,
    KwMatch,
    KwNot,
    KwOr,
    KwPrim,
    KwReturn,
    KwTrait,
    KwType,
    KwValue,
    KwWhile,
    /// `row` is not reserved in Fir proper, but treating it
    /// as a keyword lets `row[` lex as two tokens so the
    /// `[` stays usable as a delimiter
    KwRow,
}

impl TokenKind
{
    /// Reserved word lookup for a scanned lowercase
    /// identifier. Anything longer than a keyword naturally
    /// mismatches, so callers may clamp their buffers.
    pub fn keyword(word: &[u8]) -> Option<Self>
    {
        let kind = match word
        {
            b"and" => Self::KwAnd,
            b"as" => Self::KwAs,
            b"break" => Self::KwBreak,
            b"continue" => Self::KwContinue,
            b"do" => Self::KwDo,
            b"elif" => Self::KwElif,
            b"else" => Self::KwElse,
            b"fn" => Self::KwFn,
            b"for" => Self::KwFor,
            b"if" => Self::KwIf,
            b"impl" => Self::KwImpl,
            b"import" => Self::KwImport,
            b"in" => Self::KwIn,
            b"is" => Self::KwIs,
            b"let" => Self::KwLet,
            b"loop" => Self::KwLoop,
            b"match" => Self::KwMatch,
            b"not" => Self::KwNot,
            b"or" => Self::KwOr,
            b"prim" => Self::KwPrim,
            b"return" => Self::KwReturn,
            b"row" => Self::KwRow,
            b"trait" => Self::KwTrait,
            b"type" => Self::KwType,
            b"value" => Self::KwValue,
            b"while" => Self::KwWhile,
            _ => return None,
        };

        Some(kind)
    }
}
