/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The scanner proper: a single re-entrant state machine
//! the host parser calls once per token request. Each call
//! works through four phases:
//!
//! 1. Drain one queued dedent, if the parser will take it
//! 2. String mode: content runs, close quotes, interpolation
//! 3. Layout: whitespace, block opening, dedents, newlines
//! 4. A concrete token, dispatched on the lookahead
//!
//! Every emission is gated on the valid token set the
//! parser supplies; whatever cannot be emitted here fails
//! the call without committing any input.

// Note that this module must come before all others, as
// they depend on the macros which expand into this scope
#[macro_use]
mod macros;

pub mod error;
pub mod flag;
pub mod frame;

mod comment;
mod ident;
mod literal;
mod state;
mod string;

use crate::{
    lexer::Lexer,
    scanner::{
        error::{ScanError, ScanResult as Result},
        flag::TokenSet,
        frame::{FrameKind, Frames},
    },
    token::TokenKind,
};

/// The scanner's entire state between calls. Everything
/// here round-trips through serialize / deserialize, and
/// nothing allocates past construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanner
{
    /// Open contexts, innermost on top
    frames: Frames,

    /// Dedents queued for emission on later calls
    pending_end_blocks: u8,

    /// Between an opening '"' and its matching close
    in_string: bool,

    /// The synthetic end of file newline went out already
    eof_newline_emitted: bool,
}

impl Scanner
{
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self
    {
        Self {
            frames:              Frames::new(),
            pending_end_blocks:  0,
            in_string:           false,
            eof_newline_emitted: false,
        }
    }

    /// Attempt to scan one token through .lexer, emitting
    /// only kinds present in .valid. None means no external
    /// token starts here: the cursor is left uncommitted
    /// and the host falls back to its own rules.
    pub fn scan<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Option<TokenKind>
    where
        L: Lexer,
    {
        self.scan_next(lexer, valid).ok()
    }

    fn scan_next<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        // Queued dedents go out first, one per call
        if self.pending_end_blocks > 0 && valid.allows(TokenKind::EndBlock)
        {
            self.pending_end_blocks -= 1;
            self.frames.pop();

            return Ok(emit!(lexer, TokenKind::EndBlock));
        }

        if self.in_string
        {
            return self.scan_string_mode(lexer, valid);
        }

        if let Some(token) = self.scan_layout(lexer, valid)?
        {
            return Ok(token);
        }

        self.scan_token(lexer, valid)
    }

    /// Inside a string literal only three things can
    /// happen: a content run, the closing quote, or a
    /// backtick opening an interpolation hole.
    fn scan_string_mode<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        match lexer.lookahead()
        {
            Some(DOUBLE) =>
            {
                if !valid.allows(TokenKind::EndStr)
                {
                    return Err(ScanError::Rejected);
                }

                advance!(lexer);
                self.in_string = false;

                Ok(emit!(lexer, TokenKind::EndStr))
            },
            Some(BACKTICK) =>
            {
                if !valid.allows(TokenKind::BeginInterpolation)
                {
                    return Err(ScanError::Rejected);
                }

                advance!(lexer);
                self.in_string = false;
                self.frames.push(FrameKind::Interpolation, 0);

                Ok(emit!(lexer, TokenKind::BeginInterpolation))
            },
            Some(_) => string::scan_content(lexer, valid),
            None => Err(ScanError::UnexpectedEOF),
        }
    }

    /// Phase three: eat whitespace and decide whether the
    /// layout owes the parser a token before any content.
    /// Ok(None) falls through to concrete token scanning.
    fn scan_layout<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<Option<TokenKind>>
    where
        L: Lexer,
    {
        match self.frames.top().kind
        {
            FrameKind::Indented => self.scan_block_layout(lexer, valid),
            _ => self.scan_delimited_layout(lexer, valid),
        }
    }

    /// Layout inside parens, brackets and interpolation
    /// holes, where indentation means nothing. Newlines are
    /// emitted only on request and otherwise skipped.
    fn scan_delimited_layout<L>(&mut self, lexer: &mut L, valid: TokenSet)
        -> Result<Option<TokenKind>>
    where
        L: Lexer,
    {
        while isBlank!(lexer)
        {
            advance!(lexer, skip);
        }

        if valid.allows(TokenKind::Newline) && isBreak!(lexer)
        {
            while isBreak!(lexer) || isBlank!(lexer)
            {
                advance!(lexer);
            }

            return Ok(Some(emit!(lexer, TokenKind::Newline)));
        }

        while isBlank!(lexer) || isBreak!(lexer)
        {
            advance!(lexer, skip);
        }

        if valid.allows(TokenKind::StartBlock) && !check!(lexer => COMMENT)
        {
            let col = lexer.column() as u16;

            self.frames.push(FrameKind::Indented, col);

            return Ok(Some(emit!(lexer, TokenKind::StartBlock)));
        }

        Ok(None)
    }

    /// Layout inside an indented block: this is where
    /// indentation becomes tokens.
    fn scan_block_layout<L>(&mut self, lexer: &mut L, valid: TokenSet)
        -> Result<Option<TokenKind>>
    where
        L: Lexer,
    {
        let mut at_newline = false;

        while isBlank!(lexer)
        {
            advance!(lexer, skip);
        }

        while isBreak!(lexer)
        {
            at_newline = true;
            advance!(lexer, skip);

            while isBlank!(lexer)
            {
                advance!(lexer, skip);
            }
        }

        if lexer.eof()
        {
            // A trailing line break still dedents whatever
            // is open before the synthetic newline goes out
            if at_newline
            {
                let count = self.frames.dedent_count(0);

                if count > 0
                {
                    if valid.allows(TokenKind::Newline)
                    {
                        self.queue_dedents(count);

                        return Ok(Some(emit!(lexer, TokenKind::Newline)));
                    }

                    if valid.allows(TokenKind::EndBlock) && self.frames.depth() > 1
                    {
                        self.queue_dedents(count - 1);
                        self.frames.pop();

                        return Ok(Some(emit!(lexer, TokenKind::EndBlock)));
                    }
                }
            }

            return self.scan_eof(lexer, valid).map(Some);
        }

        // Block opening. A '#' defers this: the comment is
        // an extra the parser wants first, and it will ask
        // for the block again on the next call.
        if valid.allows(TokenKind::StartBlock) && !check!(lexer => COMMENT)
        {
            let col = lexer.column() as u16;

            self.frames.push(FrameKind::Indented, col);

            return Ok(Some(emit!(lexer, TokenKind::StartBlock)));
        }

        // A closing delimiter or comma auto closes any
        // blocks opened since the delimiter frame beneath
        // them, so one liners inside argument lists
        // terminate cleanly
        if check!(lexer => ')' | ']' | ',' | '}')
        {
            let count = self.frames.indented_above_delimiter();

            if count > 0
            {
                if valid.allows(TokenKind::Newline)
                {
                    self.queue_dedents(count);

                    return Ok(Some(emit!(lexer, TokenKind::Newline)));
                }

                if valid.allows(TokenKind::EndBlock) && self.frames.depth() > 1
                {
                    self.queue_dedents(count - 1);
                    self.frames.pop();

                    return Ok(Some(emit!(lexer, TokenKind::EndBlock)));
                }
            }
        }

        if at_newline
        {
            let col = lexer.column() as u16;
            let frame_col = self.frames.top().block_col;

            if col < frame_col
            {
                let count = self.frames.dedent_count(col);

                if valid.allows(TokenKind::Newline)
                {
                    self.queue_dedents(count);

                    return Ok(Some(emit!(lexer, TokenKind::Newline)));
                }

                if valid.allows(TokenKind::EndBlock) && self.frames.depth() > 1
                {
                    self.queue_dedents(count - 1);
                    self.frames.pop();

                    return Ok(Some(emit!(lexer, TokenKind::EndBlock)));
                }
            }
            else if col == frame_col && valid.allows(TokenKind::Newline)
            {
                return Ok(Some(emit!(lexer, TokenKind::Newline)));
            }

            // col > frame_col is a continuation line: the
            // layout stays silent and the expression goes on
        }

        Ok(None)
    }

    /// The end of input owes the parser one synthetic
    /// newline, then one dedent per still open block.
    fn scan_eof<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if valid.allows(TokenKind::Newline) && !self.eof_newline_emitted
        {
            self.eof_newline_emitted = true;

            return Ok(emit!(lexer, TokenKind::Newline));
        }

        if valid.allows(TokenKind::EndBlock)
            && self.frames.top().kind == FrameKind::Indented
            && self.frames.depth() > 1
        {
            self.frames.pop();

            return Ok(emit!(lexer, TokenKind::EndBlock));
        }

        Err(ScanError::UnexpectedEOF)
    }

    /// Phase four: dispatch on the first character of the
    /// next token
    fn scan_token<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if lexer.eof()
        {
            return self.scan_eof(lexer, valid);
        }

        match lexer.lookahead()
        {
            Some(COMMENT) => comment::scan_comment(lexer, valid),
            Some(DOUBLE) => self.begin_string(lexer, valid),
            Some(BACKTICK) => self.end_interpolation(lexer, valid),
            Some(BACKSLASH) => self.lambda_open(lexer, valid),
            Some(SINGLE) => literal::scan_quote(lexer, valid),

            Some('(') => self.open_delimiter(lexer, valid, FrameKind::Paren, TokenKind::LParen),
            Some(')') => self.close_delimiter(lexer, valid, FrameKind::Paren, TokenKind::RParen),
            Some('[') =>
            {
                self.open_delimiter(lexer, valid, FrameKind::Bracket, TokenKind::LBracket)
            },
            Some(']') =>
            {
                self.close_delimiter(lexer, valid, FrameKind::Bracket, TokenKind::RBracket)
            },
            // Braces delimit an explicit block, so they get
            // an indented frame anchored at column zero
            Some('{') =>
            {
                self.open_delimiter(lexer, valid, FrameKind::Indented, TokenKind::LBrace)
            },
            Some('}') =>
            {
                self.close_delimiter(lexer, valid, FrameKind::Indented, TokenKind::RBrace)
            },

            Some('_') => ident::scan_ident(lexer, valid),
            Some(c) if c.is_ascii_alphabetic() => ident::scan_ident(lexer, valid),
            Some(c) if c.is_ascii_digit() => literal::scan_integer(lexer, valid),

            Some('=') => scan_operator(lexer, valid, &[('=', TokenKind::EqEq)], TokenKind::Eq),
            Some('!') =>
            {
                scan_operator(lexer, valid, &[('=', TokenKind::Neq)], TokenKind::Exclamation)
            },
            Some('<') => scan_operator(
                lexer,
                valid,
                &[('<', TokenKind::Lshift), ('=', TokenKind::LtEq)],
                TokenKind::Lt,
            ),
            Some('>') => scan_operator(
                lexer,
                valid,
                &[('>', TokenKind::Rshift), ('=', TokenKind::GtEq)],
                TokenKind::Gt,
            ),
            Some('+') => scan_operator(lexer, valid, &[('=', TokenKind::PlusEq)], TokenKind::Plus),
            Some('-') =>
            {
                scan_operator(lexer, valid, &[('=', TokenKind::MinusEq)], TokenKind::Minus)
            },
            Some('*') => scan_operator(lexer, valid, &[('=', TokenKind::StarEq)], TokenKind::Star),
            Some('^') =>
            {
                scan_operator(lexer, valid, &[('=', TokenKind::CaretEq)], TokenKind::Caret)
            },
            Some('&') => scan_operator(lexer, valid, &[('&', TokenKind::AmpAmp)], TokenKind::Amp),
            Some('.') => scan_operator(lexer, valid, &[('.', TokenKind::DotDot)], TokenKind::Dot),

            Some('|') => scan_single(lexer, valid, TokenKind::Pipe),
            Some('~') => scan_single(lexer, valid, TokenKind::Tilde),
            Some('/') => scan_single(lexer, valid, TokenKind::Slash),
            Some('%') => scan_single(lexer, valid, TokenKind::Percent),
            Some(':') => scan_single(lexer, valid, TokenKind::Colon),
            Some(',') => scan_single(lexer, valid, TokenKind::Comma),
            Some(';') => scan_single(lexer, valid, TokenKind::Semicolon),

            _ => Err(ScanError::UnknownDelimiter),
        }
    }

    fn begin_string<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if !valid.allows(TokenKind::BeginStr)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);
        self.in_string = true;

        Ok(emit!(lexer, TokenKind::BeginStr))
    }

    /// A backtick outside string mode closes the innermost
    /// interpolation hole and drops back into the string
    fn end_interpolation<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if !valid.allows(TokenKind::EndInterpolation)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);

        if self.frames.top().kind == FrameKind::Interpolation
        {
            self.frames.pop();
        }

        self.in_string = true;

        Ok(emit!(lexer, TokenKind::EndInterpolation))
    }

    fn lambda_open<L>(&mut self, lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
    where
        L: Lexer,
    {
        // The backslash
        advance!(lexer);

        if !check!(lexer => '(')
        {
            return Err(ScanError::StrayBackslash);
        }

        if !valid.allows(TokenKind::BackslashLParen)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);
        self.frames.push(FrameKind::Paren, 0);

        Ok(emit!(lexer, TokenKind::BackslashLParen))
    }

    fn open_delimiter<L>(
        &mut self,
        lexer: &mut L,
        valid: TokenSet,
        kind: FrameKind,
        token: TokenKind,
    ) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if !valid.allows(token)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);
        self.frames.push(kind, 0);

        Ok(emit!(lexer, token))
    }

    fn close_delimiter<L>(
        &mut self,
        lexer: &mut L,
        valid: TokenSet,
        kind: FrameKind,
        token: TokenKind,
    ) -> Result<TokenKind>
    where
        L: Lexer,
    {
        if !valid.allows(token)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);

        if self.frames.top().kind == kind
        {
            self.frames.pop();
        }

        Ok(emit!(lexer, token))
    }

    fn queue_dedents(&mut self, count: u8)
    {
        self.pending_end_blocks = self.pending_end_blocks.saturating_add(count);
    }
}

/// Scan a one or two character operator. The longer form
/// wins only when its second character matches and the
/// parser accepts it; otherwise the single falls out.
fn scan_operator<L>(
    lexer: &mut L,
    valid: TokenSet,
    longer: &[(char, TokenKind)],
    single: TokenKind,
) -> Result<TokenKind>
where
    L: Lexer,
{
    advance!(lexer);

    for &(second, token) in longer
    {
        if lexer.lookahead() == Some(second) && valid.allows(token)
        {
            advance!(lexer);

            return Ok(emit!(lexer, token));
        }
    }

    match valid.allows(single)
    {
        true => Ok(emit!(lexer, single)),
        false => Err(ScanError::Rejected),
    }
}

fn scan_single<L>(lexer: &mut L, valid: TokenSet, token: TokenKind) -> Result<TokenKind>
where
    L: Lexer,
{
    if !valid.allows(token)
    {
        return Err(ScanError::Rejected);
    }

    advance!(lexer);

    Ok(emit!(lexer, token))
}

const COMMENT: char = '#';
const DOUBLE: char = '"';
const BACKTICK: char = '`';
const BACKSLASH: char = '\\';
const SINGLE: char = '\'';
