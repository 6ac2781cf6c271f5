/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{
    lexer::Lexer,
    scanner::{
        error::{ScanError, ScanResult as Result},
        flag::TokenSet,
    },
    token::TokenKind,
};

/// Scan an integer literal: decimal, 0x hex or 0b binary,
/// with underscore separators allowed anywhere past the
/// first digit. A prefix with nothing after it fails.
/// Negation is the parser's business, not the literal's.
pub(in crate::scanner) fn scan_integer<L>(lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
where
    L: Lexer,
{
    if !valid.allows(TokenKind::IntLiteral)
    {
        return Err(ScanError::Rejected);
    }

    if check!(lexer => '0')
    {
        advance!(lexer);

        if check!(lexer => 'x')
        {
            advance!(lexer);

            if !check!(lexer => '0'..='9' | 'a'..='f' | 'A'..='F' | '_')
            {
                return Err(ScanError::EmptyIntPrefix);
            }

            while check!(lexer => '0'..='9' | 'a'..='f' | 'A'..='F' | '_')
            {
                advance!(lexer);
            }
        }
        else if check!(lexer => 'b')
        {
            advance!(lexer);

            if !check!(lexer => '0' | '1' | '_')
            {
                return Err(ScanError::EmptyIntPrefix);
            }

            while check!(lexer => '0' | '1' | '_')
            {
                advance!(lexer);
            }
        }
        else
        {
            while check!(lexer => '0'..='9' | '_')
            {
                advance!(lexer);
            }
        }
    }
    else
    {
        advance!(lexer);

        while check!(lexer => '0'..='9' | '_')
        {
            advance!(lexer);
        }
    }

    Ok(emit!(lexer, TokenKind::IntLiteral))
}

/// Scan past an opening single quote, resolving the label /
/// char literal ambiguity. The rule: a one byte identifier
/// body with a closing quote is a char literal, any other
/// lowercase body is a label. A label followed by a quote
/// keeps that quote in its extent.
pub(in crate::scanner) fn scan_quote<L>(lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
where
    L: Lexer,
{
    // Opening '
    advance!(lexer);

    if check!(lexer => 'a'..='z') && valid.allows(TokenKind::Label)
    {
        let mut len = 0;

        while check!(lexer => 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
        {
            advance!(lexer);
            len += 1;
        }

        if check!(lexer => '\'')
        {
            if len == 1 && valid.allows(TokenKind::CharLiteral)
            {
                advance!(lexer);

                return Ok(emit!(lexer, TokenKind::CharLiteral));
            }

            // The closing quote of a delimited label
            advance!(lexer);
        }

        return Ok(emit!(lexer, TokenKind::Label));
    }

    if !valid.allows(TokenKind::CharLiteral)
    {
        return Err(ScanError::Rejected);
    }

    match lexer.lookahead()
    {
        Some('\\') =>
        {
            advance!(lexer);

            // The escaped byte is consumed uninterpreted
            match lexer.lookahead()
            {
                Some(_) => advance!(lexer),
                None => return Err(ScanError::EscapeAtEof),
            }
        },
        Some('\'') | Some('\0') | None => return Err(ScanError::UnterminatedChar),
        Some(_) => advance!(lexer),
    }

    match check!(lexer => '\'')
    {
        true =>
        {
            advance!(lexer);

            Ok(emit!(lexer, TokenKind::CharLiteral))
        },
        false => Err(ScanError::UnterminatedChar),
    }
}
