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

/// Scan a run of string content, stopping at the closing
/// quote, an interpolation backtick, or the end of input.
/// The run is consumed raw; unescaping belongs to whoever
/// consumes the token.
///
/// An escaped line break is a continuation: the break and
/// all whitespace after it belong to the escape, splicing
/// the string across lines.
pub(in crate::scanner) fn scan_content<L>(lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
where
    L: Lexer,
{
    if !valid.allows(TokenKind::StringContent)
    {
        return Err(ScanError::Rejected);
    }

    let mut has_content = false;

    loop
    {
        match lexer.lookahead()
        {
            None | Some('"') | Some('`') => break,
            Some('\\') =>
            {
                advance!(lexer);

                match lexer.lookahead()
                {
                    None => return Err(ScanError::EscapeAtEof),
                    Some('\n') | Some('\r') =>
                    {
                        advance!(lexer);

                        while check!(lexer => ' ' | '\t' | '\n' | '\r')
                        {
                            advance!(lexer);
                        }
                    },
                    Some(_) => advance!(lexer),
                }

                has_content = true;
            },
            Some(_) =>
            {
                advance!(lexer);
                has_content = true;
            },
        }
    }

    match has_content
    {
        true => Ok(emit!(lexer, TokenKind::StringContent)),
        false => Err(ScanError::UnexpectedEOF),
    }
}
