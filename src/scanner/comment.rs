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

/// Scan a comment. '#|' opens a block comment that nests
/// and runs to its matching '|#'; any other '#' opens a
/// line comment running to the end of the line, exclusive
/// of the break itself.
///
/// The lookahead must be the '#'.
pub(in crate::scanner) fn scan_comment<L>(lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
where
    L: Lexer,
{
    advance!(lexer);

    if check!(lexer => '|')
    {
        if !valid.allows(TokenKind::BlockComment)
        {
            return Err(ScanError::Rejected);
        }

        advance!(lexer);

        let mut depth = 1u32;

        while depth > 0
        {
            match lexer.lookahead()
            {
                // Unterminated; emit what we have and let
                // the parser complain about what follows
                None => break,
                Some('#') =>
                {
                    advance!(lexer);

                    if check!(lexer => '|')
                    {
                        advance!(lexer);
                        depth += 1;
                    }
                },
                Some('|') =>
                {
                    advance!(lexer);

                    if check!(lexer => '#')
                    {
                        advance!(lexer);
                        depth -= 1;
                    }
                },
                Some(_) => advance!(lexer),
            }
        }

        return Ok(emit!(lexer, TokenKind::BlockComment));
    }

    if !valid.allows(TokenKind::LineComment)
    {
        return Err(ScanError::Rejected);
    }

    while !lexer.eof() && !isBreak!(lexer)
    {
        advance!(lexer);
    }

    Ok(emit!(lexer, TokenKind::LineComment))
}
