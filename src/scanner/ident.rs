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

/// Longest identifier prefix kept for the keyword
/// comparison. Longer identifiers are still consumed in
/// full; anything past the clamp cannot be a keyword.
const KEYWORD_PREFIX: usize = 63;

/// Scan an identifier, keyword or underscore run. The
/// lookahead must be '_' or an ascii letter.
///
/// Underscores are greedy but commit early: the extent is
/// sealed after the first '_', and only grows again if a
/// letter turns the run into an identifier. A bare run of
/// underscores therefore lexes one UNDERSCORE per call.
pub(in crate::scanner) fn scan_ident<L>(lexer: &mut L, valid: TokenSet) -> Result<TokenKind>
where
    L: Lexer,
{
    let mut word = [0; KEYWORD_PREFIX];
    let mut len = 0;

    if check!(lexer => '_')
    {
        advance!(lexer);
        lexer.mark_end();
        keep(&mut word, &mut len, b'_');

        while check!(lexer => '_')
        {
            advance!(lexer);
            keep(&mut word, &mut len, b'_');
        }

        if !check!(lexer => 'a'..='z' | 'A'..='Z')
        {
            return match valid.allows(TokenKind::Underscore)
            {
                true => Ok(TokenKind::Underscore),
                false => Err(ScanError::Rejected),
            };
        }
    }

    let upper = check!(lexer => 'A'..='Z');

    while let Some(c) = lexer.lookahead()
    {
        if c != '_' && !c.is_ascii_alphanumeric()
        {
            break;
        }

        advance!(lexer);
        keep(&mut word, &mut len, c as u8);
    }

    lexer.mark_end();

    if upper
    {
        if &word[..len] == b"Fn" && valid.allows(TokenKind::KwUpperFn)
        {
            return Ok(TokenKind::KwUpperFn);
        }

        return match valid.allows(TokenKind::UpperId)
        {
            true => Ok(TokenKind::UpperId),
            false => Err(ScanError::Rejected),
        };
    }

    if let Some(keyword) = TokenKind::keyword(&word[..len])
    {
        if valid.allows(keyword)
        {
            return Ok(keyword);
        }
    }

    match valid.allows(TokenKind::LowerId)
    {
        true => Ok(TokenKind::LowerId),
        false => Err(ScanError::Rejected),
    }
}

fn keep(word: &mut [u8; KEYWORD_PREFIX], len: &mut usize, byte: u8)
{
    if *len < KEYWORD_PREFIX
    {
        word[*len] = byte;
        *len += 1;
    }
}
