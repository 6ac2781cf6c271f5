/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use bitflags::bitflags;

use crate::token::TokenKind;

bitflags! {
    /// The valid symbols bitmap: the token kinds the parser
    /// will accept at the current position, one bit per
    /// token ordinal. The scanner consults this set before
    /// every emission; a byte pattern that matches a token
    /// outside the set fails the call instead.
    pub struct TokenSet: u128 {
        const START_BLOCK         = 1 << 0;
        const END_BLOCK           = 1 << 1;
        const NEWLINE             = 1 << 2;
        const UPPER_ID            = 1 << 3;
        const LOWER_ID            = 1 << 4;
        const LABEL               = 1 << 5;
        const INT_LITERAL         = 1 << 6;
        const CHAR_LITERAL        = 1 << 7;
        const BEGIN_STR           = 1 << 8;
        const END_STR             = 1 << 9;
        const STRING_CONTENT      = 1 << 10;
        const BEGIN_INTERPOLATION = 1 << 11;
        const END_INTERPOLATION   = 1 << 12;
        const BLOCK_COMMENT       = 1 << 13;
        const LINE_COMMENT        = 1 << 14;
        const LPAREN              = 1 << 15;
        const RPAREN              = 1 << 16;
        const LBRACKET            = 1 << 17;
        const RBRACKET            = 1 << 18;
        const LBRACE              = 1 << 19;
        const RBRACE              = 1 << 20;
        const BACKSLASH_LPAREN    = 1 << 21;
        const COLON               = 1 << 22;
        const COMMA               = 1 << 23;
        const DOT                 = 1 << 24;
        const DOTDOT              = 1 << 25;
        const EQ                  = 1 << 26;
        const UNDERSCORE          = 1 << 27;
        const SLASH               = 1 << 28;
        const SEMICOLON           = 1 << 29;
        const PLUS                = 1 << 30;
        const MINUS               = 1 << 31;
        const STAR                = 1 << 32;
        const EQEQ                = 1 << 33;
        const NEQ                 = 1 << 34;
        const LT                  = 1 << 35;
        const GT                  = 1 << 36;
        const LTEQ                = 1 << 37;
        const GTEQ                = 1 << 38;
        const LSHIFT              = 1 << 39;
        const RSHIFT              = 1 << 40;
        const AMP                 = 1 << 41;
        const AMPAMP              = 1 << 42;
        const PIPE                = 1 << 43;
        const TILDE               = 1 << 44;
        const EXCLAMATION         = 1 << 45;
        const PERCENT             = 1 << 46;
        const CARET               = 1 << 47;
        const PLUSEQ              = 1 << 48;
        const MINUSEQ             = 1 << 49;
        const STAREQ              = 1 << 50;
        const CARETEQ             = 1 << 51;
        const KW_AND              = 1 << 52;
        const KW_AS               = 1 << 53;
        const KW_BREAK            = 1 << 54;
        const KW_CONTINUE         = 1 << 55;
        const KW_DO               = 1 << 56;
        const KW_ELIF             = 1 << 57;
        const KW_ELSE             = 1 << 58;
        const KW_FN               = 1 << 59;
        const KW_UPPER_FN         = 1 << 60;
        const KW_FOR              = 1 << 61;
        const KW_IF               = 1 << 62;
        const KW_IMPL             = 1 << 63;
        const KW_IMPORT           = 1 << 64;
        const KW_IN               = 1 << 65;
        const KW_IS               = 1 << 66;
        const KW_LET              = 1 << 67;
        const KW_LOOP             = 1 << 68;
        const KW_MATCH            = 1 << 69;
        const KW_NOT              = 1 << 70;
        const KW_OR               = 1 << 71;
        const KW_PRIM             = 1 << 72;
        const KW_RETURN           = 1 << 73;
        const KW_TRAIT            = 1 << 74;
        const KW_TYPE             = 1 << 75;
        const KW_VALUE            = 1 << 76;
        const KW_WHILE            = 1 << 77;
        const KW_ROW              = 1 << 78;
    }
}

impl TokenSet
{
    /// Does the parser accept the given token kind here?
    pub fn allows(self, kind: TokenKind) -> bool
    {
        self.bits() & (1u128 << kind as u32) != 0
    }
}

impl From<TokenKind> for TokenSet
{
    fn from(kind: TokenKind) -> Self
    {
        Self::from_bits_truncate(1u128 << kind as u32)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ordinals_line_up()
    {
        assert!(TokenSet::START_BLOCK.allows(TokenKind::StartBlock));
        assert!(TokenSet::BACKSLASH_LPAREN.allows(TokenKind::BackslashLParen));
        assert!(TokenSet::CARETEQ.allows(TokenKind::CaretEq));
        assert!(TokenSet::KW_UPPER_FN.allows(TokenKind::KwUpperFn));
        assert!(TokenSet::KW_ROW.allows(TokenKind::KwRow));

        assert!(!TokenSet::KW_ROW.allows(TokenKind::KwWhile));
    }

    #[test]
    fn from_kind()
    {
        assert_eq!(TokenSet::from(TokenKind::Newline), TokenSet::NEWLINE);
        assert_eq!(TokenSet::from(TokenKind::KwRow), TokenSet::KW_ROW);
    }
}
