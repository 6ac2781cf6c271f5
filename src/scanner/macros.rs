/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the various macros used by
//! lib/scanner. They all operate through the host's Lexer
//! handle, which owns the cursor.

/// Check the lookahead against a character pattern,
/// evaluating to a bool. EOF never matches.
///
/// Variants
///     /1 .lexer => .pattern [| .pattern ..]
macro_rules! check {
    ($lexer:expr => $( $match:pat )|+) => {
        matches!($lexer.lookahead(), Some($( $match )|+))
    };
}

/// Consume the lookahead.
///
/// Variants
///     /1 .lexer       := consume, keep in the extent
///     /2 .lexer, skip := consume, drop from the extent
macro_rules! advance {
    ($lexer:expr) => {
        $lexer.advance(false)
    };
    ($lexer:expr, skip) => {
        $lexer.advance(true)
    };
}

/// Seal the current token at the lexer's position,
/// evaluating to the given token kind
macro_rules! emit {
    ($lexer:expr, $kind:expr) => {{
        $lexer.mark_end();

        $kind
    }};
}

/// Is the lookahead a space or tab?
macro_rules! isBlank {
    ($lexer:expr) => {
        matches!($lexer.lookahead(), Some(' ') | Some('\t'))
    };
}

/// Is the lookahead a line break?
macro_rules! isBreak {
    ($lexer:expr) => {
        matches!($lexer.lookahead(), Some('\n') | Some('\r'))
    };
}
