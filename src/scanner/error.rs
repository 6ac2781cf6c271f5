/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Reasons a scan call can fail. The host never sees these;
/// every one of them collapses to "no token here" at the
/// public boundary, and the cursor is left uncommitted.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanError
{
    /// The bytes matched a token the parser will not accept
    /// at this position
    Rejected,

    /// A char literal without its closing quote
    UnterminatedChar,

    /// A '\' that was not followed by a '('
    StrayBackslash,

    /// A string or char escape '\' at the end of input
    EscapeAtEof,

    /// 0x or 0b with no digit or underscore following
    EmptyIntPrefix,

    /// Found a character that cannot start a valid token
    UnknownDelimiter,

    /// Got end of stream while a token was required
    UnexpectedEOF,
}

impl fmt::Display for ScanError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        // Delegate to debug for the moment
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for ScanError {}
