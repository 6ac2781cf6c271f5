/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Hard cap on context nesting. Input nested deeper than
/// this is pathological and further pushes are dropped
/// rather than crashing.
pub(in crate::scanner) const MAX_FRAMES: usize = 128;

/// The kind of an open context on the scanner's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameKind
{
    /// An indented block; contents begin at block_col
    Indented = 0,
    /// A parenthesized group
    Paren,
    /// A bracketed group
    Bracket,
    /// A string interpolation hole
    Interpolation,
}

impl FrameKind
{
    /// Decode a serialized frame kind. Unknown bytes degrade
    /// to the sentinel kind rather than failing the restore.
    pub(in crate::scanner) fn from_u8(byte: u8) -> Self
    {
        match byte
        {
            1 => Self::Paren,
            2 => Self::Bracket,
            3 => Self::Interpolation,
            _ => Self::Indented,
        }
    }
}

/// One open context. Frames are plain values so the stack
/// serializes byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame
{
    pub kind: FrameKind,

    /// Column at which the block's contents begin, only
    /// meaningful for Indented frames
    pub block_col: u16,
}

impl Frame
{
    /// The stack's bottom frame: the top level file body
    pub(in crate::scanner) const SENTINEL: Frame = Frame {
        kind:      FrameKind::Indented,
        block_col: 0,
    };
}

/// The context stack: a flat fixed capacity array with an
/// explicit depth. Slot zero always holds the sentinel
/// frame for the file body, so depth never drops below one.
#[derive(Clone)]
pub(in crate::scanner) struct Frames
{
    stack: [Frame; MAX_FRAMES],
    depth: u8,
}

impl Frames
{
    pub fn new() -> Self
    {
        Self {
            stack: [Frame::SENTINEL; MAX_FRAMES],
            depth: 1,
        }
    }

    /// Number of live frames, always >= 1
    pub fn depth(&self) -> u8
    {
        self.depth
    }

    /// The innermost open context
    pub fn top(&self) -> Frame
    {
        self.stack[self.depth as usize - 1]
    }

    /// The live slice of the stack, bottom first
    pub fn live(&self) -> &[Frame]
    {
        &self.stack[..self.depth as usize]
    }

    /// Push a frame, dropping it silently when the stack is
    /// full
    pub fn push(&mut self, kind: FrameKind, block_col: u16)
    {
        if (self.depth as usize) < MAX_FRAMES
        {
            self.stack[self.depth as usize] = Frame { kind, block_col };
            self.depth += 1;
        }
    }

    /// Pop the top frame; the sentinel never pops
    pub fn pop(&mut self)
    {
        if self.depth > 1
        {
            self.depth -= 1;
        }
    }

    /// Length of the contiguous run of indented frames
    /// sitting on top of the nearest delimiter frame, or 0
    /// when the run reaches the stack bottom: a delimiter
    /// can only auto close blocks opened inside one.
    pub fn indented_above_delimiter(&self) -> u8
    {
        let mut count = 0;

        for at in (0..self.depth as usize).rev()
        {
            match self.stack[at].kind
            {
                FrameKind::Indented if at == 0 => return 0,
                FrameKind::Indented => count += 1,
                _ => break,
            }
        }

        count
    }

    /// Number of contiguous top indented frames opened at a
    /// column beyond .col, i.e how many blocks a dedent to
    /// .col closes
    pub fn dedent_count(&self, col: u16) -> u8
    {
        let mut count = 0;

        for at in (0..self.depth as usize).rev()
        {
            let frame = self.stack[at];

            if frame.kind != FrameKind::Indented || frame.block_col <= col
            {
                break;
            }

            count += 1;
        }

        count
    }

    /// Overwrite a slot during deserialization. Out of
    /// bounds writes are dropped, matching the push policy.
    pub fn write(&mut self, at: usize, frame: Frame)
    {
        if at < MAX_FRAMES
        {
            self.stack[at] = frame;
        }
    }

    /// Set the live depth during deserialization, clamped
    /// to the stack's invariants
    pub fn set_depth(&mut self, depth: u8)
    {
        self.depth = depth.max(1).min(MAX_FRAMES as u8);
    }
}

impl fmt::Debug for Frames
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_list().entries(self.live()).finish()
    }
}

impl PartialEq for Frames
{
    fn eq(&self, other: &Self) -> bool
    {
        // Dead slots above the depth are not state
        self.live() == other.live()
    }
}
