/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Byte serialization of the scanner state, so the host can
//! snapshot it at a token boundary and restore it while
//! re-parsing. The format is a compatibility contract:
//!
//! ```text
//! byte 0:  depth
//! byte 1:  pending_end_blocks
//! byte 2:  in_string (0/1)
//! byte 3:  eof_newline_emitted (0/1)
//! byte 4+: depth x { kind, block_col as u16 LE }
//! ```

use crate::scanner::{
    frame::{Frame, FrameKind, MAX_FRAMES},
    Scanner,
};

const HEADER: usize = 4;
const FRAME_BYTES: usize = 3;

impl Scanner
{
    /// Largest serialization any state can produce
    pub const MAX_SERIALIZED: usize = HEADER + MAX_FRAMES * FRAME_BYTES;

    /// Write the state into .buf, returning the number of
    /// bytes written. A buffer too small for the header
    /// takes nothing; frames that do not fit are dropped,
    /// which deserialize tolerates.
    pub fn serialize(&self, buf: &mut [u8]) -> usize
    {
        if buf.len() < HEADER
        {
            return 0;
        }

        buf[0] = self.frames.depth();
        buf[1] = self.pending_end_blocks;
        buf[2] = self.in_string as u8;
        buf[3] = self.eof_newline_emitted as u8;

        let mut at = HEADER;

        for frame in self.frames.live()
        {
            if at + FRAME_BYTES > buf.len()
            {
                break;
            }

            let col = frame.block_col.to_le_bytes();

            buf[at] = frame.kind as u8;
            buf[at + 1] = col[0];
            buf[at + 2] = col[1];

            at += FRAME_BYTES;
        }

        at
    }

    /// Restore a state previously produced by serialize. An
    /// empty .buf resets to the initial state. Truncated
    /// frame data leaves sentinel frames in the unread
    /// slots; the declared depth is clamped to the stack's
    /// invariants.
    pub fn deserialize(&mut self, buf: &[u8])
    {
        self.reset();

        if buf.is_empty()
        {
            return;
        }

        let depth = buf[0];

        self.pending_end_blocks = buf.get(1).copied().unwrap_or(0);
        self.in_string = buf.get(2).copied().unwrap_or(0) != 0;
        self.eof_newline_emitted = buf.get(3).copied().unwrap_or(0) != 0;

        for at in 0..depth as usize
        {
            let from = HEADER + at * FRAME_BYTES;

            match buf.get(from..from + FRAME_BYTES)
            {
                Some(bytes) => self.frames.write(at, Frame {
                    kind:      FrameKind::from_u8(bytes[0]),
                    block_col: u16::from_le_bytes([bytes[1], bytes[2]]),
                }),
                None => break,
            }
        }

        self.frames.set_depth(depth);
    }

    /// Back to the freshly created state
    pub fn reset(&mut self)
    {
        *self = Self::new();
    }
}
