/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library implements the context sensitive half of a
//! Fir lexer: the part a regular token grammar cannot
//! express.
//!
//! Fir uses significant whitespace, so the scanner keeps a
//! stack of open contexts -- indented blocks, parenthesized
//! and bracketed groups, string interpolation holes -- and
//! reconciles the indentation of each new line against that
//! stack, emitting synthetic block and newline tokens where
//! the layout demands them. The driving parser supplies the
//! set of token kinds it will accept on every call, and the
//! scanner never emits outside that set.
//!
//! The entire scanner state serializes to a small byte
//! buffer, allowing the host to snapshot and restore it at
//! any token boundary during incremental re-parsing.

#![allow(clippy::suspicious_else_formatting)]

pub mod lexer;
pub mod scanner;
pub mod token;
