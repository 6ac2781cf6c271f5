/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases for string literals and backtick delimited
//! interpolation.

use pretty_assertions::assert_eq;

use super::*;
use crate::token::TokenKind;

#[test]
fn simple()
{
    let mut s = ScanIter::new("\"hello\"\n");

    tokens!(s =>
        | BeginStr("\""),
        | StringContent("hello"),
        | EndStr("\""),
        | Newline,
        @ None
    );
}

#[test]
fn empty()
{
    let mut s = ScanIter::new("\"\"\n");

    tokens!(s =>
        | BeginStr          => "expected the string to open",
        | EndStr            => "an empty string has no content run",
        | Newline,
        @ None
    );
}

#[test]
fn interpolation()
{
    let mut s = ScanIter::new("\"hi `n` there\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("hi "),
        | BeginInterpolation("`"),
        | LowerId("n"),
        | EndInterpolation("`"),
        | StringContent(" there"),
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn interpolated_expression()
{
    let mut s = ScanIter::new("\"sum: `a + b`\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("sum: "),
        | BeginInterpolation,
        | LowerId("a"),
        | Plus,
        | LowerId("b"),
        | EndInterpolation,
        | EndStr            => "no content between the hole and the close",
        | Newline,
        @ None
    );
}

#[test]
fn nested_string_in_interpolation()
{
    let mut s = ScanIter::new("\"x `\"y\"` z\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("x "),
        | BeginInterpolation,
        | BeginStr,
        | StringContent("y"),
        | EndStr,
        | EndInterpolation,
        | StringContent(" z"),
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn escaped_quote_stays_in_the_run()
{
    let mut s = ScanIter::new("\"a\\\"b\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("a\\\"b"),
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn escaped_backtick_stays_in_the_run()
{
    let mut s = ScanIter::new("\"a\\`b\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("a\\`b"),
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn continuation_escape_splices_lines()
{
    let mut s = ScanIter::new("\"a\\\n   b\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("a\\\n   b") => "the break and indentation belong to the escape",
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn plain_newline_stays_in_the_run()
{
    // Only an escaped break is a continuation; a raw one is
    // just content
    let mut s = ScanIter::new("\"a\nb\"\n");

    tokens!(s =>
        | BeginStr,
        | StringContent("a\nb"),
        | EndStr,
        | Newline,
        @ None
    );
}

#[test]
fn escape_at_eof_fails()
{
    let mut s = ScanIter::new("\"a\\");

    tokens!(s =>
        | BeginStr,
        @ None => "an escape cannot dangle at end of input"
    );
}

#[test]
fn unterminated_string_fails()
{
    let mut s = ScanIter::new("\"ab");

    tokens!(s =>
        | BeginStr,
        | StringContent("ab") => "the run still ends at EOF",
        @ None                => "but the string never closes"
    );
}
