//! Flat token scanning.
//!
//! Walks an entire buffer token by token, decoding each payload only far
//! enough to know its value and width. No tree is built; groups are reported
//! as their open/close markers.

use crate::codec::token::next_token;
use crate::codec::value::decode_payload;
use crate::error::DecodeError;
use crate::model::{Token, Value};

/// A token together with its decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedToken {
    /// Offset of the token's opcode.
    pub position: usize,
    pub token: Token,
    pub value: Value,
    /// Header plus payload width.
    pub width: usize,
}

/// Iterator over the tokens of a buffer.
///
/// Yields every token up to and including the end-of-stream marker, or up to
/// the first error. It is fused: after either, it returns `None`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
    done: bool,
}

/// Scans `buf` from the start.
pub fn scan(buf: &[u8]) -> Scanner<'_> {
    Scanner {
        buf,
        pos: 0,
        done: false,
    }
}

impl Scanner<'_> {
    /// Offset of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn step(&mut self) -> Result<ScannedToken, DecodeError> {
        let position = self.pos;
        let (token, header) = next_token(self.buf, position)?;
        let (value, payload) = decode_payload(&token, self.buf, position + header)?;
        let width = header + payload;
        self.pos += width;
        Ok(ScannedToken {
            position,
            token,
            value,
            width,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<ScannedToken, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.step();
        match &item {
            Ok(scanned) if !scanned.token.is_eof() => {}
            _ => self.done = true,
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
