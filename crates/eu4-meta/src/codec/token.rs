//! Tokenizer.

use crate::codec::opcode;
use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::OPCODE_WIDTH;
use crate::model::{Control, Token};

/// Reads the token whose opcode starts at `offset`.
///
/// Returns the token and its header width. At or past the end of the buffer
/// this is `(Eof, 0)`, the natural loop terminator. A single trailing byte
/// can't hold an opcode and is reported as truncated input.
pub fn next_token(buf: &[u8], offset: usize) -> Result<(Token, usize), DecodeError> {
    let mut reader = Reader::at(buf, offset);
    if reader.is_empty() {
        return Ok((Token::Control(Control::Eof), 0));
    }
    let op = reader.read_u16_be()?;
    Ok((opcode::lookup(op), OPCODE_WIDTH))
}
