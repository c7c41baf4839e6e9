//! Field locator.
//!
//! Finds a field by matching the token stream against a fixed sequence of
//! structural tokens from offset 0. There is no lookahead, no skipping and no
//! descent into groups: the save writer always emits the date assignment
//! first, and anything else in that position is an error rather than
//! something to search past.

use tracing::{debug, trace};

use crate::codec::token::next_token;
use crate::codec::value::decode_payload;
use crate::error::DecodeError;
use crate::model::{Control, Token, Value};
use crate::util::date::{format_date, GameDate};

/// Expected prefix of a metadata blob: `EU4bin date =`.
pub const DATE_FIELD: [Token; 3] = [
    Token::Control(Control::MagicNumber),
    Token::id("date"),
    Token::Control(Control::Equals),
];

/// Matches `expected` token by token from the start of `buf`, decoding each
/// matched token's payload. Returns the cursor just past the last match.
pub fn match_prefix(buf: &[u8], expected: &[Token]) -> Result<usize, DecodeError> {
    let mut pos = 0;
    for want in expected {
        let (token, header) = next_token(buf, pos)?;
        if token != *want {
            return Err(DecodeError::UnexpectedToken {
                expected: want.clone(),
                actual: token,
                position: pos,
            });
        }
        trace!(position = pos, %token, "matched");
        pos += header;

        let (_, width) =
            decode_payload(&token, buf, pos).map_err(|e| DecodeError::FieldDecode {
                position: pos,
                source: Box::new(e),
            })?;
        pos += width;
    }
    Ok(pos)
}

/// Matches `expected`, then decodes the integer that must follow it.
pub fn find_integer_field(buf: &[u8], expected: &[Token]) -> Result<i32, DecodeError> {
    let mut pos = match_prefix(buf, expected)?;

    let (token, header) = next_token(buf, pos)?;
    if token != Token::Integer {
        return Err(DecodeError::UnexpectedValueType {
            actual: token,
            position: pos,
        });
    }
    pos += header;

    let (value, _) = decode_payload(&token, buf, pos).map_err(|e| DecodeError::FieldDecode {
        position: pos,
        source: Box::new(e),
    })?;
    let Value::Integer(value) = value else {
        unreachable!("integer token decoded to a non-integer value");
    };
    debug!(position = pos, value, "decoded integer field");
    Ok(value)
}

/// Returns the raw `date` value (hours since the game epoch) from a binary
/// metadata blob.
pub fn find_date_field(buf: &[u8]) -> Result<i32, DecodeError> {
    find_integer_field(buf, &DATE_FIELD)
}

/// Decodes the metadata date as a `YYYY_MM_DD` string.
pub fn decode_date(buf: &[u8]) -> Result<String, DecodeError> {
    find_date_field(buf).map(format_date)
}

/// Decodes the metadata date as a [`GameDate`].
pub fn decode_game_date(buf: &[u8]) -> Result<GameDate, DecodeError> {
    find_date_field(buf).map(GameDate::from_hours)
}
