//! Payload decoding for tokens.
//!
//! Width and value are computed together by one function keyed on the token
//! variant, so they always agree on how many bytes were consumed.

use encoding_rs::WINDOWS_1252;

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::MAGIC_SIGNATURE;
use crate::model::{Control, Token, Value};

/// Bytes with no assigned character in Windows-1252.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decodes the payload of `token`, which starts at `offset` (just past the
/// token's header). Returns the value and the payload width.
pub fn decode_payload(
    token: &Token,
    buf: &[u8],
    offset: usize,
) -> Result<(Value, usize), DecodeError> {
    let mut reader = Reader::at(buf, offset);
    let value = match token {
        Token::Control(Control::MagicNumber) => decode_signature(&mut reader)?,
        Token::Control(ctl) => Value::Control(*ctl),
        Token::Id(name) => Value::Id(name.clone()),
        Token::String => decode_string(&mut reader)?,
        Token::Integer => Value::Integer(reader.read_i32_le()?),
        Token::Boolean => Value::Boolean(reader.read_byte()? != 0),
        Token::Float => Value::Float(f64::from(reader.read_i32_le()?) / 1000.0),
        Token::WideFloat => decode_wide_float(&mut reader)?,
    };
    Ok((value, reader.position() - offset))
}

/// Checks the signature that follows the magic opcode.
///
/// A mismatch within the available bytes wins over truncation, and nothing
/// past the 4 signature bytes is ever looked at.
fn decode_signature(reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
    let found = reader.peek_up_to(MAGIC_SIGNATURE.len());
    if found != &MAGIC_SIGNATURE[..found.len()] {
        return Err(DecodeError::InvalidSignature {
            found: found.to_vec(),
        });
    }
    reader.read_bytes(MAGIC_SIGNATURE.len())?;
    Ok(Value::Control(Control::MagicNumber))
}

/// string = <len: u16 LE> <len bytes of Windows-1252>
///
/// Stricter than the WHATWG mapping, which decodes the five undefined bytes
/// to C1 controls: those bytes are rejected here.
fn decode_string(reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
    let len = reader.read_u16_le()? as usize;
    let start = reader.position();
    let bytes = reader.read_bytes(len)?;

    if let Some(i) = bytes.iter().position(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(DecodeError::InvalidEncoding { offset: start + i });
    }
    WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| Value::String(s.into_owned()))
        .ok_or(DecodeError::InvalidEncoding { offset: start })
}

/// wide float = <frac: u16 LE> <whole: i16 LE> <4 reserved bytes>
///
/// Value is `(frac / 65536 + whole) * 2`.
fn decode_wide_float(reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
    let payload = reader.read_bytes(8)?;
    let frac = u16::from_le_bytes([payload[0], payload[1]]);
    let whole = i16::from_le_bytes([payload[2], payload[3]]);
    Ok(Value::WideFloat(
        (f64::from(frac) / 65536.0 + f64::from(whole)) * 2.0,
    ))
}
