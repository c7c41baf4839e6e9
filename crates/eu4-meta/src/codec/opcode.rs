//! Opcode table.
//!
//! Maps the closed set of known opcodes to tokens. Anything else resolves to
//! a synthetic identifier named after the opcode, so the tokenizer can always
//! step over vocabulary it doesn't interpret.

use std::borrow::Cow;

use crate::limits::MAGIC_OPCODE;
use crate::model::{Control, Token};

pub const EQUALS: u16 = 0x0100;
pub const OPEN_GROUP: u16 = 0x0300;
pub const CLOSE_GROUP: u16 = 0x0400;
pub const STRING: u16 = 0x0F00;
pub const STRING_ALT: u16 = 0x1700;
pub const INTEGER: u16 = 0x0C00;
pub const INTEGER_ALT: u16 = 0x1400;
pub const BOOLEAN: u16 = 0x0E00;
pub const FLOAT: u16 = 0x0D00;
pub const WIDE_FLOAT: u16 = 0x6701;
pub const WIDE_FLOAT_ALT: u16 = 0x9001;
pub const DATE: u16 = 0x4D28;

/// Resolves an opcode to its token. Total: unknown opcodes never fail.
pub fn lookup(opcode: u16) -> Token {
    match opcode {
        EQUALS => Token::Control(Control::Equals),
        OPEN_GROUP => Token::Control(Control::OpenGroup),
        CLOSE_GROUP => Token::Control(Control::CloseGroup),
        MAGIC_OPCODE => Token::Control(Control::MagicNumber),
        STRING | STRING_ALT => Token::String,
        INTEGER | INTEGER_ALT => Token::Integer,
        BOOLEAN => Token::Boolean,
        FLOAT => Token::Float,
        WIDE_FLOAT | WIDE_FLOAT_ALT => Token::WideFloat,
        DATE => Token::id("date"),
        other => Token::Id(Cow::Owned(format!("{other:X}"))),
    }
}
