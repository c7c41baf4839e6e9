//! Token types for the EU4 binary stream.
//!
//! A token is what a 2-byte opcode resolves to. Structural tokens carry no
//! payload (except the magic number's signature); typed tokens announce the
//! payload that follows their header.

use std::borrow::Cow;
use std::fmt;

/// Control markers of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// End of the buffer. Never produced from an opcode.
    Eof,
    Equals,
    OpenGroup,
    CloseGroup,
    /// File header; followed by the 4-byte `4bin` signature.
    MagicNumber,
}

/// A tagged unit of the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Control(Control),
    /// Named symbol. Unknown opcodes resolve to their hex representation.
    Id(Cow<'static, str>),
    /// Length-prefixed Windows-1252 string.
    String,
    /// Little-endian i32.
    Integer,
    /// Single byte, nonzero is true.
    Boolean,
    /// Little-endian i32 scaled by 1/1000.
    Float,
    /// 8-byte fixed-point float.
    WideFloat,
}

impl Token {
    /// Creates an identifier token with a static name.
    pub const fn id(name: &'static str) -> Self {
        Token::Id(Cow::Borrowed(name))
    }

    /// Returns true for the end-of-stream marker.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Control(Control::Eof))
    }

    /// Returns true for tokens that announce a typed payload.
    pub fn is_typed_value(&self) -> bool {
        matches!(
            self,
            Token::String | Token::Integer | Token::Boolean | Token::Float | Token::WideFloat
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Control(Control::Eof) => f.write_str("end of stream"),
            Token::Control(Control::Equals) => f.write_str("'='"),
            Token::Control(Control::OpenGroup) => f.write_str("'{'"),
            Token::Control(Control::CloseGroup) => f.write_str("'}'"),
            Token::Control(Control::MagicNumber) => f.write_str("magic number"),
            Token::Id(name) => write!(f, "identifier {name:?}"),
            Token::String => f.write_str("string"),
            Token::Integer => f.write_str("integer"),
            Token::Boolean => f.write_str("boolean"),
            Token::Float => f.write_str("float"),
            Token::WideFloat => f.write_str("wide float"),
        }
    }
}
