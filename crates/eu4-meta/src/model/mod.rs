//! Data model types for the EU4 binary token stream.
//!
//! - Tokens (opcode-resolved stream units)
//! - Values (decoded token payloads)

pub mod token;
pub mod value;

pub use token::{Control, Token};
pub use value::Value;
