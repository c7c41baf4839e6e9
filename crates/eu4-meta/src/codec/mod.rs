//! Binary token decoding for EU4 save metadata.
//!
//! Opcode table → tokenizer → payload decoder → field locator.

pub mod locate;
pub mod opcode;
pub mod primitives;
pub mod scan;
pub mod token;
pub mod value;

pub use locate::{
    decode_date, decode_game_date, find_date_field, find_integer_field, match_prefix, DATE_FIELD,
};
pub use primitives::Reader;
pub use scan::{scan, ScannedToken, Scanner};
pub use token::next_token;
pub use value::decode_payload;
