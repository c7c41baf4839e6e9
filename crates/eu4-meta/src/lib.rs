//! EU4 save metadata: reads the in-game date out of a binary save.
//!
//! Ironman and compressed saves are zip containers whose `meta` entry holds a
//! small tokenized binary blob (`EU4bin`). This crate walks that blob as a
//! stream of 2-byte opcodes, checks the magic header, locates the leading
//! `date = <integer>` assignment and turns the integer into a calendar date.
//!
//! # Quick Start
//!
//! ```rust
//! use eu4_meta::{decode_date, find_date_field, format_date};
//!
//! let hours: i32 = ((1444 + 5000) * 365 + 314) * 24;
//! let mut meta = vec![0x45, 0x55, b'4', b'b', b'i', b'n', 0x4D, 0x28, 0x01, 0x00, 0x0C, 0x00];
//! meta.extend_from_slice(&hours.to_le_bytes());
//!
//! assert_eq!(find_date_field(&meta).unwrap(), hours);
//! assert_eq!(format_date(hours), "1444_11_11");
//! assert_eq!(decode_date(&meta).unwrap(), "1444_11_11");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Token and value types
//! - [`codec`]: Opcode table, tokenizer, payload decoder, field locator, scanner
//! - [`util`]: Game calendar conversion
//! - [`archive`]: Reading entries out of a save container
//! - [`error`]: Error types
//! - [`limits`]: Wire constants
//!
//! # Wire Format
//!
//! - Opcodes: 2 bytes, big-endian
//! - Magic: opcode `0x4555` followed by the literal `4bin`
//! - Payloads: little-endian integers, fixed-point floats, Windows-1252 strings
//!
//! # Security
//!
//! Every read is bounds checked. Truncated or corrupt input, such as a save
//! that is still being written, yields a [`DecodeError`] and never panics.

pub mod archive;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use archive::{extract_entry, read_meta, read_save_date, SaveEntry};
pub use codec::{decode_date, decode_game_date, find_date_field, next_token, scan};
pub use error::{ArchiveError, DecodeError, ErrorCode, SaveError};
pub use model::{Control, Token, Value};
pub use util::{format_date, GameDate};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
