//! Wire constants for the EU4 binary metadata format.

/// Opcode of the magic-number token (`EU` as big-endian bytes).
pub const MAGIC_OPCODE: u16 = 0x4555;

/// Literal signature following the magic opcode (`4bin`).
pub const MAGIC_SIGNATURE: &[u8; 4] = b"4bin";

/// Width of every token header.
pub const OPCODE_WIDTH: usize = 2;

/// Inner container entry holding the binary metadata.
pub const META_ENTRY: &str = "meta";

/// Inner container entry holding the full game state.
pub const GAMESTATE_ENTRY: &str = "gamestate";

/// Inner container entry holding AI state.
pub const AI_ENTRY: &str = "ai";

/// Year subtracted from the raw epoch year.
pub const EPOCH_YEAR_OFFSET: i32 = 5000;

pub const HOURS_PER_DAY: i32 = 24;

/// Game calendar year length. There are no leap years.
pub const DAYS_PER_YEAR: i32 = 365;

/// Month lengths of the game calendar, January first.
pub const MONTH_DAYS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
