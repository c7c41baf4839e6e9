//! Error types for EU4 binary metadata decoding and save archive access.

use std::io;

use thiserror::Error;

use crate::model::Token;

/// Error codes for the decode failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Magic header signature mismatch
    InvalidSignature,
    /// E002: Structural token did not match the expected sequence
    UnexpectedToken,
    /// E003: Located field is not an integer
    UnexpectedValueType,
    /// E004: Payload read past the end of the buffer
    TruncatedInput,
    /// E005: String payload not decodable under Windows-1252
    InvalidEncoding,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSignature => "E001",
            ErrorCode::UnexpectedToken => "E002",
            ErrorCode::UnexpectedValueType => "E003",
            ErrorCode::TruncatedInput => "E004",
            ErrorCode::InvalidEncoding => "E005",
        }
    }
}

/// Error during binary token decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("[E001] invalid signature: expected \"4bin\", found {found:02x?}")]
    InvalidSignature { found: Vec<u8> },

    #[error("[E002] unexpected token at {position}: expected {expected}, found {actual}")]
    UnexpectedToken {
        expected: Token,
        actual: Token,
        position: usize,
    },

    #[error("[E003] expected an integer token at {position}, found {actual}")]
    UnexpectedValueType { actual: Token, position: usize },

    #[error("[E004] truncated input at {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("[E005] string at {offset} is not valid Windows-1252")]
    InvalidEncoding { offset: usize },

    #[error("couldn't decode field payload at {position}: {source}")]
    FieldDecode {
        position: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    ///
    /// `FieldDecode` reports the code of the error it wraps.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidSignature { .. } => ErrorCode::InvalidSignature,
            DecodeError::UnexpectedToken { .. } => ErrorCode::UnexpectedToken,
            DecodeError::UnexpectedValueType { .. } => ErrorCode::UnexpectedValueType,
            DecodeError::TruncatedInput { .. } => ErrorCode::TruncatedInput,
            DecodeError::InvalidEncoding { .. } => ErrorCode::InvalidEncoding,
            DecodeError::FieldDecode { source, .. } => source.code(),
        }
    }

    /// Returns the innermost error, unwrapping any `FieldDecode` layers.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::FieldDecode { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Error while reading an entry out of a save container.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("couldn't open save container {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{entry} not found in save container")]
    NotFound { entry: &'static str },

    #[error("couldn't read {entry} from save container: {source}")]
    Read {
        entry: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Error while reading the date out of a save file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("couldn't decode save metadata: {0}")]
    Decode(#[from] DecodeError),
}
