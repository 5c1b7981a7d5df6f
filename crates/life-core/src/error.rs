//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed pattern: line {line} has {found} cells, expected {expected}")]
    MalformedPattern {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed pattern: no rows")]
    EmptyPattern,

    #[error("Unrecognized glyph {glyph:?} at line {line}, column {column}")]
    UnrecognizedGlyph {
        glyph: char,
        line: usize,
        column: usize,
    },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid glyphs: {0}")]
    InvalidGlyphs(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures raised while decoding a glyph pattern.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedPattern { .. } | Error::EmptyPattern | Error::UnrecognizedGlyph { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
