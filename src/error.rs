use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Why a hex colour literal was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFormatError {
    #[error("contains non-hexadecimal characters")]
    InvalidCharacters,

    #[error("must have exactly 6 or 8 hex digits")]
    InvalidLength,
}

/// Main error type for tokenc operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokenc::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(tokenc::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Wrong arguments: {message}")]
    #[diagnostic(code(tokenc::arguments))]
    InputShape {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output file {path} must be a .{expected} file")]
    #[diagnostic(code(tokenc::arguments::extension))]
    OutputExtension { path: PathBuf, expected: String },

    #[error("Malformed input JSON: {message}")]
    #[diagnostic(code(tokenc::json))]
    Json { message: String },

    #[error("Couldn't find '{key}' key in {section}")]
    #[diagnostic(code(tokenc::json::missing_key))]
    MissingKey { key: String, section: String },

    #[error("Unexpected token layout: {message}")]
    #[diagnostic(code(tokenc::json::schema))]
    Schema {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid hex colour '{value}': {reason}")]
    #[diagnostic(code(tokenc::hex))]
    HexFormat {
        value: String,
        reason: HexFormatError,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid numeric value '{value}'")]
    #[diagnostic(
        code(tokenc::number),
        help("Use a plain number with an optional unit suffix, e.g. 16px or 0.5")
    )]
    NumberFormat { value: String },

    #[error("couldn't lookup token for {variable} with value {value}")]
    #[diagnostic(code(tokenc::unresolved))]
    UnresolvedReference { variable: String, value: String },

    #[error("Circular token reference: {}", Chain(.cycle))]
    #[diagnostic(
        code(tokenc::cycle),
        help("Check the core tokens for aliases that point back at themselves")
    )]
    CyclicReference { cycle: Vec<String> },

    #[error("Emission error: {message}")]
    #[diagnostic(code(tokenc::emit))]
    Emission {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TokenError {
    /// Process exit code for this error. These values are a stable contract
    /// for build tools invoking the generator.
    pub fn exit_code(&self) -> u8 {
        match self {
            TokenError::InputShape { .. } => exit::WRONG_ARGUMENTS,
            TokenError::OutputExtension { .. } => exit::WRONG_OUTPUT_EXTENSION,
            TokenError::Json { .. } | TokenError::MissingKey { .. } | TokenError::Schema { .. } => {
                exit::BAD_INPUT_JSON
            }
            _ => exit::OTHER,
        }
    }
}

/// Exit codes used by the `tokenc` binary.
pub mod exit {
    pub const WRONG_ARGUMENTS: u8 = 1;
    pub const WRONG_OUTPUT_EXTENSION: u8 = 2;
    pub const BAD_INPUT_JSON: u8 = 3;
    pub const OTHER: u8 = 4;
}

/// Displays a reference chain as `a -> b -> a`.
struct Chain<'a>(&'a [String]);

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", path)?;
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
