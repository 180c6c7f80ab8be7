//! Error types for the command parsing layer.
//!
//! Parsing fails in exactly two recoverable ways once a verb has been found:
//! the verb received too few (or, for strict verbs, the wrong number of)
//! arguments, or a `MODE` flag-token did not start with a sign. A line with
//! no verb at all is reported separately as [`MessageParseError::EmptyMessage`].

use std::fmt;

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Argument count a verb requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// At least this many arguments; extras are ignored.
    AtLeast(usize),
    /// Exactly this many arguments.
    Exactly(usize),
}

impl Arity {
    /// Returns true if `got` arguments satisfy this arity.
    #[inline]
    pub const fn accepts(self, got: usize) -> bool {
        match self {
            Self::AtLeast(n) => got >= n,
            Self::Exactly(n) => got == n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, "at least {}", n),
            Self::Exactly(n) => write!(f, "exactly {}", n),
        }
    }
}

/// Errors encountered when parsing a line into a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line carried no tokens, so there is no verb.
    #[error("empty message")]
    EmptyMessage,

    /// Not enough (or, for strict-arity verbs, not exactly enough) arguments.
    #[error("not enough arguments for {command}: expected {expected}, got {got}")]
    NotEnoughArguments {
        /// Upper-cased verb.
        command: &'static str,
        /// What the verb requires.
        expected: Arity,
        /// Arguments actually supplied.
        got: usize,
    },

    /// A mode flag-token was not sign-prefixed.
    #[error("malformed command: invalid mode string {string:?}")]
    MalformedCommand {
        /// The offending flag-token.
        string: String,
        /// The underlying mode error.
        #[source]
        cause: ModeParseError,
    },
}

impl MessageParseError {
    /// Get a static error code string for log and metric labels.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::NotEnoughArguments { .. } => "need_more_params",
            Self::MalformedCommand { .. } => "malformed_command",
        }
    }

    /// The verb the error belongs to, if one was identified.
    pub fn command(&self) -> Option<&'static str> {
        match self {
            Self::NotEnoughArguments { command, .. } => Some(*command),
            Self::MalformedCommand { .. } => Some("MODE"),
            Self::EmptyMessage => None,
        }
    }
}

/// Errors encountered when decoding mode flag-tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModeParseError {
    /// Invalid mode modifier character (not + or -).
    #[error("invalid mode modifier: {modifier}")]
    InvalidModeModifier {
        /// The invalid modifier character.
        modifier: char,
    },

    /// The flag-token was empty, so it had no modifier at all.
    #[error("missing mode modifier")]
    MissingModeModifier,
}
