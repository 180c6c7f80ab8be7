//! Unified error handling for ircd-core.
//!
//! Per-line errors with their metric labels and client-visible replies.

use ircd_proto::{MessageParseError, Reply};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::helpers::{err_inputtoolong, err_needmoreparams, err_umodeunknownflag};

// ============================================================================
// Handler Errors (line processing)
// ============================================================================

/// Errors that can occur while processing one line.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("parse error: {0}")]
    Parse(#[from] MessageParseError),

    #[error("line too long: {actual} bytes (limit {limit})")]
    LineTooLong { actual: usize, limit: usize },

    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<Reply>),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::LineTooLong { .. } => "line_too_long",
            Self::Send(_) => "send_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convert to an error reply for the client.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply
    /// (empty lines, send failures, internal errors).
    pub fn to_reply(&self, server_name: &str, nick: &str, verb: &str) -> Option<Reply> {
        match self {
            Self::Parse(MessageParseError::NotEnoughArguments { command, .. }) => {
                Some(err_needmoreparams(server_name, nick, *command))
            }
            Self::Parse(MessageParseError::MalformedCommand { .. }) => {
                Some(err_umodeunknownflag(server_name, nick))
            }
            Self::Parse(_) => None,
            Self::LineTooLong { .. } => Some(err_inputtoolong(server_name, nick, verb)),
            Self::Send(_) | Self::Internal(_) => None,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ircd_proto::{Arity, ModeParseError, Response};

    fn need_more_params() -> HandlerError {
        HandlerError::Parse(MessageParseError::NotEnoughArguments {
            command: "JOIN",
            expected: Arity::AtLeast(1),
            got: 0,
        })
    }

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(need_more_params().error_code(), "need_more_params");
        assert_eq!(
            HandlerError::LineTooLong { actual: 600, limit: 512 }.error_code(),
            "line_too_long"
        );
        assert_eq!(HandlerError::Internal("test".into()).error_code(), "internal_error");
    }

    #[test]
    fn test_need_more_params_reply_names_the_verb() {
        let reply = need_more_params()
            .to_reply("irc.example.net", "alice", "ignored")
            .unwrap();
        assert_eq!(reply.response_code(), Some(Response::ERR_NEEDMOREPARAMS.code()));
        assert_eq!(reply.params, ["alice", "JOIN", "Not enough parameters"]);
    }

    #[test]
    fn test_malformed_mode_reply() {
        let err = HandlerError::Parse(MessageParseError::MalformedCommand {
            string: "xo".into(),
            cause: ModeParseError::InvalidModeModifier { modifier: 'x' },
        });
        let reply = err.to_reply("irc.example.net", "*", "MODE").unwrap();
        assert_eq!(reply.response_code(), Some(501));
    }

    #[test]
    fn test_silent_errors() {
        let err = HandlerError::from(MessageParseError::EmptyMessage);
        assert!(err.to_reply("s", "n", "").is_none());
        assert!(HandlerError::Internal("oops".into()).to_reply("s", "n", "JOIN").is_none());
    }
}
