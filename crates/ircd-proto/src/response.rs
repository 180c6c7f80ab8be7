//! Numeric replies and outbound reply lines.
//!
//! # Reference
//! - RFC 2812 Section 5: Replies

#![allow(non_camel_case_types)]

use std::fmt;

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    /// 221 - Current user modes
    RPL_UMODEIS = 221,
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 400 - Unknown error
    ERR_UNKNOWNERROR = 400,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 501 - Unknown MODE flag
    ERR_UMODEUNKNOWNFLAG = 501,
}

impl Response {
    /// Numeric value of the response code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns true for error replies (400-599).
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self.code(), 400..=599)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// One outbound line queued for a connection.
///
/// `Display` renders the wire form, CRLF included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reply {
    /// Source of the line (server name or `nick!user@host`), without `:`.
    pub prefix: Option<String>,
    /// Verb or three-digit numeric.
    pub command: String,
    /// Parameters; the last one is sent as a trailing parameter when needed.
    pub params: Vec<String>,
}

impl Reply {
    /// Create a reply with no prefix.
    pub fn new(command: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            prefix: None,
            command: command.into(),
            params,
        }
    }

    /// Create a numeric reply from the named server.
    pub fn numeric(server_name: &str, response: Response, params: Vec<String>) -> Self {
        Self {
            prefix: Some(server_name.to_owned()),
            command: response.to_string(),
            params,
        }
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The numeric response code, if this is a numeric reply.
    pub fn response_code(&self) -> Option<u16> {
        if self.command.len() == 3 {
            self.command.parse().ok()
        } else {
            None
        }
    }
}

/// Whether a final parameter must be sent with the trailing marker.
fn needs_trailing(param: &str) -> bool {
    param.is_empty() || param.contains(' ') || param.starts_with(':')
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        f.write_str(&self.command)?;

        if let Some((last, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }
            if needs_trailing(last) {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }

        f.write_str("\r\n")
    }
}
