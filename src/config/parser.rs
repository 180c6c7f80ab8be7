//! Reply policy for lines the parser rejects or does not recognize.

use serde::Deserialize;

use super::defaults::default_true;

/// Which per-line failures are reported back to the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Send ERR_UNKNOWNCOMMAND (421) for verbs without a constructor.
    /// The passthrough command is still handed to the server either way.
    #[serde(default = "default_true")]
    pub reply_unknown: bool,
    /// Send ERR_NEEDMOREPARAMS (461) / ERR_UMODEUNKNOWNFLAG (501) for rejected lines.
    #[serde(default = "default_true")]
    pub notify_errors: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reply_unknown: true,
            notify_errors: true,
        }
    }
}
