//! Input limits configuration.

use serde::Deserialize;

use super::defaults::default_max_line_len;

/// Input limits configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted line in bytes, CRLF excluded (default: 510).
    /// Longer lines are rejected before tokenizing.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
        }
    }
}
