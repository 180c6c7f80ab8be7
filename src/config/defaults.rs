//! Default value functions for configuration.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

pub fn default_server_name() -> String {
    "irc.example.net".to_string()
}

/// RFC 2812 limit: 512 bytes including CRLF.
pub fn default_max_line_len() -> usize {
    510
}
