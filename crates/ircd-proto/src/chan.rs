//! Room (channel) name classification.
//!
//! Used to route `MODE` to the channel or user form and to tell whether a
//! `PRIVMSG` target addresses a room or a single user.

/// Maximum channel name length in characters, prefix included.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Extension trait for checking if a string names a channel.
pub trait ChannelExt {
    /// Check if this string is a valid channel name.
    ///
    /// Valid channel names start with '#', '&', '+' or '!', contain no
    /// space, comma, BEL, NUL or other control character, and are at most
    /// [`MAX_CHANNEL_LEN`] characters long.
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for str {
    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();

        match chars.next() {
            Some('#' | '&' | '+' | '!') => {}
            _ => return false,
        }

        if self.chars().count() > MAX_CHANNEL_LEN {
            return false;
        }

        chars.all(|c| !matches!(c, ' ' | ',' | '\x07' | '\0') && !c.is_control())
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_channels() {
        assert!("#channel".is_channel_name());
        assert!("&local".is_channel_name());
        assert!("+modeless".is_channel_name());
        assert!("!safe12345".is_channel_name());
        assert!("#".is_channel_name());
    }

    #[test]
    fn test_invalid_channels() {
        assert!(!"channel".is_channel_name());
        assert!(!"#chan nel".is_channel_name());
        assert!(!"#chan,nel".is_channel_name());
        assert!(!"#chan\x07".is_channel_name());
        assert!(!"".is_channel_name());
    }

    #[test]
    fn test_length_limit() {
        let ok = format!("#{}", "a".repeat(MAX_CHANNEL_LEN - 1));
        let too_long = format!("#{}", "a".repeat(MAX_CHANNEL_LEN));
        assert!(ok.is_channel_name());
        assert!(!too_long.is_channel_name());
    }
}
