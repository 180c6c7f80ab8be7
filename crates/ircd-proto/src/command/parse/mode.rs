use super::super::types::{ChannelModeCommand, Command, UserModeCommand};
use super::require;
use crate::chan::ChannelExt;
use crate::error::{Arity, MessageParseError};
use crate::mode::UserMode;

// MODE <target> ...
pub(super) fn mode(args: &[&str]) -> Result<Command, MessageParseError> {
    require("MODE", args, Arity::AtLeast(1))?;
    if args[0].is_channel_name() {
        channel_mode(args)
    } else {
        user_mode(args)
    }
}

// MODE <nickname> *( ( "+" / "-" ) *( "i" / "w" / "o" / "O" / "r" ) )
fn user_mode(args: &[&str]) -> Result<Command, MessageParseError> {
    Ok(Command::UserMode(UserModeCommand {
        nickname: args[0].to_owned(),
        changes: UserMode::decode(&args[1..])?,
    }))
}

// MODE <channel> *( ( "-" / "+" ) *<modes> *<modeparams> )
// TODO: decode channel flags once parameter consumption for +b/+k/+l is defined.
fn channel_mode(args: &[&str]) -> Result<Command, MessageParseError> {
    Ok(Command::ChannelMode(ChannelModeCommand {
        channel: args[0].to_owned(),
        params: args[1..].iter().map(|s| (*s).to_owned()).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModeParseError;
    use crate::mode::ModeChange;

    #[test]
    fn test_user_mode_changes() {
        let Command::UserMode(m) = mode(&["someuser", "+iw-o"]).unwrap() else {
            panic!("expected user MODE");
        };
        assert_eq!(m.nickname(), "someuser");
        assert_eq!(
            m.changes(),
            [
                ModeChange::plus(UserMode::Invisible),
                ModeChange::plus(UserMode::WallOps),
                ModeChange::minus(UserMode::Operator),
            ]
        );
    }

    #[test]
    fn test_user_mode_query() {
        let Command::UserMode(m) = mode(&["someuser"]).unwrap() else {
            panic!("expected user MODE");
        };
        assert!(m.changes().is_empty());
    }

    #[test]
    fn test_user_mode_without_sign_is_malformed() {
        assert_eq!(
            mode(&["someuser", "xo"]),
            Err(MessageParseError::MalformedCommand {
                string: "xo".to_string(),
                cause: ModeParseError::InvalidModeModifier { modifier: 'x' },
            })
        );
    }

    #[test]
    fn test_channel_target_uses_stub() {
        let Command::ChannelMode(m) = mode(&["#room", "+kl", "secret", "10"]).unwrap() else {
            panic!("expected channel MODE");
        };
        assert_eq!(m.channel(), "#room");
        assert_eq!(m.params(), ["+kl", "secret", "10"]);

        // Channel flag-tokens are not decoded, so no sign is demanded.
        assert!(mode(&["#room", "xo"]).is_ok());
    }

    #[test]
    fn test_mode_requires_target() {
        assert!(matches!(
            mode(&[]),
            Err(MessageParseError::NotEnoughArguments { command: "MODE", got: 0, .. })
        ));
    }
}
