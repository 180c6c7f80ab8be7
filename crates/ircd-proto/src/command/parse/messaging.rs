use super::super::types::{Command, PrivMsg};
use super::require;
use crate::error::{Arity, MessageParseError};

// PRIVMSG <target> <message>
pub(super) fn privmsg(args: &[&str]) -> Result<Command, MessageParseError> {
    require("PRIVMSG", args, Arity::AtLeast(2))?;
    Ok(Command::PrivMsg(PrivMsg {
        target: args[0].to_owned(),
        message: args[1].to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privmsg_needs_target_and_text() {
        assert!(privmsg(&[]).is_err());
        assert!(privmsg(&["#a"]).is_err());

        let Command::PrivMsg(msg) = privmsg(&["#a", "hello there"]).unwrap() else {
            panic!("expected PRIVMSG");
        };
        assert_eq!(msg.target(), "#a");
        assert_eq!(msg.message(), "hello there");
        assert!(msg.target_is_channel());
    }

    #[test]
    fn test_privmsg_to_user() {
        let Command::PrivMsg(msg) = privmsg(&["bob", "hi"]).unwrap() else {
            panic!("expected PRIVMSG");
        };
        assert!(!msg.target_is_channel());
    }
}
