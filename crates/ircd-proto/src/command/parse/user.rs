use super::super::types::{Command, Who, Whois};
use super::{arg_opt, require, split_list};
use crate::error::{Arity, MessageParseError};

/// Second `WHO` argument restricting the listing to operators.
const WHO_OPERATORS: &str = "o";

// WHOIS [ <target> ] <mask> *( "," <mask> )
pub(super) fn whois(args: &[&str]) -> Result<Command, MessageParseError> {
    require("WHOIS", args, Arity::AtLeast(1))?;
    let (target, masks) = match args {
        [target, masks, ..] => (Some((*target).to_owned()), *masks),
        _ => (None, args[0]),
    };
    Ok(Command::Whois(Whois {
        target,
        masks: split_list(masks),
    }))
}

// WHO [ <mask> [ "o" ] ]
pub(super) fn who(args: &[&str]) -> Result<Command, MessageParseError> {
    Ok(Command::Who(Who {
        mask: arg_opt(args, 0),
        operator_only: args.get(1) == Some(&WHO_OPERATORS),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whois_single_argument_is_masks() {
        let Command::Whois(w) = whois(&["alice,bob"]).unwrap() else {
            panic!("expected WHOIS");
        };
        assert_eq!(w.target(), None);
        assert_eq!(w.masks(), ["alice", "bob"]);
    }

    #[test]
    fn test_whois_target_and_masks() {
        let Command::Whois(w) = whois(&["irc.example.net", "alice"]).unwrap() else {
            panic!("expected WHOIS");
        };
        assert_eq!(w.target(), Some("irc.example.net"));
        assert_eq!(w.masks(), ["alice"]);
        assert!(whois(&[]).is_err());
    }

    #[test]
    fn test_who_operator_flag() {
        let Command::Who(w) = who(&[]).unwrap() else {
            panic!("expected WHO");
        };
        assert_eq!(w.mask(), None);
        assert!(!w.operator_only());

        let Command::Who(w) = who(&["*.example.net", "o"]).unwrap() else {
            panic!("expected WHO");
        };
        assert_eq!(w.mask(), Some("*.example.net"));
        assert!(w.operator_only());

        let Command::Who(w) = who(&["#a", "O"]).unwrap() else {
            panic!("expected WHO");
        };
        assert!(!w.operator_only());
    }
}
