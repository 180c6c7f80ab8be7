use super::super::types::{ChannelKeys, Command, Join, Part, Topic};
use super::{arg_opt, require, split_list};
use crate::error::{Arity, MessageParseError};

/// `JOIN 0` leaves every joined channel.
const JOIN_ZERO: &str = "0";

// JOIN ( <channel> *( "," <channel> ) [ <key> *( "," <key> ) ] ) / "0"
pub(super) fn join(args: &[&str]) -> Result<Command, MessageParseError> {
    require("JOIN", args, Arity::AtLeast(1))?;

    if args[0] == JOIN_ZERO {
        return Ok(Command::Join(Join {
            channels: ChannelKeys::default(),
            zero: true,
        }));
    }

    // Keys pair with channels by position: missing keys are empty and
    // surplus keys are dropped.
    let mut keys = args.get(1).map(|k| k.split(',')).into_iter().flatten();
    let mut channels = ChannelKeys::default();
    for channel in args[0].split(',') {
        channels.insert(channel, keys.next().unwrap_or(""));
    }

    Ok(Command::Join(Join {
        channels,
        zero: false,
    }))
}

// PART <channel> *( "," <channel> ) [ <message> ]
pub(super) fn part(args: &[&str]) -> Result<Command, MessageParseError> {
    require("PART", args, Arity::AtLeast(1))?;
    Ok(Command::Part(Part {
        channels: split_list(args[0]),
        message: arg_opt(args, 1),
    }))
}

// TOPIC <channel> [ <topic> ]
pub(super) fn topic(args: &[&str]) -> Result<Command, MessageParseError> {
    require("TOPIC", args, Arity::AtLeast(1))?;
    Ok(Command::Topic(Topic {
        channel: args[0].to_owned(),
        topic: arg_opt(args, 1),
    }))
}
