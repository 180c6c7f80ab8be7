use super::super::types::{Command, Nick, Pass, Ping, Pong, Quit, User};
use super::{arg_opt, require};
use crate::error::{Arity, MessageParseError};

// PING <server1> [ <server2> ]
pub(super) fn ping(args: &[&str]) -> Result<Command, MessageParseError> {
    require("PING", args, Arity::AtLeast(1))?;
    Ok(Command::Ping(Ping {
        server: args[0].to_owned(),
        server2: arg_opt(args, 1),
    }))
}

// PONG <server> [ <server2> ]
pub(super) fn pong(args: &[&str]) -> Result<Command, MessageParseError> {
    require("PONG", args, Arity::AtLeast(1))?;
    Ok(Command::Pong(Pong {
        server1: args[0].to_owned(),
        server2: arg_opt(args, 1),
    }))
}

// PASS <password>
pub(super) fn pass(args: &[&str]) -> Result<Command, MessageParseError> {
    require("PASS", args, Arity::AtLeast(1))?;
    Ok(Command::Pass(Pass {
        password: args[0].to_owned(),
    }))
}

// NICK <nickname>
pub(super) fn nick(args: &[&str]) -> Result<Command, MessageParseError> {
    require("NICK", args, Arity::Exactly(1))?;
    Ok(Command::Nick(Nick {
        nickname: args[0].to_owned(),
    }))
}

// USER <user> <mode> <unused> <realname>
pub(super) fn user(args: &[&str]) -> Result<Command, MessageParseError> {
    require("USER", args, Arity::Exactly(4))?;
    Ok(Command::User(User {
        user: args[0].to_owned(),
        // Malformed or out-of-range modes are ignored rather than rejected.
        mode: args[1].parse().unwrap_or(0),
        unused: args[2].to_owned(),
        realname: args[3].to_owned(),
    }))
}

// QUIT [ <message> ]
pub(super) fn quit(args: &[&str]) -> Result<Command, MessageParseError> {
    Ok(Command::Quit(Quit {
        message: arg_opt(args, 0),
    }))
}
