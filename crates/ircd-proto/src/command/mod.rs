//! Command variants and the verb registry that builds them.

mod parse;
mod types;

pub use self::parse::Constructor;
pub use self::types::{
    ChannelKeys, ChannelModeCommand, Command, Join, Nick, Part, Pass, Ping, Pong, PrivMsg, Quit,
    Topic, Unknown, User, UserModeCommand, Who, Whois,
};
