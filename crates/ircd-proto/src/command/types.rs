//! Command variants.
//!
//! One struct per supported verb, unified by the [`Command`] enum. Fields are
//! private and only readable through accessors: a value is complete once its
//! constructor returns and never changes afterwards.
//!
//! # Reference
//! - RFC 2812 Section 3: Message details

use std::fmt;

use crate::chan::ChannelExt;
use crate::mode::{ModeChange, UserMode};

/// A parsed, validated command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `PING server [server2]`
    Ping(Ping),
    /// `PONG server [server2]`
    Pong(Pong),
    /// `PASS password`
    Pass(Pass),
    /// `NICK nickname`
    Nick(Nick),
    /// `USER user mode unused realname`
    User(User),
    /// `QUIT [message]`
    Quit(Quit),
    /// `JOIN channels [keys]` or `JOIN 0`
    Join(Join),
    /// `PART channels [message]`
    Part(Part),
    /// `PRIVMSG target message`
    PrivMsg(PrivMsg),
    /// `TOPIC channel [topic]`
    Topic(Topic),
    /// `WHOIS [target] masks`
    Whois(Whois),
    /// `WHO [mask ["o"]]`
    Who(Who),
    /// `MODE nickname *(flag-token)`
    UserMode(UserModeCommand),
    /// `MODE channel ...` (flags not decoded)
    ChannelMode(ChannelModeCommand),
    /// Any verb without a constructor.
    Unknown(Unknown),
}

impl Command {
    /// The upper-cased verb this command was parsed from.
    pub fn verb(&self) -> &str {
        match self {
            Self::Ping(_) => "PING",
            Self::Pong(_) => "PONG",
            Self::Pass(_) => "PASS",
            Self::Nick(_) => "NICK",
            Self::User(_) => "USER",
            Self::Quit(_) => "QUIT",
            Self::Join(_) => "JOIN",
            Self::Part(_) => "PART",
            Self::PrivMsg(_) => "PRIVMSG",
            Self::Topic(_) => "TOPIC",
            Self::Whois(_) => "WHOIS",
            Self::Who(_) => "WHO",
            Self::UserMode(_) | Self::ChannelMode(_) => "MODE",
            Self::Unknown(cmd) => cmd.verb.as_str(),
        }
    }

    /// Returns true for the passthrough value of an unrecognized verb.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ping(cmd) => fmt::Display::fmt(cmd, f),
            Self::Pong(cmd) => fmt::Display::fmt(cmd, f),
            Self::Pass(cmd) => fmt::Display::fmt(cmd, f),
            Self::Nick(cmd) => fmt::Display::fmt(cmd, f),
            Self::User(cmd) => fmt::Display::fmt(cmd, f),
            Self::Quit(cmd) => fmt::Display::fmt(cmd, f),
            Self::Join(cmd) => fmt::Display::fmt(cmd, f),
            Self::Part(cmd) => fmt::Display::fmt(cmd, f),
            Self::PrivMsg(cmd) => fmt::Display::fmt(cmd, f),
            Self::Topic(cmd) => fmt::Display::fmt(cmd, f),
            Self::Whois(cmd) => fmt::Display::fmt(cmd, f),
            Self::Who(cmd) => fmt::Display::fmt(cmd, f),
            Self::UserMode(cmd) => fmt::Display::fmt(cmd, f),
            Self::ChannelMode(cmd) => fmt::Display::fmt(cmd, f),
            Self::Unknown(cmd) => fmt::Display::fmt(cmd, f),
        }
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

// === Connection registration ===

/// `PING server [server2]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ping {
    pub(crate) server: String,
    pub(crate) server2: Option<String>,
}

impl Ping {
    /// The server (or token) being pinged.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The server to forward the ping to, if given.
    pub fn server2(&self) -> Option<&str> {
        self.server2.as_deref()
    }
}

impl fmt::Display for Ping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PING(server={}, server2={})", self.server, opt(&self.server2))
    }
}

/// `PONG server [server2]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pong {
    pub(crate) server1: String,
    pub(crate) server2: Option<String>,
}

impl Pong {
    /// The responding server (or echoed token).
    pub fn server1(&self) -> &str {
        &self.server1
    }

    /// The forwarding target, if given.
    pub fn server2(&self) -> Option<&str> {
        self.server2.as_deref()
    }
}

impl fmt::Display for Pong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PONG(server1={}, server2={})", self.server1, opt(&self.server2))
    }
}

/// `PASS password`
///
/// The password is kept raw; hashing and verification happen elsewhere.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pass {
    pub(crate) password: String,
}

impl Pass {
    /// The password as sent.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of Debug output that ends up in logs.
impl fmt::Debug for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass").field("password", &"<redacted>").finish()
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PASS(password=<redacted>)")
    }
}

/// `NICK nickname`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nick {
    pub(crate) nickname: String,
}

impl Nick {
    /// The requested nickname, verbatim.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl fmt::Display for Nick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NICK(nickname={})", self.nickname)
    }
}

/// `USER user mode unused realname`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub(crate) user: String,
    pub(crate) mode: u8,
    pub(crate) unused: String,
    pub(crate) realname: String,
}

impl User {
    /// The username (ident).
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The numeric initial mode bitmask; 0 when the token was not a `u8`.
    pub fn mode(&self) -> u8 {
        self.mode
    }

    /// The unused third parameter.
    pub fn unused(&self) -> &str {
        &self.unused
    }

    /// The real name.
    pub fn realname(&self) -> &str {
        &self.realname
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "USER(user={}, mode={:o}, unused={}, realname={})",
            self.user, self.mode, self.unused, self.realname
        )
    }
}

/// `QUIT [message]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quit {
    pub(crate) message: Option<String>,
}

impl Quit {
    /// The quit message, if given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Quit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QUIT(message={})", opt(&self.message))
    }
}

// === Channel operations ===

/// Channel names paired with their keys, in the order they were given.
///
/// A channel listed twice keeps its first position and its last key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelKeys {
    entries: Vec<(String, String)>,
}

impl ChannelKeys {
    pub(crate) fn insert(&mut self, channel: &str, key: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == channel) {
            Some((_, existing)) => *existing = key.to_owned(),
            None => self.entries.push((channel.to_owned(), key.to_owned())),
        }
    }

    /// The key for `channel` (`""` when none was given), or `None` if the
    /// channel is not listed.
    pub fn get(&self, channel: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == channel)
            .map(|(_, key)| key.as_str())
    }

    /// Iterate `(channel, key)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, k)| (c.as_str(), k.as_str()))
    }

    /// Iterate channel names in order.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no channels are listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ChannelKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (channel, key)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", channel, key)?;
        }
        f.write_str("}")
    }
}

/// `JOIN channels [keys]` or `JOIN 0`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    pub(crate) channels: ChannelKeys,
    pub(crate) zero: bool,
}

impl Join {
    /// Channels to join with their keys. Empty when [`Join::is_zero`].
    pub fn channels(&self) -> &ChannelKeys {
        &self.channels
    }

    /// True for `JOIN 0`: leave every joined channel.
    pub fn is_zero(&self) -> bool {
        self.zero
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JOIN(channels={}, zero={})", self.channels, self.zero)
    }
}

/// `PART channels [message]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    pub(crate) channels: Vec<String>,
    pub(crate) message: Option<String>,
}

impl Part {
    /// Channels to leave, in order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// The part message exactly as received.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The part message, falling back to `default` when none was given.
    ///
    /// The sender is not known at parse time, so the caller supplies the
    /// sender's nickname here when the message is read.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(default)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PART(channels={:?}, message={})",
            self.channels,
            opt(&self.message)
        )
    }
}

/// `TOPIC channel [topic]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topic {
    pub(crate) channel: String,
    pub(crate) topic: Option<String>,
}

impl Topic {
    /// The channel.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// The new topic; `None` queries the current one.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOPIC(channel={}, topic={})", self.channel, opt(&self.topic))
    }
}

// === Messaging ===

/// `PRIVMSG target message`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivMsg {
    pub(crate) target: String,
    pub(crate) message: String,
}

impl PrivMsg {
    /// The target channel or nickname.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the target names a channel rather than a user.
    pub fn target_is_channel(&self) -> bool {
        self.target.is_channel_name()
    }
}

impl fmt::Display for PrivMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PRIVMSG(target={}, message={})", self.target, self.message)
    }
}

// === User queries ===

/// `WHOIS [target] mask *("," mask)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Whois {
    pub(crate) target: Option<String>,
    pub(crate) masks: Vec<String>,
}

impl Whois {
    /// The server to forward the query to, if given.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Nickname masks, in order.
    pub fn masks(&self) -> &[String] {
        &self.masks
    }
}

impl fmt::Display for Whois {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHOIS(target={}, masks={:?})", opt(&self.target), self.masks)
    }
}

/// `WHO [mask ["o"]]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Who {
    pub(crate) mask: Option<String>,
    pub(crate) operator_only: bool,
}

impl Who {
    /// The mask, if given.
    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    /// True when only operators should be listed.
    pub fn operator_only(&self) -> bool {
        self.operator_only
    }
}

impl fmt::Display for Who {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WHO(mask={}, operatorOnly={})",
            opt(&self.mask),
            self.operator_only
        )
    }
}

// === Modes ===

/// User form of `MODE`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserModeCommand {
    pub(crate) nickname: String,
    pub(crate) changes: Vec<ModeChange<UserMode>>,
}

impl UserModeCommand {
    /// The target nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Flag changes in the order they appeared. Empty for a mode query.
    pub fn changes(&self) -> &[ModeChange<UserMode>] {
        &self.changes
    }
}

impl fmt::Display for UserModeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MODE(nickname={}, changes=[", self.nickname)?;
        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", change)?;
        }
        f.write_str("])")
    }
}

/// Channel form of `MODE`.
///
/// Channel flags are not decoded yet: the flag-tokens and their parameters
/// are kept verbatim in [`ChannelModeCommand::params`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelModeCommand {
    pub(crate) channel: String,
    pub(crate) params: Vec<String>,
}

impl ChannelModeCommand {
    /// The target channel.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Undecoded flag-tokens and parameters after the channel.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for ChannelModeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MODE(channel={}, params={:?})", self.channel, self.params)
    }
}

// === Passthrough ===

/// A verb with no constructor, kept with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unknown {
    pub(crate) verb: String,
    pub(crate) args: Vec<String>,
}

impl Unknown {
    /// The upper-cased verb.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Arguments in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UNKNOWN(command={}, args={:?})", self.verb, self.args)
    }
}
