//! Mode flag types.
//!
//! # Reference
//! - RFC 2812 Section 3.1.5 (User Modes)

use std::fmt;

/// Trait for flag vocabularies that a sign-prefixed flag-token decodes into.
///
/// Implemented by [`UserMode`]. A channel vocabulary would implement it too,
/// together with a rule for which flags consume a parameter.
pub trait ModeFlag: fmt::Display + fmt::Debug + Clone + PartialEq {
    /// Map one flag character to its typed representation.
    ///
    /// Never fails; characters outside the vocabulary map to an unknown
    /// variant so validation can happen where the flag is applied.
    fn from_char(c: char) -> Self;

    /// The flag character.
    fn as_char(&self) -> char;
}

/// User modes as defined in RFC 2812.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserMode {
    /// 'a' - User is away
    Away,
    /// 'i' - User is invisible
    Invisible,
    /// 'w' - User receives WALLOPS messages
    WallOps,
    /// 'r' - Restricted connection
    Restricted,
    /// 'o' - IRC operator
    Operator,
    /// 'O' - Local operator
    LocalOperator,
    /// 's' - User receives server notices
    ServerNotice,
    /// Any other character
    Unknown(char),
}

impl UserMode {
    /// Returns true for flags outside the RFC 2812 vocabulary.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl ModeFlag for UserMode {
    fn from_char(c: char) -> Self {
        match c {
            'a' => Self::Away,
            'i' => Self::Invisible,
            'w' => Self::WallOps,
            'r' => Self::Restricted,
            'o' => Self::Operator,
            'O' => Self::LocalOperator,
            's' => Self::ServerNotice,
            _ => Self::Unknown(c),
        }
    }

    fn as_char(&self) -> char {
        match self {
            Self::Away => 'a',
            Self::Invisible => 'i',
            Self::WallOps => 'w',
            Self::Restricted => 'r',
            Self::Operator => 'o',
            Self::LocalOperator => 'O',
            Self::ServerNotice => 's',
            Self::Unknown(c) => *c,
        }
    }
}

impl fmt::Display for UserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One atomic flag change: a flag and whether it is added or removed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange<T: ModeFlag> {
    /// The flag being changed.
    pub flag: T,
    /// `true` for `+`, `false` for `-`.
    pub add: bool,
}

impl<T: ModeFlag> ModeChange<T> {
    /// Create a mode addition.
    pub fn plus(flag: T) -> Self {
        Self { flag, add: true }
    }

    /// Create a mode removal.
    pub fn minus(flag: T) -> Self {
        Self { flag, add: false }
    }
}

impl<T: ModeFlag> fmt::Display for ModeChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.add { '+' } else { '-' };
        write!(f, "{}{}", sign, self.flag)
    }
}
