//! User mode flags and the sign-prefixed flag-token decoder.

mod parse;
mod types;

pub use self::parse::decode_flags;
pub use self::types::{ModeChange, ModeFlag, UserMode};
