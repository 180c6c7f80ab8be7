//! Flag-token decoding.

use crate::error::{MessageParseError, ModeParseError};

use super::types::{ModeChange, ModeFlag, UserMode};

impl UserMode {
    /// Decode user mode flag-tokens like `+iw-o` into ordered changes.
    pub fn decode(tokens: &[&str]) -> Result<Vec<ModeChange<UserMode>>, MessageParseError> {
        decode_flags(tokens)
    }
}

/// Decode sign-prefixed flag-tokens into one change per flag character.
///
/// Each token must start with `+` or `-`. A sign inside a token switches the
/// direction for the rest of that token only; every token restates its own
/// sign. Iteration is by `char`, so multi-byte flags decode as one flag.
pub fn decode_flags<T: ModeFlag>(
    tokens: &[&str],
) -> Result<Vec<ModeChange<T>>, MessageParseError> {
    let capacity = tokens
        .iter()
        .map(|t| t.chars().count().saturating_sub(1))
        .sum();
    let mut changes = Vec::with_capacity(capacity);

    for token in tokens {
        let mut chars = token.chars();
        let mut add = match chars.next() {
            Some('+') => true,
            Some('-') => false,
            Some(modifier) => {
                return Err(malformed(token, ModeParseError::InvalidModeModifier { modifier }))
            }
            None => return Err(malformed(token, ModeParseError::MissingModeModifier)),
        };

        for c in chars {
            match c {
                '+' => add = true,
                '-' => add = false,
                _ => changes.push(ModeChange {
                    flag: T::from_char(c),
                    add,
                }),
            }
        }
    }

    Ok(changes)
}

fn malformed(token: &str, cause: ModeParseError) -> MessageParseError {
    MessageParseError::MalformedCommand {
        string: token.to_owned(),
        cause,
    }
}
