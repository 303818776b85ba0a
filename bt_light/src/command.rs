//! The two commands understood over the Bluetooth link, the parsing method [Command::parse] and
//! the fixed reply belonging to each command.
//!
//! A burst of received bytes is decoded with [decode_text]; the caller trims it and hands it to
//! [Command::parse]. Matching is exact and case-sensitive, only outer whitespace is ignored.

use crate::config::{ACK_REPLY, LIGHT_COMMAND, LIGHT_REPLY, TEST_COMMAND};
use crate::error::ReceiveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// link check, answered with an acknowledgment
    Test,

    /// toggles the light and confirms
    Light,
}

impl Command {
    /// Compares an already trimmed message against the known commands.
    pub fn parse(msg: &str) -> Option<Command> {
        match msg {
            TEST_COMMAND => Some(Command::Test),
            LIGHT_COMMAND => Some(Command::Light),
            _ => None,
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Command::Test => ACK_REPLY,
            Command::Light => LIGHT_REPLY,
        }
    }
}

/// Interprets a received burst as utf-8. The text is returned untrimmed so it can be echoed to the
/// monitor as it arrived.
pub fn decode_text<E>(burst: &[u8]) -> Result<&str, ReceiveError<E>> {
    core::str::from_utf8(burst).map_err(|_| ReceiveError::Utf8)
}

/// The longest leading part of `burst` that is valid utf-8.
pub fn valid_prefix(burst: &[u8]) -> &str {
    match core::str::from_utf8(burst) {
        Ok(text) => text,
        Err(err) => {
            let (valid, _) = burst.split_at(err.valid_up_to());
            core::str::from_utf8(valid).unwrap_or_default()
        }
    }
}
