use std::fmt;

use thiserror::Error;

use crate::channels::ChannelKind;
use crate::messages::MessageKind;

/// Which menu an invalid selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Channel,
    MessageType,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Menu::Channel => f.write_str("channel"),
            Menu::MessageType => f.write_str("message type"),
        }
    }
}

/// Bad console input. Always recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unrecognized {menu} option: {input:?}")]
    InvalidSelection { menu: Menu, input: String },
    #[error("not a whole number of seconds: {input:?}")]
    InvalidNumericInput { input: String },
}

pub fn parse_channel(input: &str) -> Result<ChannelKind, InputError> {
    ChannelKind::from_menu_key(input).ok_or_else(|| InputError::InvalidSelection {
        menu: Menu::Channel,
        input: input.to_string(),
    })
}

pub fn parse_message_kind(input: &str) -> Result<MessageKind, InputError> {
    MessageKind::from_menu_key(input).ok_or_else(|| InputError::InvalidSelection {
        menu: Menu::MessageType,
        input: input.to_string(),
    })
}

/// Non-negative whole seconds; surrounding whitespace is ignored
pub fn parse_duration(input: &str) -> Result<u64, InputError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| InputError::InvalidNumericInput {
            input: input.to_string(),
        })
}
