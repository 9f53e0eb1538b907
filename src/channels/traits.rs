use std::fmt;
use std::io::Write;

use color_eyre::eyre::{Context, Result};
use tracing::debug;

use crate::messages::Message;

/// Notification channel abstraction
///
/// "Sending" writes one delivery line to the given output; nothing leaves the
/// process.
pub trait Channel: fmt::Debug {
    fn kind(&self) -> ChannelKind;

    /// Phone number or username, taken as typed
    fn identifier(&self) -> &str;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// `[<name> - <identifier>] <formatted message>`
    fn render(&self, message: &dyn Message) -> String {
        format!(
            "[{} - {}] {}",
            self.name(),
            self.identifier(),
            message.format()
        )
    }

    fn send(&self, message: &dyn Message, out: &mut dyn Write) -> Result<()> {
        let line = self.render(message);
        writeln!(out, "{}", line).wrap_err("写入输出失败")?;
        out.flush().wrap_err("刷新输出失败")?;
        debug!(
            channel = self.name(),
            kind = message.kind().tag(),
            "message delivered"
        );
        Ok(())
    }
}

/// What the identifier prompt should ask for. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierHint {
    PhoneNumber,
    Username,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    WhatsApp,
    Telegram,
    Facebook,
    Instagram,
}

impl ChannelKind {
    /// Menu order; keys are 1-based positions.
    pub const ALL: [ChannelKind; 4] = [
        Self::WhatsApp,
        Self::Telegram,
        Self::Facebook,
        Self::Instagram,
    ];

    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::WhatsApp),
            "2" => Some(Self::Telegram),
            "3" => Some(Self::Facebook),
            "4" => Some(Self::Instagram),
            _ => None,
        }
    }

    pub fn menu_key(self) -> &'static str {
        match self {
            Self::WhatsApp => "1",
            Self::Telegram => "2",
            Self::Facebook => "3",
            Self::Instagram => "4",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
        }
    }

    pub fn identifier_hint(self) -> IdentifierHint {
        match self {
            Self::WhatsApp | Self::Telegram => IdentifierHint::PhoneNumber,
            Self::Facebook | Self::Instagram => IdentifierHint::Username,
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
