//! 内置 Channel 实现
//!
//! 四个 Channel 只在名称上不同，渲染与输出走 `Channel` 的默认实现。

use super::traits::{Channel, ChannelKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsApp {
    identifier: String,
}

impl WhatsApp {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Channel for WhatsApp {
    fn kind(&self) -> ChannelKind {
        ChannelKind::WhatsApp
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    identifier: String,
}

impl Telegram {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Channel for Telegram {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Telegram
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facebook {
    identifier: String,
}

impl Facebook {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Channel for Facebook {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Facebook
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instagram {
    identifier: String,
}

impl Instagram {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Channel for Instagram {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Instagram
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}
