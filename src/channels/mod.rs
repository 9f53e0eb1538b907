pub mod builtin;
pub mod traits;

pub use builtin::{Facebook, Instagram, Telegram, WhatsApp};
pub use traits::{Channel, ChannelKind, IdentifierHint};

/// 根据菜单选择创建 Channel 实例
pub fn create_channel(kind: ChannelKind, identifier: impl Into<String>) -> Box<dyn Channel> {
    let identifier = identifier.into();
    match kind {
        ChannelKind::WhatsApp => Box::new(WhatsApp::new(identifier)),
        ChannelKind::Telegram => Box::new(Telegram::new(identifier)),
        ChannelKind::Facebook => Box::new(Facebook::new(identifier)),
        ChannelKind::Instagram => Box::new(Instagram::new(identifier)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_matching_channel() {
        for kind in ChannelKind::ALL {
            let channel = create_channel(kind, "someone");
            assert_eq!(channel.kind(), kind);
            assert_eq!(channel.name(), kind.name());
            assert_eq!(channel.identifier(), "someone");
        }
    }
}
