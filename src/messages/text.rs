use chrono::NaiveDateTime;

use super::clock::Clock;
use super::traits::{Message, MessageKind};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Plain text message stamped with its send time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    content: String,
    sent_at: NaiveDateTime,
}

impl TextMessage {
    /// `sent_at` falls back to `clock.now()` when not given.
    pub fn new(
        content: impl Into<String>,
        sent_at: Option<NaiveDateTime>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            content: content.into(),
            sent_at: sent_at.unwrap_or_else(|| clock.now()),
        }
    }

    pub fn sent_at(&self) -> NaiveDateTime {
        self.sent_at
    }
}

impl Message for TextMessage {
    fn kind(&self) -> MessageKind {
        MessageKind::Text
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn format(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.kind().tag(),
            self.sent_at.format(TIMESTAMP_FORMAT),
            self.content
        )
    }
}
