use super::traits::{Attachment, Message, MessageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMessage {
    content: String,
    attachment: Attachment,
}

impl PhotoMessage {
    pub fn new(
        content: impl Into<String>,
        filename: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            attachment: Attachment::new(filename, format),
        }
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }
}

impl Message for PhotoMessage {
    fn kind(&self) -> MessageKind {
        MessageKind::Photo
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn format(&self) -> String {
        format!("[{}] {} - {}", self.kind().tag(), self.content, self.attachment)
    }
}
