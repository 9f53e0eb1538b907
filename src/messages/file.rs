use super::traits::{Attachment, Message, MessageKind};

/// Generic document or binary attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMessage {
    content: String,
    attachment: Attachment,
}

impl FileMessage {
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

impl Message for FileMessage {
    fn kind(&self) -> MessageKind {
        MessageKind::File
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn format(&self) -> String {
        format!("[{}] {} - {}", self.kind().tag(), self.content, self.attachment)
    }
}
