use super::traits::{Attachment, Message, MessageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMessage {
    content: String,
    attachment: Attachment,
    duration_seconds: u64,
}

impl VideoMessage {
    pub fn new(
        content: impl Into<String>,
        filename: impl Into<String>,
        format: impl Into<String>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            content: content.into(),
            attachment: Attachment::new(filename, format),
            duration_seconds,
        }
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }
}

impl Message for VideoMessage {
    fn kind(&self) -> MessageKind {
        MessageKind::Video
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn format(&self) -> String {
        let minutes = self.duration_seconds / 60;
        let seconds = self.duration_seconds % 60;
        format!(
            "[{}] {} - {}, Duration: {}m {}s",
            self.kind().tag(),
            self.content,
            self.attachment,
            minutes,
            seconds
        )
    }
}
