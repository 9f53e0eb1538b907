use std::fmt;

/// A composed message that knows how to render itself as a single line.
pub trait Message: fmt::Debug {
    fn kind(&self) -> MessageKind;
    fn content(&self) -> &str;

    /// Human-readable line handed to a channel. Never empty.
    fn format(&self) -> String;
}

/// File carried by video, photo and generic file messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub format: String,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {}, Format: {}", self.filename, self.format)
    }
}

/// Message variants offered by the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Video,
    Photo,
    File,
}

impl MessageKind {
    /// Menu order; keys are 1-based positions.
    pub const ALL: [MessageKind; 4] = [Self::Text, Self::Video, Self::Photo, Self::File];

    /// Resolve a menu key such as `"3"`. Surrounding whitespace is ignored.
    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::Text),
            "2" => Some(Self::Video),
            "3" => Some(Self::Photo),
            "4" => Some(Self::File),
            _ => None,
        }
    }

    pub fn menu_key(self) -> &'static str {
        match self {
            Self::Text => "1",
            Self::Video => "2",
            Self::Photo => "3",
            Self::File => "4",
        }
    }

    /// Tag used inside the formatted line, e.g. `[Video]`
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Video => "Video",
            Self::Photo => "Photo",
            Self::File => "File",
        }
    }
}
