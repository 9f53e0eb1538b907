pub mod clock;
pub mod file;
pub mod photo;
pub mod text;
pub mod traits;
pub mod video;

pub use clock::{Clock, FixedClock, SystemClock};
pub use file::FileMessage;
pub use photo::PhotoMessage;
pub use text::TextMessage;
pub use traits::{Attachment, Message, MessageKind};
pub use video::VideoMessage;
