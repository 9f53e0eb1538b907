//! Fixed showcase batch: one message of each type across all channels

use std::io::Write;

use color_eyre::eyre::Result;
use tracing::info;

use crate::channels::{Channel, Facebook, Instagram, Telegram, WhatsApp};
use crate::messages::{Clock, FileMessage, Message, PhotoMessage, TextMessage, VideoMessage};

/// Send the demo batch to `out`, returning how many lines were written
pub fn run_demo(out: &mut dyn Write, clock: &dyn Clock) -> Result<usize> {
    let whatsapp = WhatsApp::new("+55999999999");
    let telegram_phone = Telegram::new("+55888888888");
    let telegram_user = Telegram::new("@pedro_bot");
    let facebook = Facebook::new("pedro.fb");
    let instagram = Instagram::new("pedro.ig");

    let text = TextMessage::new("Hello, this is a text message.", None, clock);
    let video = VideoMessage::new("Important video", "video.mp4", "mp4", 125);
    let photo = PhotoMessage::new("Profile photo", "photo.jpg", "jpg");
    let file = FileMessage::new("PDF document", "document.pdf", "pdf");

    let batch: [(&dyn Channel, &dyn Message); 5] = [
        (&whatsapp, &text),
        (&telegram_phone, &video),
        (&telegram_user, &photo),
        (&facebook, &file),
        (&instagram, &text),
    ];

    for (channel, message) in batch {
        channel.send(message, out)?;
    }
    info!(count = batch.len(), "demo batch sent");
    Ok(batch.len())
}
