//! Interactive send loop
//!
//! Steps per round: choose channel → enter identifier → choose message type →
//! enter fields → send → ask to continue. Bad menu keys and bad durations
//! re-ask the same question; end of input ends the session.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use tracing::{debug, info};

use super::error::{parse_channel, parse_duration, parse_message_kind};
use super::prompt::Prompter;
use crate::channels::{create_channel, ChannelKind, IdentifierHint};
use crate::i18n::{Language, Strings};
use crate::messages::{
    Clock, FileMessage, Message, MessageKind, PhotoMessage, TextMessage, VideoMessage,
};

pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    clock: &'a dyn Clock,
    strings: &'static Strings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, clock: &'a dyn Clock, language: Language) -> Self {
        Self {
            prompter,
            clock,
            strings: language.strings(),
        }
    }

    /// Run until the user declines to continue or input ends.
    /// Returns the number of messages sent.
    pub fn run(&mut self) -> Result<usize> {
        let s = self.strings;
        self.prompter.say(s.welcome)?;

        let mut sent = 0;
        while self.round()? {
            sent += 1;
            let Some(answer) = self.ask_after_blank(s.ask_continue)? else {
                break;
            };
            if !answer.trim().eq_ignore_ascii_case(s.continue_key) {
                break;
            }
        }

        self.prompter.say(s.goodbye)?;
        info!(sent, "session finished");
        Ok(sent)
    }

    /// Consume the session and hand back the output, mostly for tests
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// One compose-and-send round; `false` when input ended midway.
    fn round(&mut self) -> Result<bool> {
        let s = self.strings;

        let Some(channel_kind) = self.choose_channel()? else {
            return Ok(false);
        };
        let identifier_prompt = match channel_kind.identifier_hint() {
            IdentifierHint::PhoneNumber => s.enter_phone,
            IdentifierHint::Username => s.enter_username,
        };
        let Some(identifier) = self.prompter.ask(identifier_prompt)? else {
            return Ok(false);
        };
        let channel = create_channel(channel_kind, identifier);

        let Some(message_kind) = self.choose_message_type()? else {
            return Ok(false);
        };
        let Some(message) = self.compose(message_kind)? else {
            return Ok(false);
        };

        self.prompter.say("")?;
        self.prompter.say(s.sending)?;
        channel.send(message.as_ref(), self.prompter.output())?;
        info!(
            channel = channel.name(),
            kind = message_kind.tag(),
            "message sent"
        );
        Ok(true)
    }

    fn choose_channel(&mut self) -> Result<Option<ChannelKind>> {
        let s = self.strings;
        loop {
            self.prompter.say("")?;
            self.prompter.say(s.choose_channel)?;
            for kind in ChannelKind::ALL {
                self.prompter
                    .say(&format!("{} - {}", kind.menu_key(), kind.name()))?;
            }
            let Some(input) = self.prompter.ask(s.option)? else {
                return Ok(None);
            };
            match parse_channel(&input) {
                Ok(kind) => return Ok(Some(kind)),
                Err(e) => {
                    debug!("{}", e);
                    self.prompter.say(s.invalid_channel)?;
                }
            }
        }
    }

    fn choose_message_type(&mut self) -> Result<Option<MessageKind>> {
        let s = self.strings;
        loop {
            self.prompter.say("")?;
            self.prompter.say(s.choose_message_type)?;
            for kind in MessageKind::ALL {
                self.prompter.say(&format!(
                    "{} - {}",
                    kind.menu_key(),
                    s.message_label(kind)
                ))?;
            }
            let Some(input) = self.prompter.ask(s.option)? else {
                return Ok(None);
            };
            match parse_message_kind(&input) {
                Ok(kind) => return Ok(Some(kind)),
                Err(e) => {
                    debug!("{}", e);
                    self.prompter.say(s.invalid_message_type)?;
                }
            }
        }
    }

    /// Ask the content, then the fields specific to `kind`
    fn compose(&mut self, kind: MessageKind) -> Result<Option<Box<dyn Message>>> {
        let s = self.strings;
        let Some(content) = self.prompter.ask(s.enter_content)? else {
            return Ok(None);
        };

        let message: Box<dyn Message> = match kind {
            MessageKind::Text => Box::new(TextMessage::new(content, None, self.clock)),
            MessageKind::Video => {
                let Some((filename, format)) =
                    self.ask_attachment(s.video_filename, s.video_format)?
                else {
                    return Ok(None);
                };
                let Some(duration) = self.ask_duration()? else {
                    return Ok(None);
                };
                Box::new(VideoMessage::new(content, filename, format, duration))
            }
            MessageKind::Photo => {
                let Some((filename, format)) =
                    self.ask_attachment(s.photo_filename, s.photo_format)?
                else {
                    return Ok(None);
                };
                Box::new(PhotoMessage::new(content, filename, format))
            }
            MessageKind::File => {
                let Some((filename, format)) =
                    self.ask_attachment(s.file_filename, s.file_format)?
                else {
                    return Ok(None);
                };
                Box::new(FileMessage::new(content, filename, format))
            }
        };
        Ok(Some(message))
    }

    fn ask_attachment(
        &mut self,
        filename_prompt: &str,
        format_prompt: &str,
    ) -> Result<Option<(String, String)>> {
        let Some(filename) = self.prompter.ask(filename_prompt)? else {
            return Ok(None);
        };
        let Some(format) = self.prompter.ask(format_prompt)? else {
            return Ok(None);
        };
        Ok(Some((filename, format)))
    }

    fn ask_duration(&mut self) -> Result<Option<u64>> {
        let s = self.strings;
        loop {
            let Some(input) = self.prompter.ask(s.video_duration)? else {
                return Ok(None);
            };
            match parse_duration(&input) {
                Ok(secs) => return Ok(Some(secs)),
                Err(e) => {
                    debug!("{}", e);
                    self.prompter.say(s.invalid_duration)?;
                }
            }
        }
    }

    fn ask_after_blank(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompter.say("")?;
        self.prompter.ask(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::FixedClock;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        )
    }

    fn run(input: &str, language: Language) -> (usize, String) {
        let clock = clock();
        let prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let mut session = Session::new(prompter, &clock, language);
        let sent = session.run().unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        (sent, out)
    }

    #[test]
    fn photo_round_on_whatsapp() {
        let (sent, out) = run(
            "1\n+5511999999999\n3\nProfile pic\npic.jpg\njpg\nn\n",
            Language::English,
        );
        assert_eq!(sent, 1);
        assert!(out.contains(
            "\n[WhatsApp - +5511999999999] [Photo] Profile pic - File: pic.jpg, Format: jpg\n"
        ));
        assert!(out.contains("Sending message..."));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn text_uses_injected_clock() {
        let (_, out) = run("4\nana.ig\n1\nHi\nn\n", Language::English);
        assert!(out.contains("[Instagram - ana.ig] [Text] 2024-05-17 09:15:00 - Hi\n"));
        assert!(out.contains("Enter the username: "));
    }

    #[test]
    fn invalid_channel_key_reprompts() {
        let (sent, out) = run("9\n2\n+1555\n4\nDoc\nd.pdf\npdf\nn\n", Language::English);
        assert_eq!(sent, 1);
        assert_eq!(out.matches("Invalid channel. Try again.").count(), 1);
        assert_eq!(out.matches("Choose a channel:").count(), 2);
        assert!(out.contains("[Telegram - +1555] [File] Doc - File: d.pdf, Format: pdf\n"));
    }

    #[test]
    fn invalid_message_type_reprompts_same_menu() {
        let (sent, out) = run("3\nbob\n7\n3\nPic\np.png\npng\nn\n", Language::English);
        assert_eq!(sent, 1);
        assert_eq!(out.matches("Invalid message type. Try again.").count(), 1);
        // the channel menu is not shown again
        assert_eq!(out.matches("Choose a channel:").count(), 1);
        assert!(out.contains("[Facebook - bob] [Photo] Pic - File: p.png, Format: png\n"));
    }

    #[test]
    fn bad_duration_reprompts_duration_only() {
        let (sent, out) = run(
            "1\n+55\n2\nClip\nclip.mp4\nmp4\nabc\n-4\n61\nn\n",
            Language::English,
        );
        assert_eq!(sent, 1);
        assert_eq!(
            out.matches("Invalid duration. Enter a whole number of seconds.")
                .count(),
            2
        );
        assert_eq!(out.matches("Video file name: ").count(), 1);
        assert!(out.contains(
            "[WhatsApp - +55] [Video] Clip - File: clip.mp4, Format: mp4, Duration: 1m 1s\n"
        ));
    }

    #[test]
    fn continue_key_loops() {
        let (sent, out) = run(
            "1\n+1\n1\nfirst\nY\n2\n+2\n1\nsecond\nno\n",
            Language::English,
        );
        assert_eq!(sent, 2);
        assert!(out.contains("[WhatsApp - +1] [Text] 2024-05-17 09:15:00 - first\n"));
        assert!(out.contains("[Telegram - +2] [Text] 2024-05-17 09:15:00 - second\n"));
    }

    #[test]
    fn eof_mid_round_ends_cleanly() {
        let (sent, out) = run("1\n+5511\n2\nClip\n", Language::English);
        assert_eq!(sent, 0);
        assert!(!out.contains("Sending message..."));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn eof_at_continue_prompt_keeps_sent_count() {
        let (sent, _) = run("1\n+5511\n1\nhello\n", Language::English);
        assert_eq!(sent, 1);
    }

    #[test]
    fn portuguese_prompts_and_continue_key() {
        let (sent, out) = run(
            "1\n+55\n4\nContrato\nc.pdf\npdf\ns\n3\nmaria\n1\nOi\nn\n",
            Language::Portuguese,
        );
        assert_eq!(sent, 2);
        assert!(out.contains("Escolha um canal:"));
        assert!(out.contains("4 - Arquivo"));
        assert!(out.contains("Digite o número de telefone: "));
        assert!(out.contains("Digite o nome de usuário: "));
        // delivery line is not localized
        assert!(out.contains("[WhatsApp - +55] [File] Contrato - File: c.pdf, Format: pdf\n"));
        assert!(out.contains("[Facebook - maria] [Text] 2024-05-17 09:15:00 - Oi\n"));
    }

    #[test]
    fn english_session_stops_on_portuguese_key() {
        let (sent, _) = run("1\n+1\n1\na\ns\n1\n+2\n1\nb\nn\n", Language::English);
        assert_eq!(sent, 1);
    }
}
