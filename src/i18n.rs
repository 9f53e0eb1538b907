use crate::messages::MessageKind;

/// Interface language.
///
/// Controls prompts, menu labels and notices of the interactive session.
/// Does NOT affect the delivery line: formatted messages are always rendered
/// with the same English tags so their shape stays stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// Portuguese
    Portuguese,
}

impl Language {
    /// Parse from a config string value.
    /// Unknown values fall back to English.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "pt" | "pt-BR" | "pt_BR" | "pt-PT" | "pt_PT" => Self::Portuguese,
            _ => Self::English,
        }
    }

    /// Infer from the OS `LANG` environment variable.
    pub fn from_locale() -> Self {
        let lang = std::env::var("LANG").unwrap_or_default();
        if lang.starts_with("pt") {
            Self::Portuguese
        } else {
            Self::English
        }
    }

    /// Resolve language with priority: config value → LANG env var → English default.
    ///
    /// Empty string means the field was absent → fall back to locale detection.
    pub fn detect(config_lang: &str) -> Self {
        if config_lang.is_empty() {
            Self::from_locale()
        } else {
            Self::from_str(config_lang)
        }
    }

    /// Value written to `config.toml`
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Portuguese => "pt",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::English => &EN,
            Self::Portuguese => &PT,
        }
    }
}

/// Console text for one language
#[derive(Debug)]
pub struct Strings {
    pub welcome: &'static str,
    pub choose_channel: &'static str,
    pub choose_message_type: &'static str,
    pub option: &'static str,
    pub invalid_channel: &'static str,
    pub invalid_message_type: &'static str,
    pub enter_phone: &'static str,
    pub enter_username: &'static str,
    pub enter_content: &'static str,
    pub video_filename: &'static str,
    pub video_format: &'static str,
    pub video_duration: &'static str,
    pub invalid_duration: &'static str,
    pub photo_filename: &'static str,
    pub photo_format: &'static str,
    pub file_filename: &'static str,
    pub file_format: &'static str,
    pub sending: &'static str,
    pub ask_continue: &'static str,
    /// Answer that keeps the session going; compared case-insensitively
    pub continue_key: &'static str,
    pub goodbye: &'static str,
    text_label: &'static str,
    video_label: &'static str,
    photo_label: &'static str,
    file_label: &'static str,
}

impl Strings {
    /// Menu label for a message type
    pub fn message_label(&self, kind: MessageKind) -> &'static str {
        match kind {
            MessageKind::Text => self.text_label,
            MessageKind::Video => self.video_label,
            MessageKind::Photo => self.photo_label,
            MessageKind::File => self.file_label,
        }
    }
}

static EN: Strings = Strings {
    welcome: "Welcome to the message sending system!",
    choose_channel: "Choose a channel:",
    choose_message_type: "Choose the message type:",
    option: "Option: ",
    invalid_channel: "Invalid channel. Try again.",
    invalid_message_type: "Invalid message type. Try again.",
    enter_phone: "Enter the phone number: ",
    enter_username: "Enter the username: ",
    enter_content: "Enter the message content: ",
    video_filename: "Video file name: ",
    video_format: "Video format (e.g. mp4): ",
    video_duration: "Video duration (in seconds): ",
    invalid_duration: "Invalid duration. Enter a whole number of seconds.",
    photo_filename: "Photo file name: ",
    photo_format: "Photo format (e.g. jpg): ",
    file_filename: "File name: ",
    file_format: "File format (e.g. pdf): ",
    sending: "Sending message...",
    ask_continue: "Send another message? (y/n): ",
    continue_key: "y",
    goodbye: "Goodbye!",
    text_label: "Text",
    video_label: "Video",
    photo_label: "Photo",
    file_label: "File",
};

static PT: Strings = Strings {
    welcome: "Bem-vindo ao sistema de envio de mensagens!",
    choose_channel: "Escolha um canal:",
    choose_message_type: "Escolha o tipo de mensagem:",
    option: "Opção: ",
    invalid_channel: "Canal inválido. Tente novamente.",
    invalid_message_type: "Tipo de mensagem inválido. Tente novamente.",
    enter_phone: "Digite o número de telefone: ",
    enter_username: "Digite o nome de usuário: ",
    enter_content: "Digite o conteúdo da mensagem: ",
    video_filename: "Nome do arquivo de vídeo: ",
    video_format: "Formato do vídeo (ex: mp4): ",
    video_duration: "Duração do vídeo (em segundos): ",
    invalid_duration: "Duração inválida. Digite um número inteiro de segundos.",
    photo_filename: "Nome do arquivo da foto: ",
    photo_format: "Formato da foto (ex: jpg): ",
    file_filename: "Nome do arquivo: ",
    file_format: "Formato do arquivo (ex: pdf): ",
    sending: "Enviando mensagem...",
    ask_continue: "Deseja enviar outra mensagem? (s/n): ",
    continue_key: "s",
    goodbye: "Até logo!",
    text_label: "Texto",
    video_label: "Vídeo",
    photo_label: "Foto",
    file_label: "Arquivo",
};
