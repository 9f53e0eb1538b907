//! Console front end: interactive session and demo run

pub mod demo;
pub mod error;
pub mod prompt;
pub mod session;

pub use demo::run_demo;
pub use error::{InputError, Menu};
pub use prompt::Prompter;
pub use session::Session;

use color_eyre::eyre::Result;

use crate::i18n::Language;
use crate::messages::SystemClock;

/// 在 stdin/stdout 上运行交互会话，返回发送的消息数
pub fn run_interactive(language: Language) -> Result<usize> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    Session::new(prompter, &SystemClock, language).run()
}
