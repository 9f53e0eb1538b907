use std::io::{BufRead, Write};

use color_eyre::eyre::{Context, Result};

/// Line-oriented console I/O over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).wrap_err("写入输出失败")
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The trailing line break is removed,
    /// anything else is returned as typed.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).wrap_err("写入输出失败")?;
        self.output.flush().wrap_err("刷新输出失败")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).wrap_err("读取输入失败")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_break_only() {
        let mut p = Prompter::new(Cursor::new("  hello \r\nnext\n"), Vec::new());
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("  hello "));
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn ask_returns_none_at_eof() {
        let mut p = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut p = Prompter::new(Cursor::new("tail"), Vec::new());
        assert_eq!(p.ask("").unwrap().as_deref(), Some("tail"));
        assert_eq!(p.ask("").unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut p = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(p.ask("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn say_appends_newline() {
        let mut p = Prompter::new(Cursor::new(""), Vec::new());
        p.say("hi").unwrap();
        assert_eq!(p.output().as_slice(), b"hi\n");
    }
}
