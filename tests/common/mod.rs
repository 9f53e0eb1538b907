//! 集成测试公共辅助函数

#![allow(dead_code)]

use std::io::Cursor;

use chrono::{NaiveDate, NaiveDateTime};

use msgcast::cli::{Prompter, Session};
use msgcast::i18n::Language;
use msgcast::messages::FixedClock;

/// 2024-02-29 18:45:30, the instant every test clock is pinned to
pub fn test_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(18, 45, 30)
        .unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(test_instant())
}

/// Join answers into console input, one per line
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// 用内存输入输出跑一次完整会话，返回 (发送数, 输出文本)
pub fn run_session(input: &str, language: Language) -> (usize, String) {
    let clock = test_clock();
    let prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
    let mut session = Session::new(prompter, &clock, language);
    let sent = session.run().expect("会话运行失败");
    let output = String::from_utf8(session.into_output()).expect("输出不是 UTF-8");
    (sent, output)
}

/// Delivery lines only: everything that starts with a channel tag
pub fn delivery_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|l| {
            ["[WhatsApp - ", "[Telegram - ", "[Facebook - ", "[Instagram - "]
                .iter()
                .any(|p| l.starts_with(p))
        })
        .map(String::from)
        .collect()
}
