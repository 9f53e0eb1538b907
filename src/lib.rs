pub mod channels;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod messages;
