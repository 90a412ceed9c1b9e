pub mod component;
pub mod config;
pub mod error;
pub mod front_end;
pub mod init;
pub mod tools;

rust_i18n::i18n!("locales", fallback = "en-US");
