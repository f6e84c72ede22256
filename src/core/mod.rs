pub mod commands;
pub mod config;
pub mod format;
pub mod i18n;
pub mod state;
