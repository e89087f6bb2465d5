pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod question;
pub mod state;
pub mod timer;
pub mod utils;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
