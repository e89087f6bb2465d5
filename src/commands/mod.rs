pub mod ask;
pub mod config;
pub mod document;
pub mod examples;
pub mod session;
