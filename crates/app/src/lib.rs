#![warn(clippy::pedantic)]

pub mod commands;
pub mod log;
pub mod settings;
