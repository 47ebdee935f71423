#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod chunk;
mod classify;
mod error;
mod message;
mod program;
mod render;
mod service;
mod taxonomy;
mod user;

pub use chunk::*;
pub use classify::*;
pub use error::*;
pub use message::*;
pub use program::*;
pub use render::*;
pub use service::*;
pub use taxonomy::*;
pub use user::*;
