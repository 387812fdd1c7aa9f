pub mod chat;
pub mod config;
pub mod game;
pub mod identifiers;
pub mod logger;

pub use identifiers::*;
