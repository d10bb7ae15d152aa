pub mod client;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;

pub use client::{BlinkClient, Session};
pub use commands::*;
pub use error::{BlinkError, Result};
