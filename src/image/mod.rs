mod client;
mod prompt;

pub use client::*;
pub use prompt::*;
