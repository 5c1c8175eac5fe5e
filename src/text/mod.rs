mod client;
mod shaping;
mod types;

pub use client::*;
pub use shaping::*;
pub use types::*;
