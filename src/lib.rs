pub mod config;
pub mod error;
pub mod image;
pub mod server;
pub mod text;

pub use error::{Error, Result};
