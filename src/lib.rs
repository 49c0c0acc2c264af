pub mod common;
pub mod config;
pub mod console;
pub mod error;
pub mod network;
pub mod ui;

pub use error::{AppError, DispatchError, ErrorKind, Result};
