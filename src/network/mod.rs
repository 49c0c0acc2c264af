pub mod backend;
pub mod client;
pub mod dispatcher;

pub use backend::ChatBackend;
pub use client::ChatClient;
pub use dispatcher::{Dispatcher, ERROR_TEXT};
