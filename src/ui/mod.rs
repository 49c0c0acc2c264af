pub mod app;
pub mod components;
pub mod greeting;
pub mod state;
pub mod surface;

pub use app::ChatApp;
pub use state::AppState;
pub use surface::{ChatSurface, InputField, Transcript};
