pub mod handler;

pub use handler::{resolve_key, KeyAction};
