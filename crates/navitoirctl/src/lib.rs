//! Navitoir Control - terminal host for the Navitoir engine.

pub mod config;
pub mod content;
pub mod render;
pub mod repl;
pub mod session;
pub mod store;

pub use config::NavitoirConfig;
pub use content::ContentRegistry;
pub use session::{Session, Turn};
pub use store::JsonFileStore;
