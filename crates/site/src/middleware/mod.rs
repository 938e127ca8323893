//! HTTP middleware for the site.

pub mod session;

pub use session::{create_session_layer, load_store, save_store};
