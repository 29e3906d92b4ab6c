//! Template catalog - fetching and holding the list of email templates

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
