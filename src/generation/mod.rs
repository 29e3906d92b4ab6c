//! Generation domain - placeholder extraction and usage-code rendering
//!
//! Everything here is a pure function of an already-fetched
//! [`TemplateRecord`](crate::catalog::TemplateRecord) plus a [`Clock`]
//! reading; nothing is cached between calls.

pub mod clock;
pub mod types;
pub mod usage;
pub mod variables;

pub use clock::*;
pub use types::*;
pub use usage::*;
pub use variables::*;
