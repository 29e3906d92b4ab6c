//! Template catalog library
//!
//! Fetches email templates from a remote catalog, extracts their `{{variable}}`
//! placeholders and generates `sendTemplateEmail` usage code for them.

#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod generation;
pub mod preferences;
pub mod shell;
pub mod view;

pub use error::{Error, Result};
