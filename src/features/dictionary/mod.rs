//! # Dictionary Feature
//!
//! Urban Dictionary lookups: the HTTP client, the decoded payload, the
//! failure taxonomy, and the text rendered back into chat.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod client;
pub mod error;
pub mod formatter;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{encode_term, DictionaryClient};
pub use error::{ErrorKind, LookupError};
pub use formatter::{format_definition, format_no_results, render};
pub use types::{Entry, LookupResult};
