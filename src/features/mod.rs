//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod dictionary;

pub use dictionary::{DictionaryClient, Entry, ErrorKind, LookupError, LookupResult};
