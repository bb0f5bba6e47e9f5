//! Urban Dictionary response payload

use serde::{Deserialize, Serialize};

/// Decoded body of `GET /v0/define`
///
/// Only `list` is read; anything else the service sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupResult {
    pub list: Vec<Entry>,
}

impl LookupResult {
    /// First entry, if the service returned any
    pub fn first(&self) -> Option<&Entry> {
        self.list.first()
    }
}

/// One definition record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}
