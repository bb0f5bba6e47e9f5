//! Text shown to the user for a lookup

use super::types::Entry;
use crate::core::CommandResponse;

/// Definition block for a found entry
pub fn format_definition(term: &str, entry: &Entry) -> String {
    format!(
        "*****\n**{term}**:\n\n{}\n\nExample(s):\n\n{}\n*****\n",
        entry.definition, entry.example
    )
}

pub fn format_no_results(term: &str) -> String {
    format!("Sorry! No results found for \"{term}\"")
}

/// Build the response for a term and the entry chosen for it.
///
/// A found entry is posted to the channel; a miss is only shown to the
/// requester.
pub fn render(term: &str, entry: Option<&Entry>) -> CommandResponse {
    match entry {
        Some(entry) => CommandResponse::in_channel(format_definition(term, entry)),
        None => CommandResponse::ephemeral(format_no_results(term)),
    }
}
