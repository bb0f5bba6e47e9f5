//! Command registration metadata

use serde::Serialize;

/// How a command is advertised to the chat platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    /// Trigger without the leading `/`
    pub trigger: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub auto_complete: bool,
    pub auto_complete_desc: &'static str,
    pub auto_complete_hint: &'static str,
    /// Free-text argument following the trigger, if any
    pub argument: Option<ArgumentDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl CommandDefinition {
    /// Text the user types to invoke the command, e.g. `/define`
    pub fn invocation(&self) -> String {
        format!("/{}", self.trigger)
    }
}
