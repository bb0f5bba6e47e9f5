//! Slash command handler trait and failure type
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for modular command handling

use async_trait::async_trait;
use serde::Serialize;

use super::definition::CommandDefinition;
use crate::core::CommandResponse;
use crate::features::dictionary::{ErrorKind, LookupError};

/// Trait for slash command handlers
///
/// Each handler owns one or more triggers. It receives the full command text
/// as typed (trigger included) and produces the response for the host to
/// render.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn definitions(&self) -> Vec<CommandDefinition> {
///         vec![]
///     }
///
///     async fn execute(&self, _command_text: &str) -> Result<CommandResponse, CommandFailure> {
///         Ok(CommandResponse::in_channel("Pong!"))
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Trigger(s) this handler processes, without the leading `/`
    fn command_names(&self) -> &'static [&'static str];

    /// Registration metadata for the host platform
    fn definitions(&self) -> Vec<CommandDefinition>;

    /// Run the command
    ///
    /// # Arguments
    ///
    /// * `command_text` - Full text as typed, e.g. `/define yeet`
    async fn execute(&self, command_text: &str) -> Result<CommandResponse, CommandFailure>;
}

/// A command that could not produce a response.
///
/// Carries what the host needs to report the failure: a short message, the
/// underlying cause, and the HTTP status when one was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFailure {
    pub kind: ErrorKind,
    pub message: String,
    pub detail: String,
    pub status_code: Option<u16>,
}

impl std::fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.detail)?;
        if let Some(status) = self.status_code {
            write!(f, " (HTTP {status})")?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

impl From<&LookupError> for CommandFailure {
    fn from(err: &LookupError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            detail: err.detail(),
            status_code: err.status(),
        }
    }
}

impl From<LookupError> for CommandFailure {
    fn from(err: LookupError) -> Self {
        Self::from(&err)
    }
}
