//! Define command handler
//!
//! Handles: define
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::time::Instant;
use uuid::Uuid;

use crate::commands::definition::{ArgumentDefinition, CommandDefinition};
use crate::commands::handler::{CommandFailure, SlashCommandHandler};
use crate::core::{CommandResponse, LookupConfig};
use crate::features::dictionary::{render, DictionaryClient, LookupError};

/// Trigger token, without the slash
pub const TRIGGER: &str = "define";

/// Literal prefix stripped from the command text
pub const COMMAND_PREFIX: &str = "/define ";

/// Raw query term from the full command text.
///
/// Only the exact `"/define "` prefix is removed; when it is absent the text
/// comes back unchanged. No other trimming happens.
pub fn extract_term(command_text: &str) -> &str {
    command_text
        .strip_prefix(COMMAND_PREFIX)
        .unwrap_or(command_text)
}

pub fn define_definition() -> CommandDefinition {
    CommandDefinition {
        trigger: TRIGGER,
        display_name: "Urban Dictionary",
        description: "Urban Dictionary plugin which provides the /define command",
        auto_complete: true,
        auto_complete_desc:
            "/define word will look up word on Urban Dictionary and insert its definition into chat.",
        auto_complete_hint: "[word]",
        argument: Some(ArgumentDefinition {
            name: "word",
            description: "The word or phrase to look up",
            required: true,
        }),
    }
}

/// Looks a word up on Urban Dictionary and posts the first definition
#[derive(Clone)]
pub struct DefineHandler {
    client: DictionaryClient,
}

impl DefineHandler {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        Ok(Self::with_client(DictionaryClient::new(config)?))
    }

    pub fn with_client(client: DictionaryClient) -> Self {
        Self { client }
    }

    /// Handle `/define <term>` end to end.
    ///
    /// An empty result list is a normal, requester-only response. Transport,
    /// read, and decode failures come back as errors and nothing is rendered.
    pub async fn lookup(&self, command_text: &str) -> Result<CommandResponse, LookupError> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();
        let term = extract_term(command_text);

        info!("[{request_id}] /define command | Term: {term:?}");

        let result = self.client.define(term, request_id).await.map_err(|e| {
            error!(
                "[{request_id}] /define failed ({} error, status {:?}): {e}: {}",
                e.kind(),
                e.status(),
                e.detail()
            );
            e
        })?;

        let response = render(term, result.first());
        info!(
            "[{request_id}] /define completed in {:?} | {} entries | {:?}",
            start_time.elapsed(),
            result.list.len(),
            response.response_type
        );
        Ok(response)
    }
}

#[async_trait]
impl SlashCommandHandler for DefineHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[TRIGGER]
    }

    fn definitions(&self) -> Vec<CommandDefinition> {
        vec![define_definition()]
    }

    async fn execute(&self, command_text: &str) -> Result<CommandResponse, CommandFailure> {
        self.lookup(command_text).await.map_err(CommandFailure::from)
    }
}
