use crate::commands::dispatcher::CommandDispatcher;
use crate::commands::handler::CommandFailure;
use crate::commands::slash::get_string_option;
use crate::core::{truncate_for_message, CommandResponse, LookupConfig};
use anyhow::Result;
use log::{debug, error, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Shown to the user when a command fails; the details go to the log
pub const GENERIC_FAILURE_MESSAGE: &str =
    "❌ Sorry, I couldn't complete that command. Please try again later.";

/// Rebuild the text the user would have typed from a Discord interaction
pub fn command_text_for(name: &str, word: Option<&str>) -> String {
    match word {
        Some(word) => format!("/{name} {word}"),
        None => format!("/{name}"),
    }
}

/// Bridges Discord interactions to the command dispatcher
#[derive(Clone)]
pub struct CommandHandler {
    dispatcher: Arc<CommandDispatcher>,
}

impl CommandHandler {
    pub fn new(dispatcher: CommandDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        Ok(Self::new(CommandDispatcher::with_default_handlers(config)?))
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();
        let user_id = command.user.id.to_string();
        let channel_id = command.channel_id.to_string();
        let guild_id = command
            .guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());

        info!(
            "[{request_id}] 📥 Slash command received | Command: {} | User: {user_id} | Channel: {channel_id} | Guild: {guild_id}",
            command.data.name
        );

        let argument = self
            .dispatcher
            .registry()
            .definitions()
            .iter()
            .find(|d| d.trigger == command.data.name)
            .and_then(|d| d.argument.as_ref())
            .map(|a| a.name);
        let word = argument.and_then(|name| get_string_option(&command.data.options, name));
        let command_text = command_text_for(&command.data.name, word.as_deref());

        // The lookup can outlast Discord's 3 second acknowledgement window
        debug!("[{request_id}] Deferring interaction response");
        command
            .create_interaction_response(&ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await
            .map_err(|e| {
                error!("[{request_id}] Failed to defer interaction: {e}");
                anyhow::anyhow!("Failed to defer interaction: {e}")
            })?;

        match self.dispatcher.dispatch(&command_text).await {
            Ok(Some(response)) => {
                self.send_response(ctx, command, &response).await?;
                info!(
                    "[{request_id}] ✅ /{} completed in {:?} for user {user_id}",
                    command.data.name,
                    start_time.elapsed()
                );
            }
            Ok(None) => {
                warn!(
                    "[{request_id}] No handler for /{}, removing deferred response",
                    command.data.name
                );
                command
                    .delete_original_interaction_response(&ctx.http)
                    .await?;
            }
            Err(failure) => {
                self.report_failure(ctx, command, request_id, &failure)
                    .await?;
            }
        }

        Ok(())
    }

    async fn send_response(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        response: &CommandResponse,
    ) -> Result<()> {
        let text = truncate_for_message(&response.text);

        if response.response_type.is_ephemeral() {
            // The deferred placeholder is public, so swap it for a private followup
            command
                .delete_original_interaction_response(&ctx.http)
                .await?;
            command
                .create_followup_message(&ctx.http, |m| m.content(text).ephemeral(true))
                .await?;
        } else {
            command
                .edit_original_interaction_response(&ctx.http, |r| r.content(text))
                .await?;
        }
        Ok(())
    }

    async fn report_failure(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
        failure: &CommandFailure,
    ) -> Result<()> {
        error!(
            "[{request_id}] /{} failed | kind: {} | status: {:?} | {failure}",
            command.data.name, failure.kind, failure.status_code
        );
        self.send_response(
            ctx,
            command,
            &CommandResponse::ephemeral(GENERIC_FAILURE_MESSAGE),
        )
        .await
    }
}
