//! # Slash Commands (/)
//!
//! Discord registration of the command definitions and option helpers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::{Command, CommandOptionType};
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

use super::definition::CommandDefinition;

/// Discord's maximum length for command and option descriptions
const DESCRIPTION_LIMIT: usize = 100;

/// Build the Discord command for one definition
pub fn create_slash_command(definition: &CommandDefinition) -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(definition.trigger)
        .description(clip_description(definition.description));

    if let Some(argument) = &definition.argument {
        command.create_option(|option| {
            option
                .name(argument.name)
                .description(clip_description(argument.description))
                .kind(CommandOptionType::String)
                .required(argument.required)
        });
    }
    command
}

/// Creates all slash command definitions
pub fn create_slash_commands(definitions: &[CommandDefinition]) -> Vec<CreateApplicationCommand> {
    definitions.iter().map(create_slash_command).collect()
}

fn clip_description(text: &str) -> String {
    text.chars().take(DESCRIPTION_LIMIT).collect()
}

/// Registers slash commands globally
pub async fn register_global_commands(
    ctx: &Context,
    definitions: &[CommandDefinition],
) -> Result<()> {
    let slash_commands = create_slash_commands(definitions);
    let count = slash_commands.len();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global slash commands registered successfully ({count} commands)");
    Ok(())
}

/// Registers slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(
    ctx: &Context,
    guild_id: GuildId,
    definitions: &[CommandDefinition],
) -> Result<()> {
    let slash_commands = create_slash_commands(definitions);
    let count = slash_commands.len();

    guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("Guild slash commands registered for guild {guild_id} ({count} commands)");
    Ok(())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
