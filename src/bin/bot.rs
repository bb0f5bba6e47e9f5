use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use define_bot::commands::{
    register_global_commands, register_guild_commands, CommandDefinition, CommandHandler,
};
use define_bot::core::Config;

struct Handler {
    command_handler: Arc<CommandHandler>,
    definitions: Vec<CommandDefinition>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(command_handler: CommandHandler, guild_id: Option<GuildId>) -> Self {
        let definitions = command_handler
            .dispatcher()
            .registry()
            .definitions()
            .to_vec();
        Handler {
            command_handler: Arc::new(command_handler),
            definitions,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());

        for definition in &self.definitions {
            info!(
                "   - {} ({}): {}",
                definition.invocation(),
                definition.display_name,
                definition.auto_complete_desc
            );
        }

        let result = match self.guild_id {
            Some(guild_id) => {
                info!("Registering commands for development guild {guild_id}");
                register_guild_commands(&ctx, guild_id, &self.definitions).await
            }
            None => register_global_commands(&ctx, &self.definitions).await,
        };
        if let Err(e) = result {
            error!("Failed to register slash commands: {e}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = self
                    .command_handler
                    .handle_slash_command(&ctx, &command)
                    .await
                {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );
                }
            }
            _ => debug!("Ignoring non-command interaction"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting /define Discord bot...");

    let lookup_config = config.lookup_config();
    info!(
        "Dictionary endpoint: {} (timeout {:?})",
        lookup_config.endpoint, lookup_config.timeout
    );
    let command_handler = CommandHandler::from_config(&lookup_config)?;

    // Parse guild ID if provided for development mode
    let guild_id = config
        .discord_guild_id
        .as_ref()
        .and_then(|id| id.parse::<u64>().ok())
        .map(GuildId);

    let handler = Handler::new(command_handler, guild_id);

    // Slash commands only need the guild intent
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
