//! # Command System
//!
//! Slash command handling: handler trait, registry, dispatcher, and the
//! Discord registration layer.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod definition;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

// Re-export the Discord-facing CommandHandler
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use definition::{ArgumentDefinition, CommandDefinition};
pub use dispatcher::CommandDispatcher;
pub use handler::{CommandFailure, SlashCommandHandler};
pub use registry::CommandRegistry;

pub use slash::{
    create_slash_commands, get_string_option, register_global_commands, register_guild_commands,
};
