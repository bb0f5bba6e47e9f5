// Core layer - shared types and configuration
pub mod core;

// Features layer - dictionary lookups
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

pub use self::core::{CommandResponse, Config, LookupConfig, ResponseType};

pub use commands::{CommandDispatcher, CommandFailure, CommandRegistry, SlashCommandHandler};

pub use features::{DictionaryClient, Entry, ErrorKind, LookupError, LookupResult};
