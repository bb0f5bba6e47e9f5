//! Command handler registry
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Prefix lookup on raw command text, collected definitions
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::definition::CommandDefinition;
use super::handler::SlashCommandHandler;

/// Registry mapping command triggers to handlers
///
/// Multiple triggers can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(DefineHandler::new(&LookupConfig::default())?));
///
/// if let Some(handler) = registry.get("define") {
///     let response = handler.execute("/define yeet").await?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            definitions: Vec::new(),
        }
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
        self.definitions.extend(handler.definitions());
    }

    /// Get handler for a trigger name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Find the handler whose `/trigger` prefixes the command text.
    ///
    /// When several triggers match, the longest one wins.
    pub fn find_by_prefix(
        &self,
        command_text: &str,
    ) -> Option<(&'static str, Arc<dyn SlashCommandHandler>)> {
        let body = command_text.strip_prefix('/')?;
        self.handlers
            .iter()
            .filter(|(name, _)| body.starts_with(**name))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, handler)| (*name, Arc::clone(handler)))
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get all registered command names
    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }

    /// Registration metadata of every registered handler, in registration order
    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
