//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: DefineHandler (Urban Dictionary lookup)

pub mod define;

use anyhow::Result;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use crate::core::LookupConfig;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers(config: &LookupConfig) -> Result<Vec<Arc<dyn SlashCommandHandler>>> {
    let define: Arc<dyn SlashCommandHandler> = Arc::new(define::DefineHandler::new(config)?);
    Ok(vec![define])
}
