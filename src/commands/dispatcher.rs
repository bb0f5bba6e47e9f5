//! Routes raw command text to its handler

use log::{debug, warn};
use std::sync::Arc;

use super::handler::{CommandFailure, SlashCommandHandler};
use super::handlers::create_all_handlers;
use super::registry::CommandRegistry;
use crate::core::{CommandResponse, LookupConfig};

/// Entry point for command text coming from the host platform
#[derive(Clone)]
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Dispatcher with every built-in handler registered
    pub fn with_default_handlers(config: &LookupConfig) -> anyhow::Result<Self> {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers(config)? {
            registry.register(handler);
        }
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn resolve(&self, command_text: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.registry
            .find_by_prefix(command_text)
            .map(|(_, handler)| handler)
    }

    /// Run the command named by `command_text`.
    ///
    /// Text that matches no registered trigger yields `Ok(None)`; the host
    /// only routes registered triggers here, so this is not an error.
    pub async fn dispatch(
        &self,
        command_text: &str,
    ) -> Result<Option<CommandResponse>, CommandFailure> {
        match self.resolve(command_text) {
            Some(handler) => {
                debug!("Dispatching command text: {command_text}");
                handler.execute(command_text).await.map(Some)
            }
            None => {
                warn!("No handler registered for command text: {command_text}");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResponseType;
    use crate::features::dictionary::test_support::refused_endpoint;
    use crate::features::dictionary::ErrorKind;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dispatcher_for(endpoint: String) -> CommandDispatcher {
        CommandDispatcher::with_default_handlers(&LookupConfig {
            endpoint,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_default_handlers_register_define_only() {
        let dispatcher = dispatcher_for("http://localhost:9999/v0/define".to_string());
        let registry = dispatcher.registry();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("define"));
        assert_eq!(registry.definitions().len(), 1);
        assert_eq!(registry.definitions()[0].trigger, "define");
    }

    #[tokio::test]
    async fn test_dispatch_routes_define() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("term", "cat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"list":[{"definition":"D","example":"E"}]}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(format!("{}/v0/define", server.uri()));
        let response = dispatcher.dispatch("/define cat").await.unwrap().unwrap();

        assert_eq!(response.response_type, ResponseType::InChannel);
        assert_eq!(response.text, "*****\n**cat**:\n\nD\n\nExample(s):\n\nE\n*****\n");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_trigger_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"list":[]}"#))
            .expect(0)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(format!("{}/v0/define", server.uri()));
        assert!(dispatcher.dispatch("/lennyface hi").await.unwrap().is_none());
        assert!(dispatcher.dispatch("define cat").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dispatch_surfaces_failure() {
        let dispatcher = dispatcher_for(refused_endpoint());
        let failure = dispatcher.dispatch("/define cat").await.unwrap_err();

        assert_eq!(failure.kind, ErrorKind::Transport);
        assert_eq!(failure.message, "/define making a request got an error");
        assert!(failure.status_code.is_none());
    }
}
