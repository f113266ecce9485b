use crate::gateway::PromptGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub gateway: PromptGateway,
}
