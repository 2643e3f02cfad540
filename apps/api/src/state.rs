use std::sync::Arc;

use crate::workflow::Workflow;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single coaching session this server hosts.
    pub workflow: Arc<Workflow>,
}
