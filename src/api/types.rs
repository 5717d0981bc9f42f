//! Shared types for the API layer.

use std::sync::Arc;

use crate::pipeline::Engine;

/// Shared context for all API routes and middleware.
///
/// The engine is immutable after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<Engine>,
}

impl ApiContext {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

/// Per-request identifier, injected by the request-log middleware.
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub uuid::Uuid);
