//! Multi-step calls that report only their first step.
//!
//! A [`FirstResponse`] holds the authoritative response of the first step.
//! Later steps are attached with [`FirstResponse::then_discard`]: they run only
//! while the first step stands as a success, and whatever they return is
//! dropped. Transport errors from a later step still propagate.

use crate::domain::response::GatewayResponse;
use crate::error::Result;
use std::future::Future;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct FirstResponse {
    first: GatewayResponse,
}

impl FirstResponse {
    pub fn new(first: GatewayResponse) -> Self {
        Self { first }
    }

    /// Runs `step` for its side effect and discards its response.
    ///
    /// `step` receives the first response so it can reference its
    /// authorization. It is never called when the first step failed.
    pub async fn then_discard<F, Fut>(self, step: F) -> Result<Self>
    where
        F: FnOnce(&GatewayResponse) -> Fut,
        Fut: Future<Output = Result<GatewayResponse>>,
    {
        if !self.first.success {
            debug!("First step failed, skipping follow-up step");
            return Ok(self);
        }

        let discarded = step(&self.first).await?;
        if !discarded.success {
            warn!(
                message = discarded.message.as_deref().unwrap_or_default(),
                "Follow-up step failed, result discarded"
            );
        }
        Ok(self)
    }

    pub fn into_response(self) -> GatewayResponse {
        self.first
    }
}
