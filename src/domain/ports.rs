use crate::error::Result;
use async_trait::async_trait;

/// Carries one serialized request to the processor.
///
/// Implementations return the raw response body, or `None` when the processor
/// sent none. Connectivity failures are returned as errors and are never
/// retried by the gateway.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, body: String) -> Result<Option<String>>;
}

pub type TransportBox = Box<dyn Transport>;

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, url: &str, body: String) -> Result<Option<String>> {
        (**self).send(url, body).await
    }
}
