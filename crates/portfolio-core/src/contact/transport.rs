//! Delivery of contact messages.

use std::future::Future;
use std::time::Duration;

use crate::contact::ContactMessage;
use crate::error::SiteResult;

/// Something that can carry a contact message off the page.
///
/// Implementations may be written as `async fn deliver`; the returned
/// future must be `Send` so submissions can run on any executor.
pub trait ContactTransport {
    fn deliver(&self, message: &ContactMessage) -> impl Future<Output = SiteResult<()>> + Send;
}

/// Stand-in transport: waits out a fixed latency and always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn deliver(&self, message: &ContactMessage) -> SiteResult<()> {
        tokio::time::sleep(self.latency).await;
        tracing::info!(
            name = %message.name,
            email = %message.email,
            "contact message accepted (simulated)"
        );
        Ok(())
    }
}
