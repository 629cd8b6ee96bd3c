//! Driving port for serving planned production submodel requests.
//!
//! Inbound adapters hand the three raw request fields to this port and map
//! the returned [`ResponseClass`] onto their protocol.

use async_trait::async_trait;

use crate::domain::ResponseClass;

/// Domain use-case port for answering a submodel request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlannedProductionRequests: Send + Sync {
    /// Validate the raw fields, look up the document, and classify the
    /// outcome. Never fails: every path yields a [`ResponseClass`].
    async fn handle_request(
        &self,
        partner: &str,
        material: &str,
        representation: &str,
    ) -> ResponseClass;
}
