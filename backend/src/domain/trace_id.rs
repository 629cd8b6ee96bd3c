//! Request-scoped trace identifier for correlating diagnostics.
//!
//! `TraceId` lives in tokio task-local storage for the duration of a request
//! so diagnostics adapters can attach it without threading it through the
//! gateway. Task-locals are not inherited by spawned tasks; wrap spawned work
//! in [`TraceId::scope`] to keep correlation.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request correlation identifier.
///
/// # Examples
/// ```
/// use planned_production::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
///     .parse()
///     .expect("valid UUID");
/// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
/// assert_eq!(observed, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accept a caller-supplied identifier only when it is a UUID.
    ///
    /// Connectors in front of this service may already have assigned a
    /// correlation id; anything else is ignored and a fresh id is used.
    #[must_use]
    pub fn from_header_or_generate(header: Option<&str>) -> Self {
        header
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Returns the current trace identifier if one is in scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Execute the provided future with the supplied trace identifier in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn header_uuid_is_honoured() {
        let trace_id =
            TraceId::from_header_or_generate(Some(" 6f1c2a8e-2b8f-4b7e-9a55-0d1f3c0e9b21 "));
        assert_eq!(
            trace_id.to_string(),
            "6f1c2a8e-2b8f-4b7e-9a55-0d1f3c0e9b21"
        );
    }

    #[rstest]
    #[case::missing(None)]
    #[case::not_a_uuid(Some("req-42"))]
    #[case::injected(Some("6f1c2a8e-2b8f-4b7e-9a55-0d1f3c0e9b21\nforged"))]
    fn invalid_headers_fall_back_to_a_fresh_id(#[case] header: Option<&str>) {
        let trace_id = TraceId::from_header_or_generate(header);
        assert_eq!(trace_id.as_uuid().get_version_num(), 4);
    }
}
