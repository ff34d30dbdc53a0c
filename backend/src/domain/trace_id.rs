//! Per-request correlation id shared by the trace middleware, handler logs
//! and the error envelope.
//!
//! The id is held in a Tokio task-local for the lifetime of one request.
//! Work moved onto another task loses it unless re-entered with
//! [`TraceId::scope`].

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Log label used when no request is in flight.
pub const UNSCOPED_LABEL: &str = "none";

task_local! {
    static CURRENT: TraceId;
}

/// Random (v4) identifier assigned to one HTTP request.
///
/// Renders in hyphenated UUID form, which is also the header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Draw a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Current identifier rendered for a log field, or [`UNSCOPED_LABEL`].
    #[must_use]
    pub fn current_label() -> String {
        Self::current().map_or_else(|| UNSCOPED_LABEL.to_owned(), |id| id.to_string())
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use users_api::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let trace_id = TraceId::generate();
    /// let label = TraceId::scope(trace_id, async { TraceId::current_label() }).await;
    /// assert_eq!(label, trace_id.to_string());
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
