//! Admission gate as a request filter.

use axum::http::request::Parts;

use crate::api::middleware::filter_chain::{FilterOutcome, RequestFilter};
use crate::application::services::{Admission, AdmissionGate};
use crate::error::AppError;

/// Rejects throttled requests with `429 Too Many Requests`.
///
/// The response body is the error envelope carrying the denial reason; the
/// request never reaches a handler.
impl RequestFilter for AdmissionGate {
    fn name(&self) -> &'static str {
        "admission"
    }

    fn check(&self, parts: &Parts) -> FilterOutcome {
        match self.admit(parts.uri.path(), &parts.headers) {
            Admission::Allowed => FilterOutcome::Continue,
            Admission::Denied(reason) => FilterOutcome::Reject(AppError::throttled(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::admission_gate::{
        DEFAULT_PATH_PREFIX, DEFAULT_WINDOW, THROTTLED_MESSAGE,
    };
    use crate::domain::clock::ManualClock;
    use crate::infrastructure::throttle::InMemoryThrottleStore;
    use axum::http::{Request, header};
    use std::sync::Arc;

    fn parts(path: &str, token: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn gate() -> AdmissionGate {
        AdmissionGate::new(
            Arc::new(InMemoryThrottleStore::new(DEFAULT_WINDOW, 100)),
            Arc::new(ManualClock::new()),
            DEFAULT_PATH_PREFIX,
            DEFAULT_WINDOW,
        )
    }

    #[test]
    fn test_repeat_request_rejected_as_throttled() {
        let gate = gate();

        assert!(matches!(
            gate.check(&parts("/api/games", Some("t"))),
            FilterOutcome::Continue
        ));

        match gate.check(&parts("/api/games/1", Some("t"))) {
            FilterOutcome::Reject(AppError::Throttled(reason)) => {
                assert_eq!(reason, THROTTLED_MESSAGE)
            }
            other => panic!("expected throttled rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_query_string_does_not_affect_matching() {
        let gate = gate();

        gate.check(&parts("/api/games?page=1", Some("t")));

        assert!(matches!(
            gate.check(&parts("/api/games?page=2", Some("t"))),
            FilterOutcome::Reject(_)
        ));
    }
}
