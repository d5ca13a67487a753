//! Per-credential request admission.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderMap;

use crate::domain::clock::Clock;
use crate::domain::repositories::ThrottleStore;
use crate::utils::credential::extract_credential;

/// Reason reported to clients whose request was throttled.
pub const THROTTLED_MESSAGE: &str = "Token limit reached, operation cancelled";

/// Minimum spacing between two requests carrying the same credential.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(5);

/// Path prefix protected by default.
pub const DEFAULT_PATH_PREFIX: &str = "/api/games";

/// Verdict of the admission gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Denied(String),
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }
}

/// Decides whether a request may proceed to business logic.
///
/// # Policy
///
/// Only requests under the protected path prefix are considered; everything
/// else is admitted without touching the store.
///
/// 1. No bearer credential → allowed (unattributed traffic is never throttled)
/// 2. Credential never seen → allowed
/// 3. Previous request less than `window` ago → denied
/// 4. Otherwise → allowed
///
/// Every evaluation of a credential records the current time, whatever the
/// verdict. A client that keeps retrying inside the window keeps extending
/// its own lockout; one that waits out the window once is admitted again.
/// There is no burst allowance.
pub struct AdmissionGate {
    store: Arc<dyn ThrottleStore>,
    clock: Arc<dyn Clock>,
    path_prefix: String,
    window: Duration,
}

impl AdmissionGate {
    /// Creates a gate protecting `path_prefix` (matched case-insensitively).
    pub fn new(
        store: Arc<dyn ThrottleStore>,
        clock: Arc<dyn Clock>,
        path_prefix: impl Into<String>,
        window: Duration,
    ) -> Self {
        let path_prefix = path_prefix.into().trim_end_matches('/').to_ascii_lowercase();
        Self {
            store,
            clock,
            path_prefix,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Number of credentials currently tracked by the underlying store.
    pub fn tracked_credentials(&self) -> usize {
        self.store.len()
    }

    /// Returns whether `path` falls under the protected prefix.
    ///
    /// Matching is case-insensitive and respects segment boundaries:
    /// `/api/games` and `/api/games/42` match, `/api/gamesroom` does not.
    pub fn protects(&self, path: &str) -> bool {
        let prefix_len = self.path_prefix.len();

        match path.get(..prefix_len) {
            Some(head) if head.eq_ignore_ascii_case(&self.path_prefix) => {
                prefix_len == 0 || matches!(path.as_bytes().get(prefix_len), None | Some(b'/'))
            }
            _ => false,
        }
    }

    /// Evaluates a request given its path and headers.
    pub fn admit(&self, path: &str, headers: &HeaderMap) -> Admission {
        if !self.protects(path) {
            return Admission::Allowed;
        }

        match extract_credential(headers) {
            Some(credential) => self.admit_credential(&credential),
            None => Admission::Allowed,
        }
    }

    /// Applies the throttle policy to a credential at the current time.
    ///
    /// A window too long to be represented after `previous` never ends.
    pub fn admit_credential(&self, credential: &str) -> Admission {
        let now = self.clock.now();

        let verdict = match self.store.peek_and_touch(credential, now) {
            Some(previous) if previous.checked_add(self.window).is_none_or(|end| now < end) => {
                Admission::Denied(THROTTLED_MESSAGE.to_string())
            }
            _ => Admission::Allowed,
        };

        match &verdict {
            Admission::Allowed => metrics::counter!("admission_allowed_total").increment(1),
            Admission::Denied(reason) => {
                tracing::info!("{}", reason);
                metrics::counter!("admission_denied_total").increment(1);
            }
        }

        verdict
    }
}
