//! Uniform result envelope returned by every endpoint.
//!
//! # Wire Format
//!
//! ```json
//! { "data": { ... }, "errors": [], "isSuccess": true }
//! ```
//!
//! List endpoints add paging metadata:
//!
//! ```json
//! {
//!   "data": [ ... ],
//!   "page": 2,
//!   "pageSize": 10,
//!   "totalCount": 25,
//!   "totalPages": 3,
//!   "errors": [],
//!   "isSuccess": true
//! }
//! ```
//!
//! `isSuccess` is never stored; it is computed from `errors` at
//! serialization time.

use std::error::Error as StdError;

use serde::{Serialize, Serializer};

use crate::application::pagination::PagedList;

/// Returns the message of the innermost error in a `source()` chain.
///
/// Outer errors usually wrap the original failure with generic context
/// ("request failed", "internal error"); only the innermost message is
/// reported to clients.
pub fn root_cause_message(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}

/// Envelope for a single value (or none, on failure).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    data: Option<T>,
    errors: Vec<String>,
}

impl<T> ApiResult<T> {
    /// Successful result carrying `value`.
    pub fn wrap_data(value: T) -> Self {
        Self {
            data: Some(value),
            errors: Vec::new(),
        }
    }

    /// Failed result with a single error message.
    pub fn wrap_error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
        }
    }

    /// Failed result reporting the root cause of `err`.
    pub fn wrap_exception(err: &(dyn StdError + 'static)) -> Self {
        Self::wrap_error(root_cause_message(err))
    }

    /// Successful result without a payload.
    pub fn empty() -> Self {
        Self {
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiResultWire<'a, T> {
    data: Option<&'a T>,
    errors: &'a [String],
    is_success: bool,
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ApiResultWire {
            data: self.data.as_ref(),
            errors: &self.errors,
            is_success: self.is_success(),
        }
        .serialize(serializer)
    }
}

/// Envelope for one page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedApiResult<T> {
    data: Vec<T>,
    page: u32,
    page_size: u32,
    total_count: u64,
    errors: Vec<String>,
}

impl<T> PagedApiResult<T> {
    /// Wraps a page produced by [`crate::application::pagination::paginate`].
    pub fn wrap_paged(list: PagedList<T>) -> Self {
        Self {
            data: list.items,
            page: list.page,
            page_size: list.page_size,
            total_count: list.total_count,
            errors: Vec::new(),
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// `ceil(total_count / page_size)`; zero for an empty collection.
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size.max(1)))
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PagedApiResultWire<'a, T> {
    data: &'a [T],
    page: u32,
    page_size: u32,
    total_count: u64,
    total_pages: u64,
    errors: &'a [String],
    is_success: bool,
}

impl<T: Serialize> Serialize for PagedApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PagedApiResultWire {
            data: &self.data,
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages(),
            errors: &self.errors,
            is_success: self.is_success(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pagination::paginate;
    use serde_json::json;

    #[derive(Debug, thiserror::Error)]
    #[error("C: connection refused")]
    struct Innermost;

    #[derive(Debug, thiserror::Error)]
    #[error("B: repository unavailable")]
    struct Middle(#[source] Innermost);

    #[derive(Debug, thiserror::Error)]
    #[error("A: request failed")]
    struct Outer(#[source] Middle);

    #[test]
    fn test_wrap_data() {
        let result = ApiResult::wrap_data(42);

        assert_eq!(result.data(), Some(&42));
        assert!(result.errors().is_empty());
        assert!(result.is_success());
    }

    #[test]
    fn test_wrap_error() {
        let result = ApiResult::<()>::wrap_error("boom");

        assert!(result.data().is_none());
        assert_eq!(result.errors(), ["boom"]);
        assert!(!result.is_success());
    }

    #[test]
    fn test_wrap_exception_reports_innermost_cause() {
        let err = Outer(Middle(Innermost));

        let result = ApiResult::<()>::wrap_exception(&err);

        assert_eq!(result.errors(), ["C: connection refused"]);
    }

    #[test]
    fn test_wrap_exception_without_cause() {
        let result = ApiResult::<()>::wrap_exception(&Innermost);
        assert_eq!(result.errors(), ["C: connection refused"]);
    }

    #[test]
    fn test_root_cause_through_anyhow() {
        let err = anyhow::Error::new(Innermost).context("loading seed");
        let boxed: Box<dyn StdError + Send + Sync> = err.into();

        assert_eq!(root_cause_message(boxed.as_ref()), "C: connection refused");
    }

    #[test]
    fn test_add_error_flips_success() {
        let mut result = ApiResult::wrap_data("value");
        assert!(result.is_success());

        result.add_error("late failure");

        assert!(!result.is_success());
    }

    #[test]
    fn test_serialize_success() {
        let value = serde_json::to_value(ApiResult::wrap_data(json!({ "id": "g1" }))).unwrap();

        assert_eq!(
            value,
            json!({ "data": { "id": "g1" }, "errors": [], "isSuccess": true })
        );
    }

    #[test]
    fn test_serialize_error() {
        let value = serde_json::to_value(ApiResult::<()>::wrap_error(
            "Token limit reached, operation cancelled",
        ))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "data": null,
                "errors": ["Token limit reached, operation cancelled"],
                "isSuccess": false
            })
        );
    }

    #[test]
    fn test_serialize_paged() {
        let page = paginate((1..=25).collect::<Vec<u32>>(), 2, 10).unwrap();
        let value = serde_json::to_value(PagedApiResult::wrap_paged(page)).unwrap();

        assert_eq!(
            value,
            json!({
                "data": [11, 12, 13, 14, 15, 16, 17, 18, 19, 20],
                "page": 2,
                "pageSize": 10,
                "totalCount": 25,
                "totalPages": 3,
                "errors": [],
                "isSuccess": true
            })
        );
    }

    #[test]
    fn test_total_pages_empty_collection() {
        let page = paginate(Vec::<u32>::new(), 1, 10).unwrap();
        let result = PagedApiResult::wrap_paged(page);

        assert_eq!(result.total_count(), 0);
        assert_eq!(result.total_pages(), 0);
        assert!(result.data().is_empty());
    }
}
