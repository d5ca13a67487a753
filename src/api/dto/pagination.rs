//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::application::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings. Values are parsed
/// as signed integers so that negative input is reported as a validation
/// error instead of a query rejection.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, alias = "pageSize")]
    pub size: Option<i64>,
}

impl PaginationParams {
    /// Validates pagination parameters and returns `(page, page_size)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `size`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be > 0
    /// - Both must fit in a `u32`
    pub fn validate(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(i64::from(DEFAULT_PAGE));
        let size = self.size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        if page <= 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if size <= 0 {
            return Err("Page size must be greater than 0".to_string());
        }

        let page = u32::try_from(page).map_err(|_| "Page is too large".to_string())?;
        let size = u32::try_from(size).map_err(|_| "Page size is too large".to_string())?;

        Ok((page, size))
    }
}
