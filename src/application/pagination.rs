//! Storage-independent pagination over ordered collections.

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page number used when the caller does not specify one.
pub const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// One window of a larger collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl<T> PagedList<T> {
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    /// Converts the items while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

/// Slices `collection` into the 1-based `page` of `page_size` items.
///
/// The window starts at offset `(page - 1) * page_size` and is clipped to the
/// collection bounds: a page past the end yields no items while
/// `total_count` still reflects the whole collection. Input order is
/// preserved.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] if `page` or `page_size` is 0.
///
/// # Examples
///
/// ```ignore
/// let page = paginate((1..=25).collect::<Vec<_>>(), 2, 10)?;
/// assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
/// assert_eq!(page.total_pages(), 3);
/// ```
pub fn paginate<I>(collection: I, page: u32, page_size: u32) -> Result<PagedList<I::Item>, PaginationError>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    if page == 0 {
        return Err(PaginationError::InvalidArgument("page must be at least 1"));
    }
    if page_size == 0 {
        return Err(PaginationError::InvalidArgument("page size must be at least 1"));
    }

    let iter = collection.into_iter();
    let total_count = iter.len() as u64;

    let offset = u64::from(page - 1) * u64::from(page_size);
    let items = match usize::try_from(offset) {
        Ok(offset) if (offset as u64) < total_count => {
            iter.skip(offset).take(page_size as usize).collect()
        }
        _ => Vec::new(),
    };

    Ok(PagedList {
        items,
        page,
        page_size,
        total_count,
    })
}
