//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of expenses per page when not specified in a request.
    pub default_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
        }
    }
}

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The 1-based page number.
    pub page: u64,
    /// The maximum number of items on a page.
    pub limit: u64,
}

impl PageRequest {
    /// Build a page request from raw query parameters.
    ///
    /// Values that are missing, not integers, or zero fall back to the
    /// defaults in `config`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, config: &PaginationConfig) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(config.default_page.max(1)),
            limit: parse_positive(limit).unwrap_or(config.default_page_size.max(1)),
        }
    }

    /// The number of items to skip before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// The number of pages needed to show `total_count` items.
    pub fn page_count(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&value| value > 0)
}
