//! Offset/limit paging parameters shared by the list endpoints.

use serde::Deserialize;

pub const MAX_PAGE_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// Limit with a per-entity default, clamped to 1..=1000.
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, MAX_PAGE_LIMIT)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

impl RecentParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, MAX_PAGE_LIMIT)
    }
}
