//! Pagination utilities for service layer
//!
//! Query strings carry `page` and `limit` as free text. Parsing never fails:
//! missing or non-numeric values fall back to defaults, values below one are
//! replaced and `limit` is clamped to the configured maximum.

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_LIMIT: u64 = 100;

    /// Build from raw query values.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: u64, max_limit: u64) -> Self {
        let max_limit = max_limit.max(1);
        let default_limit = default_limit.clamp(1, max_limit);
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit).unwrap_or(default_limit).min(max_limit);
        Self { page, limit }
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, limit: Self::DEFAULT_LIMIT } }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    let n = raw?.trim().parse::<i64>().ok()?;
    u64::try_from(n).ok().filter(|n| *n > 0)
}
