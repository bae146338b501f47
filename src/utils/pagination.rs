// Pagination utilities - Page arithmetic and page-token recovery
//
// Page numbers arrive as raw query strings. Anything that is not a whole number
// resolves to the first page; whole numbers outside 1..=num_pages are clamped to
// the nearest valid page. A paginator always has at least one page, so an empty
// result set still renders as a single empty page.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::models::{CipherSuite, Rfc};

/// Why a page token could not be used as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPageToken {
    /// The token is not a whole number
    NotAnInteger,
    /// The number is below 1 or past the last page
    OutOfRange,
}

/// Parse a page token into a whole number.
///
/// Accepts integral decimal forms such as "3" and "3.0"; rejects "3.5", "", "abc".
///
/// # Examples
///
/// ```
/// use cipherdir::utils::pagination::parse_page_token;
///
/// assert_eq!(parse_page_token("2"), Some(2));
/// assert_eq!(parse_page_token(" 4.0 "), Some(4));
/// assert_eq!(parse_page_token("two"), None);
/// ```
pub fn parse_page_token(token: &str) -> Option<i64> {
    let token = token.trim();
    if let Ok(number) = token.parse::<i64>() {
        return Some(number);
    }

    let float = token.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 {
        // `as` saturates, which keeps huge values out of range rather than wrapping
        Some(float as i64)
    } else {
        None
    }
}

/// Resolve a requested page against the number of available pages.
///
/// Never fails: the effective page is always within `1..=num_pages`.
pub fn resolve_page(requested: Option<&str>, num_pages: u64) -> u64 {
    let num_pages = num_pages.max(1);
    match check_page(requested, num_pages) {
        Ok(number) => number,
        Err((InvalidPageToken::NotAnInteger, _)) => 1,
        Err((InvalidPageToken::OutOfRange, number)) if number < 1 => 1,
        Err((InvalidPageToken::OutOfRange, _)) => num_pages,
    }
}

fn check_page(requested: Option<&str>, num_pages: u64) -> Result<u64, (InvalidPageToken, i64)> {
    let Some(token) = requested else {
        return Ok(1);
    };
    let number = parse_page_token(token).ok_or((InvalidPageToken::NotAnInteger, 0))?;

    if number < 1 || number as u64 > num_pages {
        Err((InvalidPageToken::OutOfRange, number))
    } else {
        Ok(number as u64)
    }
}

/// Splits `count` items into fixed size pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
}

impl Paginator {
    /// Create a paginator; `per_page` of zero is treated as one
    pub fn new(count: u64, per_page: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Total number of pages, at least one
    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// Effective page number for a raw request token
    pub fn resolve(&self, requested: Option<&str>) -> u64 {
        resolve_page(requested, self.num_pages())
    }

    /// Row offset of the first item on `number`
    pub fn offset(&self, number: u64) -> u64 {
        (number.max(1) - 1) * self.per_page
    }

    /// Wrap one page's worth of items with its navigation metadata
    pub fn page<T>(&self, number: u64, items: Vec<T>) -> Page<T> {
        let num_pages = self.num_pages();
        let (start_index, end_index) = if self.count == 0 {
            (0, 0)
        } else {
            let start = self.offset(number) + 1;
            (start, (start + items.len() as u64).saturating_sub(1))
        };

        Page {
            items,
            number,
            num_pages,
            count: self.count,
            per_page: self.per_page,
            has_previous: number > 1,
            has_next: number < num_pages,
            previous_page_number: (number > 1).then(|| number - 1),
            next_page_number: (number < num_pages).then(|| number + 1),
            start_index,
            end_index,
        }
    }
}

/// One page of results plus what a template needs to draw page controls
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[aliases(CipherSuitePage = Page<CipherSuite>, RfcPage = Page<Rfc>)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub number: u64,
    pub num_pages: u64,
    /// Total items across all pages
    pub count: u64,
    pub per_page: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_number: Option<u64>,
    pub next_page_number: Option<u64>,
    /// 1-based index of the first item on this page, 0 when empty
    pub start_index: u64,
    pub end_index: u64,
}

impl<T> Page<T> {
    /// Page numbers for navigation links
    pub fn page_range(&self) -> Vec<u64> {
        (1..=self.num_pages).collect()
    }
}
