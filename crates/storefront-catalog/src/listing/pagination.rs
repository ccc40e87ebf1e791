//! Pagination arithmetic.
//!
//! The last page is not ceiling division, and a click sets `skip` from the
//! page number before the click rather than `skip ± limit`. Both are
//! long-standing storefront behavior and are kept as is.

/// Items counted by the summary line, independent of the page size.
const SUMMARY_SPAN: u32 = 10;

/// Number of the last page.
///
/// `1` when `total <= limit`. Otherwise `total / limit` rounded half up,
/// plus one when the division is exact.
pub fn last_page_number(total: u32, limit: u32) -> u32 {
    if limit == 0 || total <= limit {
        return 1;
    }

    let (total, limit) = (u64::from(total), u64::from(limit));
    let rounded = (2 * total + limit) / (2 * limit);
    let last = if total % limit == 0 { rounded + 1 } else { rounded };

    u32::try_from(last).unwrap_or(u32::MAX)
}

/// Text shown under the listing.
pub fn summary(skip: u32, total: u32) -> String {
    format!(
        "Showing {} to {} of {} results",
        skip.saturating_add(1),
        skip.saturating_add(SUMMARY_SPAN).min(total),
        total
    )
}

/// Page position reached by a pagination click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTarget {
    pub page_number: u32,
    pub skip: u32,
}

impl PageTarget {
    /// Target of "next" from `page_number`. `skip` uses the page before the
    /// click.
    pub fn next(page_number: u32, limit: u32) -> Self {
        Self {
            page_number: page_number.saturating_add(1),
            skip: page_number.saturating_mul(limit),
        }
    }

    /// Target of "previous" from `page_number`. `skip` uses the page before
    /// the click.
    pub fn previous(page_number: u32, limit: u32) -> Self {
        Self {
            page_number: page_number.saturating_sub(1),
            skip: page_number.saturating_mul(limit),
        }
    }
}
