use std::num::IntErrorKind;

use crate::DraftRecord;

pub const PAGE_SIZE: usize = 5;

/// One page of the history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage {
    pub records: Vec<DraftRecord>,
    pub page: u64,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl HistoryPage {
    /// Slices `records` for the 1-based `page`. A page of 0 is treated as 1,
    /// and a page past the end yields an empty slice.
    pub fn paginate(mut records: Vec<DraftRecord>, page: u64) -> HistoryPage {
        let page = page.max(1);
        let total = records.len();
        let skip = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(PAGE_SIZE);
        let start = skip.min(total);
        let end = start.saturating_add(PAGE_SIZE).min(total);

        records.truncate(end);
        let records = records.split_off(start);

        HistoryPage {
            records,
            page,
            total,
            has_next: skip.saturating_add(PAGE_SIZE) < total,
            has_prev: page > 1,
        }
    }
}

/// Reads the `page` query value. Missing or non-integer input gives 1,
/// anything below 1 is clamped to 1, and integers too large to represent
/// saturate to the last possible page.
pub fn parse_page(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<i64>() {
        Ok(p) => p.max(1) as u64,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 1,
    }
}
