//! Sorting and pagination math for the data table component.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "\u{25B2}",
            Self::Descending => "\u{25BC}",
        }
    }
}

/// Active sort: column index plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: same column toggles, a new column starts ascending.
    #[must_use]
    pub fn clicked(current: Option<Self>, column: usize) -> Self {
        match current {
            Some(state) if state.column == column => Self { column, direction: state.direction.toggled() },
            _ => Self { column, direction: SortDirection::Ascending },
        }
    }
}

/// Case-insensitive comparison used for every sortable column.
#[must_use]
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Stable sort of `rows` by the text `key` extracts, in `direction`.
pub fn sort_rows<T>(rows: &mut [T], key: impl Fn(&T) -> String, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let order = compare_cells(&key(a), &key(b));
        match direction {
            SortDirection::Ascending => order,
            SortDirection::Descending => order.reverse(),
        }
    });
}

/// Number of pages for `total` rows; at least one.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a zero-based page index into range after the row count changes.
#[must_use]
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Row index range shown on zero-based `page`.
#[must_use]
pub fn page_range(page: usize, total: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    let page = clamp_page(page, total, size);
    let start = (page * size).min(total);
    start..(start + size).min(total)
}

/// Footer text such as "11-20 of 42".
#[must_use]
pub fn range_label(range: &Range<usize>, total: usize) -> String {
    if total == 0 {
        return "0 of 0".to_owned();
    }
    format!("{}-{} of {total}", range.start + 1, range.end)
}
