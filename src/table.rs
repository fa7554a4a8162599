//! Page-backed table with logical row addressing.
//!
//! Rows are appended to an array of at most [`TABLE_MAX_PAGES`] pages. Logical
//! row `i` lives in page `i / ROWS_PER_PAGE` at byte offset
//! `(i % ROWS_PER_PAGE) * ROW_SIZE`. The trailing `PAGE_SIZE % ROW_SIZE` bytes
//! of every page are never addressed.

use std::ops::Range;

use tracing::debug;

use crate::page::{PAGE_SIZE, Page};
use crate::row::{ROW_SIZE, Row};

pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

/// Physical address of one row: a page index and a byte offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub page: usize,
    pub offset: usize,
}

impl Slot {
    pub const fn for_row(row_num: usize) -> Self {
        Self {
            page: row_num / ROWS_PER_PAGE,
            offset: (row_num % ROWS_PER_PAGE) * ROW_SIZE,
        }
    }

    /// Byte range of the row inside its page.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + ROW_SIZE
    }
}

pub struct Table {
    pub(crate) num_rows: usize,
    pages: Vec<Option<Page>>,
}

impl Table {
    /// Creates an empty table. No page is allocated until a row lands in it.
    pub fn new() -> Self {
        Self {
            num_rows: 0,
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }

    /// Returns the writable bytes for `row_num`, allocating its page on first use.
    ///
    /// `row_num` must be below [`TABLE_MAX_ROWS`]; the execute stage checks this
    /// before calling.
    pub fn row_slot_mut(&mut self, row_num: usize) -> &mut [u8] {
        debug_assert!(row_num < TABLE_MAX_ROWS);
        let slot = Slot::for_row(row_num);
        let entry = &mut self.pages[slot.page];
        if entry.is_none() {
            debug!(page = slot.page, "allocating page");
        }
        let page = entry.get_or_insert_with(Page::new);
        &mut page.as_mut_slice()[slot.range()]
    }

    /// Returns the bytes for `row_num`, or `None` if its page was never allocated.
    pub fn row_slot(&self, row_num: usize) -> Option<&[u8]> {
        let slot = Slot::for_row(row_num);
        let page = self.pages.get(slot.page)?.as_ref()?;
        Some(&page.as_slice()[slot.range()])
    }

    /// Decodes a stored row. `None` for indices at or past the row count.
    pub fn read_row(&self, row_num: usize) -> Option<Row> {
        if row_num >= self.num_rows {
            return None;
        }
        self.row_slot(row_num).map(Row::deserialize)
    }

    /// Releases every page. Consuming `self` makes a second close impossible.
    pub fn close(self) {
        debug!(
            rows = self.num_rows,
            pages = self.allocated_pages(),
            "closing table"
        );
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
