//! Fixed-capacity pagination of enriched line items.
//!
//! The pager is deterministic chunking, nothing more: page `k` (0-based)
//! holds items `[k * capacity, min((k + 1) * capacity, len))`. The first
//! page never repeats the invoice header block; every later page does.
//! Row numbering is global across the whole invoice, so item 11 renders as
//! row 11 on page 2, not row 1.
//!
//! The grand total is a property of the full item sequence, not of any
//! page, and is computed here exactly once so partial renders cannot
//! re-derive a wrong value from the pages they happen to show.

use billpress_assemble::LineItem;

/// Line items per page unless the run configuration overrides it.
pub const DEFAULT_PAGE_CAPACITY: usize = 10;

/// A bounded, ordered slice of an invoice's line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    /// 0-based page number.
    pub number: usize,
    /// Global offset of this page's first item within the invoice.
    pub start: usize,
    pub items: &'a [LineItem],
}

impl<'a> Page<'a> {
    /// Whether this page must repeat the invoice header block. True for
    /// every page except the first.
    pub fn repeats_header(&self) -> bool {
        self.number > 0
    }

    /// Iterates this page's items with their 1-based global row numbers.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a LineItem)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(offset, item)| (self.start + offset + 1, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits an ordered item list into pages of at most `capacity` items.
///
/// Empty input yields zero pages; the caller treats that as an empty
/// invoice. Capacity must be at least 1.
pub fn paginate(items: &[LineItem], capacity: usize) -> Vec<Page<'_>> {
    assert!(capacity >= 1, "page capacity must be at least 1");
    items
        .chunks(capacity)
        .enumerate()
        .map(|(number, chunk)| Page {
            number,
            start: number * capacity,
            items: chunk,
        })
        .collect()
}

/// Sums the line totals over the full unpaginated item sequence.
pub fn grand_total(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.line_total).sum()
}
