use serde::Serialize;
use std::ops::Range;

/// Page cursor over a list of `total` items.
///
/// Pages are 1-based and `current` always stays in `1..=total_pages()`,
/// where an empty list still has one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    total: usize,
    page_size: usize,
    current: usize,
}

impl Pagination {
    pub fn new(total: usize, page_size: usize) -> Self {
        Pagination {
            total,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total_pages()
    }

    /// Replaces the item count and rewinds to page 1.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = 1;
    }

    /// Moves to `page`, clamped into range. Returns whether the page changed.
    pub fn goto(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.total_pages());
        let changed = page != self.current;
        self.current = page;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.goto(self.current.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.goto(self.current.saturating_sub(1))
    }

    /// Index range of the current page within the list.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Descriptors for a prev / numbered pages / next control.
    pub fn links(&self) -> PageLinks {
        let total_pages = self.total_pages();
        PageLinks {
            prev: PageLink {
                page: self.current.saturating_sub(1).max(1),
                enabled: !self.is_first(),
            },
            pages: (1..=total_pages)
                .map(|number| PageNumber {
                    number,
                    active: number == self.current,
                })
                .collect(),
            next: PageLink {
                page: (self.current + 1).min(total_pages),
                enabled: !self.is_last(),
            },
            current: self.current,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub prev: PageLink,
    pub pages: Vec<PageNumber>,
    pub next: PageLink,
    pub current: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNumber {
    pub number: usize,
    pub active: bool,
}
