// Page bookkeeping for the cart screen.
//
// Rules
// - Pages are numbered from 1 and hold at most page_size line items.
// - next/previous refuse to move past the last or the first page.
// - When the cart shrinks below the current page, settle() falls back to the last page that
//   still has line items. An empty cart sits on page 1.
// - Navigation is shown only while the cart spans more than one page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartNavigation {
    pub page: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPager {
    page_size: usize,
    page: usize,
}

impl CartPager {
    pub fn new(page_size: usize) -> Self {
        Self { page_size, page: 1 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Clamp the current page to the cart size and describe the navigation for it.
    pub fn settle(&mut self, total: usize) -> CartNavigation {
        let page_count = self.page_count(total);
        self.page = self.page.clamp(1, page_count);
        CartNavigation {
            page: self.page,
            is_first_page: self.page == 1,
            is_last_page: self.page == page_count,
            is_visible: page_count > 1,
        }
    }

    /// The line items of the current page. Call after settle().
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page >= self.page_count(total) {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }
}
