// Offset bookkeeping for incremental catalog loading.
//
// Rules
// - The first initial load asks for one page. Later initial loads (returning to the catalog)
//   ask for the whole window loaded so far, so the visible content is restored.
// - An initial load replaces the window: loaded_count becomes what was returned.
// - A load-more appends: loaded_count grows by what was returned.
// - reset() drops the window. The next initial load asks for one page again.
// - A failed fetch must not be reported, so loaded_count stays as it was.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Fewer items than requested means the catalog has no more pages.
    pub fn is_end_of_catalog(&self, returned: usize) -> bool {
        returned < self.limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatedLoader {
    page_size: usize,
    loaded_count: usize,
}

impl PaginatedLoader {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            loaded_count: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn initial_load(&self) -> PageRequest {
        let limit = if self.loaded_count == 0 {
            self.page_size
        } else {
            self.loaded_count
        };
        PageRequest { offset: 0, limit }
    }

    pub fn initial_loaded(&mut self, returned: usize) {
        self.loaded_count = returned;
    }

    pub fn load_more(&self) -> PageRequest {
        PageRequest {
            offset: self.loaded_count,
            limit: self.page_size,
        }
    }

    pub fn more_loaded(&mut self, returned: usize) {
        self.loaded_count += returned;
    }

    pub fn reset(&mut self) {
        self.loaded_count = 0;
    }
}
