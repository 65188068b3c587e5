//! Page indicator dots derived from the visible window

use std::ops::RangeInclusive;

use crate::breakpoint::Breakpoint;
use crate::settings::Settings;

use super::types::VisibleRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    page_size: usize,
}

impl PageIndicator {
    /// Page sizes below one are raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn for_breakpoint(breakpoint: Breakpoint, settings: &Settings) -> Self {
        if breakpoint.is_mobile() {
            Self::new(settings.mobile_page_size())
        } else {
            Self::new(settings.page_size())
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    /// Pages touched by any part of `range`.
    pub fn active_pages(&self, range: VisibleRange) -> RangeInclusive<usize> {
        (range.start / self.page_size)..=(range.end / self.page_size)
    }

    pub fn is_active(&self, page: usize, range: VisibleRange) -> bool {
        self.active_pages(range).contains(&page)
    }

    /// One flag per dot. No range (empty list) leaves every dot inactive.
    pub fn dots(&self, item_count: usize, range: Option<VisibleRange>) -> Vec<bool> {
        (0..self.page_count(item_count))
            .map(|page| range.is_some_and(|r| self.is_active(page, r)))
            .collect()
    }
}
