use std::ops::Range;

use tracing::trace;

use super::types::{CarouselLayout, PaginationDot};

/// Position bookkeeping for a carousel.
///
/// `current_index` is always a valid slide (or 0 when there are no slides) and
/// only moves through the navigation methods, each of which reports whether
/// the position changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_items: usize,
    layout: CarouselLayout,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(0, CarouselLayout::default())
    }
}

impl CarouselState {
    pub fn new(total_items: usize, layout: CarouselLayout) -> Self {
        Self {
            current_index: 0,
            total_items,
            layout,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_view(&self) -> usize {
        self.layout.items_per_view
    }

    pub fn layout(&self) -> CarouselLayout {
        self.layout
    }

    pub fn dot_count(&self) -> usize {
        self.layout.dots.resolve(self.total_items)
    }

    /// Update the number of items; the position is clamped to the new range.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        let last = self.dot_count().saturating_sub(1);
        if self.current_index > last {
            trace!(
                from = self.current_index,
                to = last,
                "carousel index clamped after item count change"
            );
            self.current_index = last;
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.dot_count()
    }

    /// Step back one slide. Returns `false` at the first slide.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Step forward one slide. Returns `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.dot_count() {
            trace!(index, dots = self.dot_count(), "slide index out of range");
            return false;
        }
        self.current_index = index;
        true
    }

    /// Item indices shown at the current slide, wrapping past the end.
    ///
    /// Empty when there are no items; otherwise always `items_per_view`
    /// entries, so slide `k` shows `k, k + 1 (mod N)`.
    pub fn window(&self) -> impl Iterator<Item = usize> + '_ {
        let total = self.total_items;
        let offsets: Range<usize> = if total == 0 {
            0..0
        } else {
            0..self.layout.items_per_view
        };
        offsets.map(move |offset| (self.current_index + offset) % total)
    }

    pub fn dots(&self) -> Vec<PaginationDot> {
        (0..self.dot_count())
            .map(|index| PaginationDot {
                index,
                is_active: index == self.current_index,
            })
            .collect()
    }
}
