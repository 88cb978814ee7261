//! Shared types for the carousel module

/// How many pagination dots (slides) the carousel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotCount {
    /// A fixed number of slides regardless of how many products are shown.
    Fixed(usize),
    /// One slide per product.
    PerProduct,
}

impl DotCount {
    pub fn resolve(self, total_items: usize) -> usize {
        match self {
            DotCount::Fixed(count) => count,
            DotCount::PerProduct => total_items,
        }
    }
}

/// Static layout for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub items_per_view: usize,
    pub dots: DotCount,
}

impl CarouselLayout {
    /// Two cards per view and five slides, tuned for the five-product
    /// recommendation set.
    pub const fn picks_defaults() -> Self {
        Self {
            items_per_view: 2,
            dots: DotCount::Fixed(5),
        }
    }

    /// Two cards per view with one slide per product.
    pub const fn per_product() -> Self {
        Self {
            items_per_view: 2,
            dots: DotCount::PerProduct,
        }
    }
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self::picks_defaults()
    }
}

/// One pagination position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDot {
    pub index: usize,
    pub is_active: bool,
}
