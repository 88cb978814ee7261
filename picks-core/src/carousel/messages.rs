//! Local message types for carousel interactions

use picks_model::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation
    Previous,
    Next,
    GoToSlide(usize),

    // Selection
    ShopNow(ProductId),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Previous => "Carousel::Previous",
            Self::Next => "Carousel::Next",
            Self::GoToSlide(_) => "Carousel::GoToSlide",
            Self::ShopNow(_) => "Carousel::ShopNow",
        }
    }
}
