//! Render-ready snapshot of a carousel.

use picks_model::ProductId;
use serde::Serialize;

use super::{component::PLACEHOLDER_IMAGE_URL, types::PaginationDot};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<ProductCard>,
    pub dots: Vec<PaginationDot>,
    pub current_index: usize,
    pub is_previous_disabled: bool,
    pub is_next_disabled: bool,
    /// Live-region text; empty when nothing is being announced.
    pub announcement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub formatted_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_rating: Option<String>,
    pub is_highlighted: bool,
}

impl ProductCard {
    pub fn use_placeholder_image(&mut self) {
        self.image_url = PLACEHOLDER_IMAGE_URL.to_string();
    }
}
