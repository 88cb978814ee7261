//! Events the carousel raises for its host.

use picks_model::{Product, ProductId};
use serde::Serialize;

/// Raised when the shopper picks a product's "Shop Now" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopNowEvent {
    pub product_id: ProductId,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CarouselEvent {
    ShopNow(ShopNowEvent),
}

impl CarouselEvent {
    /// DOM-style event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShopNow(_) => "shopnow",
        }
    }
}

impl From<ShopNowEvent> for CarouselEvent {
    fn from(event: ShopNowEvent) -> Self {
        CarouselEvent::ShopNow(event)
    }
}
