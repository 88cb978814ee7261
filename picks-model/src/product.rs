use crate::{ProductId, Price, Rating};

/// A single recommendable product shown in the carousel.
///
/// Products are owned by the caller and handed to the carousel as a
/// read-only ordered sequence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    pub id: ProductId,
    #[cfg_attr(feature = "serde", serde(alias = "displayName"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Price,
    /// Highlighted products carry a badge on their card.
    #[cfg_attr(feature = "serde", serde(default, alias = "isOlivePick"))]
    pub is_highlighted: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "rating_is_missing")
    )]
    pub rating: Rating,
}

#[cfg(feature = "serde")]
fn rating_is_missing(rating: &Rating) -> bool {
    !rating.is_valid()
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            price: price.into(),
            is_highlighted: false,
            rating: Rating::invalid(),
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.is_highlighted = highlighted;
        self
    }

    pub fn with_rating(mut self, rating: impl Into<Rating>) -> Self {
        self.rating = rating.into();
        self
    }
}
