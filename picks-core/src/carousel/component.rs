use std::sync::Arc;

use picks_model::{Product, ProductId};
use tracing::{debug, info};

use super::{
    messages::CarouselMessage,
    state::CarouselState,
    types::{CarouselLayout, PaginationDot},
    view::{CarouselView, ProductCard},
};
use crate::{
    announcer::{Announcer, LiveRegion},
    events::{CarouselEvent, ShopNowEvent},
    format::{curated_subtitle, format_price, format_rating},
};

/// Title shown when the host does not provide one.
pub const DEFAULT_TITLE: &str = "Your Personalized Picks";

/// Image shown in place of a product image that failed to load.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x400/fafaf9/706e6b?text=Coffee+Maker";

/// A product in the current window, decorated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleProduct<'a> {
    /// Position of the product in the catalog.
    pub index: usize,
    pub product: &'a Product,
    pub formatted_price: String,
}

/// Horizontally paginated product-recommendation carousel.
///
/// Owns the navigation state; products, title and subtitle are host-provided
/// props. Navigation at a boundary, out-of-range slides and unknown product
/// ids are ignored rather than reported.
#[derive(Debug)]
pub struct PersonalizedPicks {
    products: Vec<Product>,
    title: String,
    subtitle: Option<String>,
    state: CarouselState,
    announcer: Arc<dyn Announcer>,
}

impl Default for PersonalizedPicks {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PersonalizedPicks {
    pub fn new(products: Vec<Product>) -> Self {
        let state =
            CarouselState::new(products.len(), CarouselLayout::default());
        Self {
            products,
            title: DEFAULT_TITLE.to_string(),
            subtitle: None,
            state,
            announcer: Arc::new(LiveRegion::new()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Replace the layout; the position restarts at the first slide.
    pub fn with_layout(mut self, layout: CarouselLayout) -> Self {
        self.state = CarouselState::new(self.products.len(), layout);
        self
    }

    pub fn with_announcer(mut self, announcer: Arc<dyn Announcer>) -> Self {
        self.announcer = announcer;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replace the products; the current slide is kept when still valid.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.state.set_total_items(products.len());
        self.products = products;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn dot_count(&self) -> usize {
        self.state.dot_count()
    }

    pub fn announcer(&self) -> &Arc<dyn Announcer> {
        &self.announcer
    }

    pub fn visible_products(&self) -> Vec<VisibleProduct<'_>> {
        self.state
            .window()
            .map(|index| {
                let product = &self.products[index];
                VisibleProduct {
                    index,
                    product,
                    formatted_price: format_price(product.price),
                }
            })
            .collect()
    }

    pub fn pagination_dots(&self) -> Vec<PaginationDot> {
        self.state.dots()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    pub fn is_previous_disabled(&self) -> bool {
        !self.can_go_previous()
    }

    pub fn is_next_disabled(&self) -> bool {
        !self.can_go_next()
    }

    pub fn go_previous(&mut self) {
        if self.state.previous() {
            self.announce("Previous slide");
        }
    }

    pub fn go_next(&mut self) {
        if self.state.next() {
            self.announce("Next slide");
        }
    }

    pub fn go_to_slide(&mut self, index: usize) {
        if self.state.go_to(index) {
            let message =
                format!("Slide {} of {}", index + 1, self.state.dot_count());
            self.announce(&message);
        }
    }

    /// Slide selection from a raw attribute value such as `data-index="2"`.
    /// Values that do not parse as a slide index are ignored.
    pub fn go_to_slide_str(&mut self, raw: &str) {
        match raw.trim().parse::<usize>() {
            Ok(index) => self.go_to_slide(index),
            Err(_) => debug!(raw, "ignoring unparsable slide index"),
        }
    }

    pub fn display_subtitle(&self) -> String {
        match self.subtitle.as_deref() {
            Some(subtitle) if !subtitle.is_empty() => subtitle.to_string(),
            _ => curated_subtitle(self.products.len()),
        }
    }

    /// Resolve a "Shop Now" selection. Unknown ids produce no event.
    pub fn on_select(&self, product_id: &str) -> Option<ShopNowEvent> {
        let Some(product) =
            self.products.iter().find(|product| product.id == product_id)
        else {
            debug!(product_id, "selection for unknown product ignored");
            return None;
        };

        info!(product_id, name = %product.name, "shop now selected");
        Some(ShopNowEvent {
            product_id: ProductId::new(product_id),
            product: product.clone(),
        })
    }

    /// Swap a card's broken image for the placeholder.
    pub fn on_image_error(&self, card: &mut ProductCard) {
        debug!(
            product_id = %card.product_id,
            image_url = %card.image_url,
            "product image failed to load; using placeholder"
        );
        card.use_placeholder_image();
    }

    /// Dispatch a host message. Navigation never produces an event.
    pub fn update(&mut self, message: CarouselMessage) -> Option<CarouselEvent> {
        debug!(msg = message.name(), "carousel update");
        match message {
            CarouselMessage::Previous => {
                self.go_previous();
                None
            }
            CarouselMessage::Next => {
                self.go_next();
                None
            }
            CarouselMessage::GoToSlide(index) => {
                self.go_to_slide(index);
                None
            }
            CarouselMessage::ShopNow(product_id) => self
                .on_select(product_id.as_str())
                .map(CarouselEvent::ShopNow),
        }
    }

    /// Snapshot everything a renderer needs.
    pub fn view(&self) -> CarouselView {
        let cards = self
            .visible_products()
            .into_iter()
            .map(|visible| ProductCard {
                product_id: visible.product.id.clone(),
                name: visible.product.name.clone(),
                image_url: visible.product.image_url.clone(),
                formatted_price: visible.formatted_price,
                formatted_rating: visible
                    .product
                    .rating
                    .is_valid()
                    .then(|| format_rating(visible.product.rating)),
                is_highlighted: visible.product.is_highlighted,
            })
            .collect();

        CarouselView {
            title: self.title.clone(),
            subtitle: self.display_subtitle(),
            cards,
            dots: self.pagination_dots(),
            current_index: self.current_index(),
            is_previous_disabled: self.is_previous_disabled(),
            is_next_disabled: self.is_next_disabled(),
            announcement: self.announcer.current(),
        }
    }

    fn announce(&self, message: &str) {
        debug!(
            announcement = message,
            index = self.state.current_index(),
            "carousel navigated"
        );
        self.announcer.announce(message);
    }
}
