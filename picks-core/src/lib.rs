//! # Personalized Picks Core
//!
//! View-state bookkeeping for the Personalized Picks product carousel.
//!
//! ## Overview
//!
//! - **Carousel**: a two-product sliding window over the catalog with
//!   five pagination dots, boundary-clamped navigation and a selection event
//! - **Announcements**: a live region for screen readers whose text clears
//!   itself after a short delay
//! - **Formatting**: price, rating and subtitle strings used by the cards
//! - **Catalog**: JSON product catalogs for hosts that do not build products
//!   in code
//! - **Demo**: the sample coffee-maker catalog and the harness that reacts to
//!   selections (behind the `demo` feature)
//!
//! ## Examples
//!
//! ```
//! use picks_core::carousel::PersonalizedPicks;
//! use picks_model::Product;
//!
//! let products = (1..=5)
//!     .map(|n| Product::new(n.to_string(), format!("Brewer {n}"), "", 99.0))
//!     .collect();
//! let mut carousel = PersonalizedPicks::new(products);
//!
//! carousel.go_next();
//! let window: Vec<_> = carousel
//!     .visible_products()
//!     .iter()
//!     .map(|visible| visible.product.id.to_string())
//!     .collect();
//! assert_eq!(window, ["2", "3"]);
//! ```

#![allow(missing_docs)]

pub mod announcer;
pub mod carousel;
pub mod catalog;
#[cfg(feature = "demo")]
pub mod demo;
pub mod events;
pub mod format;

pub use announcer::{Announcer, LiveRegion};
pub use carousel::{
    CarouselLayout, CarouselMessage, CarouselState, CarouselView, DotCount,
    PersonalizedPicks,
};
pub use catalog::CatalogError;
pub use events::{CarouselEvent, ShopNowEvent};
pub use format::{format_price, format_rating};
