//! Demo-mode utilities: the sample coffee-maker catalog and a harness that
//! reacts to carousel selections. Only compiled with the `demo` feature.

use picks_model::Product;

use crate::carousel::{DEFAULT_TITLE, PersonalizedPicks};

pub mod harness;
pub mod toast;

pub use harness::DemoHarness;
pub use toast::{Toast, ToastId, ToastLevel, ToastManager};

#[cfg(test)]
mod tests;

pub const DEMO_TITLE: &str = DEFAULT_TITLE;
pub const DEMO_SUBTITLE: &str = "Curated just for you • 5 items";

/// The five coffee makers the carousel was designed around.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Breville The Luxe Brewer with Thermal Carafe",
            "https://assets.wsimgs.com/wsimgs/rk/images/dp/wcm/202543/0340/img1z.jpg",
            349.95,
        )
        .highlighted(true),
        Product::new(
            "2",
            "Fellow Aiden Coffee Brewer",
            "https://assets.wsimgs.com/wsimgs/rk/images/dp/wcm/202536/0183/img39z.jpg",
            299.95,
        )
        .highlighted(true),
        Product::new(
            "3",
            "Café Specialty Drip Coffee Maker with Glass Carafe",
            "https://assets.wsimgs.com/wsimgs/ab/images/dp/wcm/202440/0021/cafe-specialty-drip-coffee-maker-with-glass-carafe-o.jpg",
            199.95,
        ),
        Product::new(
            "4",
            "Moccamaster by Technivorm KBGV Select Coffee Maker, 10-cup",
            "https://assets.wsimgs.com/wsimgs/ab/images/dp/wcm/202414/0036/moccamaster-by-technivorm-kbgv-select-10-cup-coffee-maker-o.jpg",
            369.95,
        )
        .highlighted(true),
        Product::new(
            "5",
            "OXO Brew 12-Cup Coffee Maker",
            "https://assets.wsimgs.com/wsimgs/ab/images/dp/wcm/202451/0005/img97o.jpg",
            199.95,
        ),
    ]
}

/// Carousel wired with the sample catalog, title and subtitle.
pub fn demo_carousel() -> PersonalizedPicks {
    PersonalizedPicks::new(sample_products())
        .with_title(DEMO_TITLE)
        .with_subtitle(DEMO_SUBTITLE)
}
