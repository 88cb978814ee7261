//! The Personalized Picks carousel: a two-product window with pagination.

pub mod component;
pub mod messages;
pub mod state;
pub mod types;
pub mod view;

pub use component::{
    DEFAULT_TITLE, PLACEHOLDER_IMAGE_URL, PersonalizedPicks, VisibleProduct,
};
pub use messages::CarouselMessage;
pub use state::CarouselState;
pub use types::{CarouselLayout, DotCount, PaginationDot};
pub use view::{CarouselView, ProductCard};
