use std::collections::HashSet;

use picks_core::{
    CarouselMessage, CarouselView, PersonalizedPicks,
    demo::{DemoHarness, Toast},
};
use picks_model::ProductId;
use tracing::debug;

use crate::{command::DemoCommand, render::TextView};

/// What a command did, for the caller to report.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Updated,
    Notified(Toast),
    UnknownProduct(ProductId),
    Dismissed(usize),
    Quit,
}

/// A carousel plus the host-side harness reacting to it.
#[derive(Debug)]
pub struct DemoSession {
    carousel: PersonalizedPicks,
    harness: DemoHarness,
    broken_images: HashSet<ProductId>,
}

impl Outcome {
    /// Line to show the user, if the command produced one.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Notified(toast) => Some(toast.to_string()),
            Outcome::UnknownProduct(product_id) => {
                Some(format!("No product with id {product_id}"))
            }
            Outcome::Dismissed(count) => {
                Some(format!("Dismissed {count} notification(s)"))
            }
            Outcome::Updated | Outcome::Quit => None,
        }
    }
}

impl DemoSession {
    pub fn new(carousel: PersonalizedPicks) -> Self {
        Self {
            carousel,
            harness: DemoHarness::new(),
            broken_images: HashSet::new(),
        }
    }

    pub fn carousel(&self) -> &PersonalizedPicks {
        &self.carousel
    }

    pub fn harness(&self) -> &DemoHarness {
        &self.harness
    }

    pub fn apply(&mut self, command: DemoCommand) -> Outcome {
        debug!(?command, "demo command");
        match command {
            DemoCommand::Next => {
                self.carousel.update(CarouselMessage::Next);
                Outcome::Updated
            }
            DemoCommand::Previous => {
                self.carousel.update(CarouselMessage::Previous);
                Outcome::Updated
            }
            DemoCommand::GoTo(raw) => {
                self.carousel.go_to_slide_str(&raw);
                Outcome::Updated
            }
            DemoCommand::Select(product_id) => {
                match self
                    .carousel
                    .update(CarouselMessage::ShopNow(product_id.clone()))
                {
                    Some(event) => {
                        let id = self.harness.handle_event(&event);
                        self.harness
                            .toasts()
                            .iter()
                            .find(|toast| toast.id == id)
                            .cloned()
                            .map_or(Outcome::Updated, Outcome::Notified)
                    }
                    None => Outcome::UnknownProduct(product_id),
                }
            }
            DemoCommand::BrokenImage(product_id) => {
                self.broken_images.insert(product_id);
                Outcome::Updated
            }
            DemoCommand::Dismiss => {
                let ids: Vec<_> =
                    self.harness.toasts().iter().map(|toast| toast.id).collect();
                let dismissed =
                    ids.into_iter().filter(|id| self.harness.dismiss(*id)).count();
                Outcome::Dismissed(dismissed)
            }
            DemoCommand::Show => Outcome::Updated,
            DemoCommand::Quit => Outcome::Quit,
        }
    }

    /// Current snapshot with failed images already swapped out.
    pub fn view(&self) -> CarouselView {
        let mut view = self.carousel.view();
        for card in &mut view.cards {
            if self.broken_images.contains(&card.product_id) {
                self.carousel.on_image_error(card);
            }
        }
        view
    }

    pub fn render(&self) -> String {
        TextView(&self.view()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picks_core::{carousel::PLACEHOLDER_IMAGE_URL, demo::demo_carousel};

    #[test]
    fn select_notifies_and_dismiss_clears() {
        let mut session = DemoSession::new(demo_carousel());

        let Outcome::Notified(toast) =
            session.apply(DemoCommand::Select("5".into()))
        else {
            panic!("expected a notification");
        };
        assert_eq!(
            toast.to_string(),
            "[INFO] Shop Now: Navigating to OXO Brew 12-Cup Coffee Maker"
        );

        assert_eq!(
            session.apply(DemoCommand::Select("nope".into())),
            Outcome::UnknownProduct("nope".into())
        );
        assert_eq!(session.apply(DemoCommand::Dismiss), Outcome::Dismissed(1));
        assert!(session.harness().toasts().is_empty());
    }

    #[test]
    fn broken_images_use_the_placeholder() {
        let mut session = DemoSession::new(demo_carousel());
        session.apply(DemoCommand::BrokenImage("2".into()));

        let view = session.view();
        assert_ne!(view.cards[0].image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(view.cards[1].image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn navigation_goes_through_the_carousel() {
        let mut session = DemoSession::new(demo_carousel());
        for command in [
            DemoCommand::Next,
            DemoCommand::Next,
            DemoCommand::GoTo("x".into()),
            DemoCommand::Previous,
        ] {
            assert_eq!(session.apply(command), Outcome::Updated);
        }
        assert_eq!(session.carousel().current_index(), 1);
    }
}
