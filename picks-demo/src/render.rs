//! Plain-text rendering of a carousel snapshot.

use std::fmt;

use picks_core::CarouselView;

/// Badge shown next to highlighted products.
pub const HIGHLIGHT_BADGE: &str = "[Olive Pick]";

/// Text form of a [`CarouselView`].
///
/// ```text
/// == Your Personalized Picks ==
/// Curated just for you • 5 items
///   #1  Breville The Luxe Brewer with Thermal Carafe  [Olive Pick]
///       $349.95
///       https://assets.wsimgs.com/...
///   ● ○ ○ ○ ○  slide 1 of 5
///   previous: disabled  next: enabled
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextView<'a>(pub &'a CarouselView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "== {} ==", view.title)?;
        writeln!(f, "{}", view.subtitle)?;

        if view.cards.is_empty() {
            writeln!(f, "  (no products)")?;
        }
        for card in &view.cards {
            write!(f, "  #{:<3} {}", card.product_id, card.name)?;
            if card.is_highlighted {
                write!(f, "  {HIGHLIGHT_BADGE}")?;
            }
            writeln!(f)?;

            write!(f, "       {}", card.formatted_price)?;
            if let Some(rating) = &card.formatted_rating {
                write!(f, "  rated {rating}")?;
            }
            writeln!(f)?;
            writeln!(f, "       {}", card.image_url)?;
        }

        let dots: Vec<&str> = view
            .dots
            .iter()
            .map(|dot| if dot.is_active { "●" } else { "○" })
            .collect();
        writeln!(
            f,
            "  {}  slide {} of {}",
            dots.join(" "),
            view.current_index + 1,
            view.dots.len()
        )?;
        writeln!(
            f,
            "  previous: {}  next: {}",
            enablement(view.is_previous_disabled),
            enablement(view.is_next_disabled)
        )?;

        if !view.announcement.is_empty() {
            writeln!(f, "  live: {}", view.announcement)?;
        }
        Ok(())
    }
}

fn enablement(disabled: bool) -> &'static str {
    if disabled { "disabled" } else { "enabled" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picks_core::{PersonalizedPicks, demo::demo_carousel};
    use picks_model::Product;

    #[test]
    fn first_slide() {
        let text = TextView(&demo_carousel().view()).to_string();

        assert!(text.starts_with("== Your Personalized Picks ==\n"));
        assert!(text.contains("Curated just for you • 5 items"));
        assert!(text.contains(
            "  #1   Breville The Luxe Brewer with Thermal Carafe  [Olive Pick]\n"
        ));
        assert!(text.contains("       $299.95\n"));
        assert!(text.contains("  ● ○ ○ ○ ○  slide 1 of 5\n"));
        assert!(text.contains("  previous: disabled  next: enabled\n"));
        assert!(!text.contains("#3"));
    }

    #[test]
    fn ratings_and_empty_catalogs() {
        let rated = PersonalizedPicks::new(vec![
            Product::new("a", "Grinder", "", 129.0).with_rating(4.76),
        ]);
        assert!(TextView(&rated.view()).to_string().contains("$129.00  rated 4.8"));

        let empty = PersonalizedPicks::default();
        assert!(TextView(&empty.view()).to_string().contains("(no products)"));
    }
}
