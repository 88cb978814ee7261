//! Display strings shared by the carousel cards and header.

use picks_model::{Price, Rating};

/// Format a price as `$` followed by two decimals.
///
/// Invalid prices (missing, non-numeric, non-finite) render as `$0.00`.
pub fn format_price(price: impl Into<Price>) -> String {
    match price.into().value() {
        Some(value) => format!("${}", to_fixed(value, 2)),
        None => "$0.00".to_string(),
    }
}

/// Format a rating with one decimal; invalid ratings render as `0.0`.
pub fn format_rating(rating: impl Into<Rating>) -> String {
    match rating.into().value() {
        Some(value) => to_fixed(value, 1),
        None => "0.0".to_string(),
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point rendering that rounds ties away from zero.
///
/// The exact decimal expansion of `value` is rounded half-up on its
/// magnitude, so `4.25` becomes `4.3` and `0.125` becomes `0.13`, while
/// `1.005` (stored as `1.00499...`) stays `1.00`. Negative zero prints
/// without a sign.
fn to_fixed(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) =
        exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    let round_up = fraction
        .as_bytes()
        .get(digits)
        .is_some_and(|digit| *digit >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let point = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (index, digit) in kept.iter().enumerate() {
        if index == point {
            out.push('.');
        }
        out.push(char::from(*digit));
    }
    out
}

/// Subtitle used when the host does not supply one.
pub fn curated_subtitle(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("Curated just for you • {count} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(19.5), "$19.50");
        assert_eq!(format_price(349.95), "$349.95");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(12.0), "$12.00");
    }

    #[test]
    fn invalid_prices_are_zero() {
        assert_eq!(format_price(Price::invalid()), "$0.00");
        assert_eq!(format_price(f64::NAN), "$0.00");
        assert_eq!(format_price(None::<f64>), "$0.00");

        let from_text: Price = serde_json::from_str("\"bad\"").unwrap();
        assert_eq!(format_price(from_text), "$0.00");
    }

    #[test]
    fn ratings_have_one_decimal() {
        assert_eq!(format_rating(4.26), "4.3");
        assert_eq!(format_rating(3.0), "3.0");
        assert_eq!(format_rating(Rating::invalid()), "0.0");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_rating(4.25), "4.3");
        assert_eq!(format_rating(0.05), "0.1");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(2.675), "$2.67");
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_price(99.995), "$100.00");
        assert_eq!(format_price(9.999), "$10.00");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_price(-0.0), "$0.00");
        assert_eq!(format_rating(-0.0), "0.0");
        assert_eq!(format_price(-1.5), "$-1.50");
    }

    #[test]
    fn fixed_point_without_fraction() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.4, 0), "0");
    }

    #[test]
    fn subtitle_pluralizes() {
        assert_eq!(curated_subtitle(5), "Curated just for you • 5 items");
        assert_eq!(curated_subtitle(1), "Curated just for you • 1 item");
        assert_eq!(curated_subtitle(0), "Curated just for you • 0 items");
    }
}
