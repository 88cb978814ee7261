use std::path::Path;

use picks_core::{catalog::load_products, demo::sample_products};

#[test]
fn bundled_catalog_matches_the_sample_products() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../public/products.json");

    let products = load_products(&path).unwrap();

    assert_eq!(products, sample_products());
}
