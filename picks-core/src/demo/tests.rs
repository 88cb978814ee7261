use crate::demo::{
    DEMO_SUBTITLE, DemoHarness, ToastLevel, demo_carousel, sample_products,
};

#[test]
fn sample_catalog_matches_the_design() {
    let products = sample_products();
    assert_eq!(products.len(), 5);

    let highlighted: Vec<_> = products
        .iter()
        .filter(|product| product.is_highlighted)
        .map(|product| product.id.to_string())
        .collect();
    assert_eq!(highlighted, ["1", "2", "4"]);

    let carousel = demo_carousel();
    assert_eq!(carousel.display_subtitle(), DEMO_SUBTITLE);
    assert_eq!(carousel.title(), "Your Personalized Picks");
}

#[test]
fn shop_now_raises_an_info_toast() {
    let carousel = demo_carousel();
    let mut harness = DemoHarness::new();

    let event = carousel.on_select("2").expect("known product");
    let id = harness.handle_shop_now(&event);

    let toast = &harness.toasts()[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.level, ToastLevel::Info);
    assert_eq!(
        toast.to_string(),
        "[INFO] Shop Now: Navigating to Fellow Aiden Coffee Brewer"
    );

    assert!(harness.dismiss(id));
    assert!(!harness.dismiss(id));
    assert!(harness.toasts().is_empty());
}
