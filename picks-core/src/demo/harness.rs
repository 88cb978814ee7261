use tracing::info;

use super::toast::{Toast, ToastId, ToastLevel, ToastManager};
use crate::events::{CarouselEvent, ShopNowEvent};

/// Host-side handler for carousel events. Logs and notifies; holds no
/// business state beyond the toast list.
#[derive(Debug, Default)]
pub struct DemoHarness {
    toasts: ToastManager,
}

impl DemoHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &CarouselEvent) -> ToastId {
        match event {
            CarouselEvent::ShopNow(shop_now) => self.handle_shop_now(shop_now),
        }
    }

    pub fn handle_shop_now(&mut self, event: &ShopNowEvent) -> ToastId {
        info!(
            product_id = %event.product_id,
            product = ?event.product,
            "Shop Now"
        );
        self.show_notification(
            "Shop Now",
            format!("Navigating to {}", event.product.name),
            ToastLevel::Info,
        )
    }

    pub fn show_notification(
        &mut self,
        title: &str,
        message: String,
        level: ToastLevel,
    ) -> ToastId {
        let id = self.toasts.push(level, title, message);
        if let Some(toast) = self.toasts.get(id) {
            info!(toast = %toast.id, "{toast}");
        }
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }
}
