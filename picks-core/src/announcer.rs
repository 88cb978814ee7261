//! Screen-reader announcements.
//!
//! Navigation writes a short message into a live region which is cleared
//! again after [`ANNOUNCEMENT_CLEAR_DELAY`]. The clear runs as a tokio task
//! that is cancelled when a newer announcement replaces the message or when
//! the region itself is dropped.

use parking_lot::Mutex;
use std::{
    fmt,
    sync::{Arc, Weak},
    time::Duration,
};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, trace};

/// How long an announcement stays in the live region.
pub const ANNOUNCEMENT_CLEAR_DELAY: Duration = Duration::from_millis(1000);

/// Sink for short accessibility announcements.
pub trait Announcer: Send + Sync + fmt::Debug {
    /// Publish `message`. Fire-and-forget; never fails.
    fn announce(&self, message: &str);

    /// Text currently exposed to assistive technology (empty when idle).
    fn current(&self) -> String;
}

/// Live region whose text clears itself after a delay.
///
/// Clones share the same region. Dropping the last clone cancels a pending
/// clear.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    inner: Arc<LiveRegionInner>,
}

#[derive(Debug)]
struct LiveRegionInner {
    text: watch::Sender<String>,
    clear_after: Duration,
    pending: Mutex<PendingClear>,
}

#[derive(Debug, Default)]
struct PendingClear {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::with_clear_delay(ANNOUNCEMENT_CLEAR_DELAY)
    }

    pub fn with_clear_delay(clear_after: Duration) -> Self {
        let (text, _) = watch::channel(String::new());
        Self {
            inner: Arc::new(LiveRegionInner {
                text,
                clear_after,
                pending: Mutex::new(PendingClear::default()),
            }),
        }
    }

    /// Watch the region text; receives both announcements and clears.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.text.subscribe()
    }

    pub fn text(&self) -> String {
        self.inner.text.borrow().clone()
    }

    pub fn clear_delay(&self) -> Duration {
        self.inner.clear_after
    }

    /// Whether a clear is scheduled and has not fired yet.
    pub fn has_pending_clear(&self) -> bool {
        self.inner
            .pending
            .lock()
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Announcer for LiveRegion {
    fn announce(&self, message: &str) {
        let mut pending = self.inner.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        self.inner.text.send_replace(message.to_string());

        if let Some(previous) = pending.handle.take() {
            previous.abort();
        }

        let Ok(runtime) = Handle::try_current() else {
            debug!(
                announcement = message,
                "no async runtime available; announcement will not auto-clear"
            );
            return;
        };

        let generation = pending.generation;
        let delay = self.inner.clear_after;
        let region = Arc::downgrade(&self.inner);
        pending.handle =
            Some(runtime.spawn(clear_after_delay(region, generation, delay)));
        trace!(announcement = message, generation, "announcement published");
    }

    fn current(&self) -> String {
        self.text()
    }
}

async fn clear_after_delay(
    region: Weak<LiveRegionInner>,
    generation: u64,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let Some(region) = region.upgrade() else {
        return;
    };
    let mut pending = region.pending.lock();
    if pending.generation == generation {
        region.text.send_replace(String::new());
        pending.handle = None;
        trace!(generation, "announcement cleared");
    }
}

impl Drop for LiveRegionInner {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_without_runtime_keeps_text() {
        let region = LiveRegion::new();
        region.announce("Next slide");

        assert_eq!(region.text(), "Next slide");
        assert!(!region.has_pending_clear());
    }

    #[tokio::test(start_paused = true)]
    async fn clears_after_delay() {
        let region = LiveRegion::new();
        assert_eq!(region.clear_delay(), ANNOUNCEMENT_CLEAR_DELAY);
        region.announce("Previous slide");

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(region.current(), "Previous slide");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(region.current(), "");
        assert!(!region.has_pending_clear());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_honoured() {
        let region = LiveRegion::with_clear_delay(Duration::from_millis(250));
        assert_eq!(region.clear_delay(), Duration::from_millis(250));

        region.announce("Slide 3 of 5");
        assert!(region.has_pending_clear());

        tokio::time::sleep(region.clear_delay() - Duration::from_millis(1))
            .await;
        assert_eq!(region.current(), "Slide 3 of 5");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(region.current(), "");
    }
}
