//! "Why Choose Us" auto-advancing highlights.

use std::time::Duration;

use tokio::sync::watch;
use trovolio_core::{RotationHandle, RotationTimer};

use crate::types::Highlight;

/// Highlights with a running rotation. Dropping the view stops the timer.
pub struct HighlightsView {
    items: Vec<Highlight>,
    rotation: RotationHandle,
}

impl HighlightsView {
    /// Start rotating through `items`. Must be called within a Tokio runtime.
    pub fn start(items: Vec<Highlight>, period: Duration) -> Self {
        let rotation = RotationTimer::spawn(period, items.len());
        Self { items, rotation }
    }

    pub fn items(&self) -> &[Highlight] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.rotation.current()
    }

    /// The highlight currently shown, if there are any.
    pub fn current(&self) -> Option<&Highlight> {
        self.items.get(self.index())
    }

    /// Receiver that changes on every advance.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.rotation.subscribe()
    }

    /// Freeze on the current highlight, e.g. while hovered.
    pub fn stop(&self) {
        self.rotation.stop();
    }

    pub fn is_running(&self) -> bool {
        !self.rotation.is_stopped()
    }

    /// Stop the timer and wait for it to exit.
    pub async fn teardown(self) {
        self.rotation.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[tokio::test(start_paused = true)]
    async fn test_rotates_through_highlights() {
        let view = HighlightsView::start(samples::highlights(), Duration::from_millis(4000));
        assert_eq!(view.current().map(|h| h.title.as_str()), Some("Fast Delivery"));

        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(view.index(), 1);
        assert_eq!(view.current().map(|h| h.title.as_str()), Some("Always On"));

        view.stop();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(view.index(), 1);
        assert!(!view.is_running());
        view.teardown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_highlights() {
        let view = HighlightsView::start(Vec::new(), Duration::from_millis(250));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(view.current().is_none());
        view.teardown().await;
    }
}
