use crate::core::{ViewportSize, ViewportState};

/// Host-side view of the scrolling viewport. Implementations must answer
/// with current values on every call; the engine never caches them.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn size(&self) -> ViewportSize;

    fn state(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset(),
            size: self.size(),
        }
    }
}

/// Events the engine reacts to. Scroll and frame ticks both recompute
/// positions; resize throws the snapshots away and re-discovers targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    Frame,
    Scroll,
    Resize,
}

/// Pull-based event feed driving [`Engine::run`](crate::Engine::run).
/// Returning `None` ends the loop, which is also the teardown path:
/// dropping the source unsubscribes whatever backed it.
pub trait EventSource {
    fn next_event(&mut self) -> Option<ViewportEvent>;
}

impl EventSource for std::collections::VecDeque<ViewportEvent> {
    fn next_event(&mut self) -> Option<ViewportEvent> {
        self.pop_front()
    }
}
