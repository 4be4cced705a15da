use kurbo::Rect;

use crate::{
    core::{Speed, ViewportState},
    dom::{NodeId, resolve_speed_attr},
};

/// The sole positioning law: linear in speed, linear in `1 - progress`,
/// rounded to whole pixels.
pub fn displacement(progress: f64, speed: Speed) -> i32 {
    (f64::from(speed.get()) * 100.0 * (1.0 - progress)).round() as i32
}

/// One element registered for the effect. Geometry is snapshotted exactly
/// once, at capture; only the scroll-dependent progress is recomputed per
/// tick. A resize recaptures the whole record rather than patching it.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Target {
    pub node: NodeId,
    /// Document-absolute top, independent of the scroll offset at capture.
    pub top: f64,
    pub height: f64,
    pub speed: Speed,
    /// Displacement at the at-rest progress ratio, subtracted from every
    /// later displacement so the target starts visually neutral.
    pub base: i32,
}

impl Target {
    /// Snapshot `node` from its viewport-relative `rect` and the viewport
    /// state at capture time.
    pub fn capture(
        node: NodeId,
        rect: Rect,
        view: ViewportState,
        speed_attr: Option<&str>,
        default_speed: Speed,
    ) -> Self {
        let top = view.scroll_offset + rect.y0;
        let height = rect.height();
        let speed = resolve_speed_attr(speed_attr, default_speed);

        // At-rest ratio: where the element's entry point sits relative to
        // an unscrolled viewport. Outside [0, 1] for far-away elements.
        let at_rest = (-top + view.size.height) / (height + view.size.height);
        let base = displacement(at_rest, speed);

        Self {
            node,
            top,
            height,
            speed,
            base,
        }
    }

    /// Scroll-progress ratio under the current viewport state.
    pub fn progress(&self, view: ViewportState) -> f64 {
        (view.scroll_offset - self.top + view.size.height) / (self.height + view.size.height)
    }

    /// Strict visibility window: the viewport bottom has passed the
    /// target's top and the viewport top has not passed its bottom.
    pub fn is_visible(&self, view: ViewportState) -> bool {
        view.scroll_offset + view.size.height > self.top
            && view.scroll_offset < self.top + self.height
    }

    /// Vertical offset to apply this tick, normalized against `base`.
    pub fn position(&self, view: ViewportState) -> i32 {
        displacement(self.progress(view), self.speed) - self.base
    }
}
