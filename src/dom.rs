use kurbo::Rect;

use crate::core::{Speed, Translate3d};

/// Opaque handle to one element of the host document. Stable for the
/// lifetime of the document; the engine never fabricates ids.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Host-side view of the document the effect runs against.
///
/// Node ids originate from [`query`](Document::query). Implementations
/// treat an id they never issued as absent: a zero rect, no attribute,
/// and a discarded transform — never a panic.
pub trait Document {
    /// All nodes matching `selector`, in document order.
    fn query(&self, selector: &str) -> Vec<NodeId>;

    /// Viewport-relative bounding rect of `node` (the
    /// `getBoundingClientRect` contract: y0 shifts as the host scrolls).
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Raw per-element speed override attribute, if the element carries one.
    fn speed_attr(&self, node: NodeId) -> Option<String>;

    /// Apply a render-time transform to `node`, replacing any previous one.
    fn set_transform(&mut self, node: NodeId, transform: Translate3d);
}

/// Resolves a raw speed-override attribute against the engine default.
/// Anything that does not parse as an integer falls back to `default`;
/// a malformed attribute is never an error.
pub fn resolve_speed_attr(attr: Option<&str>, default: Speed) -> Speed {
    match attr.and_then(|raw| raw.trim().parse::<i32>().ok()) {
        Some(value) => Speed::new(value),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_parses_and_clamps() {
        let default = Speed::new(-5);
        assert_eq!(resolve_speed_attr(Some("7"), default).get(), 7);
        assert_eq!(resolve_speed_attr(Some(" 15 "), default).get(), 10);
        assert_eq!(resolve_speed_attr(Some("-12"), default).get(), -10);
    }

    #[test]
    fn malformed_or_missing_override_falls_back() {
        let default = Speed::new(-5);
        assert_eq!(resolve_speed_attr(Some("fast"), default), default);
        assert_eq!(resolve_speed_attr(Some(""), default), default);
        assert_eq!(resolve_speed_attr(Some("3.5"), default), default);
        assert_eq!(resolve_speed_attr(None, default), default);
    }
}
