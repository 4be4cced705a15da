//! In-memory host double: a flat document of measurable elements plus a
//! scrollable viewport, loadable from JSON. Backs the CLI and the
//! integration tests; a browser embedding would implement the same two
//! traits against a live DOM instead.

use kurbo::Rect;

use crate::{
    core::{Translate3d, ViewportSize},
    dom::{Document, NodeId},
    viewport::Viewport,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub viewport: ViewportSize,
    pub elements: Vec<SceneElement>,
    #[serde(default)]
    pub scroll_offset: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneElement {
    /// Document-absolute top in pixels.
    pub top: f64,
    pub height: f64,
    #[serde(default)]
    pub classes: Vec<String>,
    /// Raw speed-override attribute, as it would appear in markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    /// Last transform applied by the engine, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Translate3d>,
}

impl Scene {
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn transform_of(&self, node: NodeId) -> Option<Translate3d> {
        self.elements.get(node.0 as usize).and_then(|el| el.transform)
    }
}

impl Viewport for Scene {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn size(&self) -> ViewportSize {
        self.viewport
    }
}

impl Document for Scene {
    /// Class-selector matching only (`.name`), the one form the effect
    /// uses. A bare `name` is accepted as the same selector.
    fn query(&self, selector: &str) -> Vec<NodeId> {
        let class = selector.strip_prefix('.').unwrap_or(selector);
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        let Some(el) = self.elements.get(node.0 as usize) else {
            return Rect::ZERO;
        };
        let y0 = el.top - self.scroll_offset;
        Rect::new(0.0, y0, self.viewport.width, y0 + el.height)
    }

    fn speed_attr(&self, node: NodeId) -> Option<String> {
        self.elements.get(node.0 as usize).and_then(|el| el.speed.clone())
    }

    fn set_transform(&mut self, node: NodeId, transform: Translate3d) {
        if let Some(el) = self.elements.get_mut(node.0 as usize) {
            el.transform = Some(transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            viewport: ViewportSize {
                width: 1440.0,
                height: 900.0,
            },
            elements: vec![
                SceneElement {
                    top: 100.0,
                    height: 200.0,
                    classes: vec!["js-parallax".to_owned()],
                    speed: Some("3".to_owned()),
                    transform: None,
                },
                SceneElement {
                    top: 600.0,
                    height: 150.0,
                    classes: vec!["hero".to_owned()],
                    speed: None,
                    transform: None,
                },
            ],
            scroll_offset: 0.0,
        }
    }

    #[test]
    fn query_matches_class_with_or_without_dot() {
        let scene = scene();
        assert_eq!(scene.query(".js-parallax"), vec![NodeId(0)]);
        assert_eq!(scene.query("js-parallax"), vec![NodeId(0)]);
        assert!(scene.query(".missing").is_empty());
    }

    #[test]
    fn bounding_rect_tracks_scroll() {
        let mut scene = scene();
        assert_eq!(scene.bounding_rect(NodeId(0)).y0, 100.0);

        scene.set_scroll_offset(40.0);
        let rect = scene.bounding_rect(NodeId(0));
        assert_eq!(rect.y0, 60.0);
        assert_eq!(rect.height(), 200.0);
    }

    #[test]
    fn unissued_ids_are_absent_not_panics() {
        let mut scene = scene();
        let ghost = NodeId(99);

        assert_eq!(scene.bounding_rect(ghost), Rect::ZERO);
        assert_eq!(scene.speed_attr(ghost), None);

        scene.set_transform(ghost, Translate3d::vertical(7));
        assert_eq!(scene.transform_of(ghost), None);
    }

    #[test]
    fn transforms_are_stored_per_element() {
        let mut scene = scene();
        scene.set_transform(NodeId(1), Translate3d::vertical(-42));
        assert_eq!(scene.transform_of(NodeId(1)), Some(Translate3d::vertical(-42)));
        assert_eq!(scene.transform_of(NodeId(0)), None);
    }
}
