use crate::core::MIN_EFFECT_WIDTH;

/// Capabilities sampled once, at startup, to decide whether the effect is
/// constructed at all.
///
/// The gate is not re-evaluated when the viewport later crosses the
/// width threshold: a load-time decision stays made.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    /// Whether the platform exposes an orientation API (mobile/tablet).
    pub orientation_api: bool,
    pub viewport_width: f64,
}

impl DeviceProfile {
    /// True iff the effect should run: a non-orientation device with a
    /// viewport wider than [`MIN_EFFECT_WIDTH`].
    pub fn supports_effect(&self) -> bool {
        !self.orientation_api && self.viewport_width > MIN_EFFECT_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_desktop_is_supported() {
        let profile = DeviceProfile {
            orientation_api: false,
            viewport_width: 1201.0,
        };
        assert!(profile.supports_effect());
    }

    #[test]
    fn threshold_width_is_excluded() {
        let profile = DeviceProfile {
            orientation_api: false,
            viewport_width: 1200.0,
        };
        assert!(!profile.supports_effect());
    }

    #[test]
    fn orientation_devices_are_excluded() {
        let profile = DeviceProfile {
            orientation_api: true,
            viewport_width: 1920.0,
        };
        assert!(!profile.supports_effect());
    }
}
