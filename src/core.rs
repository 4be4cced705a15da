/// Marker class that tags elements participating in the effect.
pub const DEFAULT_SELECTOR: &str = ".js-parallax";

/// Speed applied to targets without an explicit override.
pub const DEFAULT_SPEED: i32 = -5;

/// Magnitude bound for the effect speed.
pub const SPEED_LIMIT: i32 = 10;

/// Minimum viewport width (logical px) for the effect to be enabled.
pub const MIN_EFFECT_WIDTH: f64 = 1200.0;

/// Effect speed, clamped to [-SPEED_LIMIT, SPEED_LIMIT] at construction.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "i32", into = "i32")]
pub struct Speed(i32);

impl Speed {
    pub fn new(speed: i32) -> Self {
        Self(speed.clamp(-SPEED_LIMIT, SPEED_LIMIT))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl From<i32> for Speed {
    fn from(speed: i32) -> Self {
        Self::new(speed)
    }
}

impl From<Speed> for i32 {
    fn from(speed: Speed) -> i32 {
        speed.0
    }
}

/// Whole-pixel 3-axis translation. The effect only ever displaces
/// vertically; x and z stay 0 to hint composited rendering downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Translate3d {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Translate3d {
    pub fn vertical(y: i32) -> Self {
        Self { x: 0, y, z: 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Scroll offset plus viewport size, read fresh from the host on every
/// tick. Never cached across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub size: ViewportSize,
}
