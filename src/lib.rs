#![forbid(unsafe_code)]

pub mod core;
pub mod device;
pub mod dom;
pub mod engine;
pub mod error;
pub mod scene;
pub mod target;
pub mod viewport;

pub use core::{DEFAULT_SELECTOR, DEFAULT_SPEED, MIN_EFFECT_WIDTH, SPEED_LIMIT};
pub use core::{Speed, Translate3d, ViewportSize, ViewportState};
pub use device::DeviceProfile;
pub use dom::{Document, NodeId};
pub use engine::{Engine, EngineConfig, Host, StopHandle};
pub use error::{ScrollaxError, ScrollaxResult};
pub use scene::{Scene, SceneElement};
pub use target::{Target, displacement};
pub use viewport::{EventSource, Viewport, ViewportEvent};
