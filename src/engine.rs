use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    core::{DEFAULT_SELECTOR, Speed, Translate3d},
    dom::Document,
    error::{ScrollaxError, ScrollaxResult},
    target::Target,
    viewport::{EventSource, Viewport, ViewportEvent},
};

/// Combined host boundary the engine runs against.
pub trait Host: Viewport + Document {}

impl<T: Viewport + Document> Host for T {}

/// Shared halt signal for [`Engine::run`]. Clones observe the same flag,
/// so an event source, a host callback, or another thread can stop a
/// loop that exclusively borrows the engine.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the loop halt before its next event.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Consumes a pending request, so one `stop` halts exactly one run.
    fn take(&self) -> bool {
        self.stopped.swap(false, Ordering::Relaxed)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Selector used to discover targets.
    pub selector: String,
    /// Speed applied to targets without a parseable override.
    pub default_speed: Speed,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_owned(),
            default_speed: Speed::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> ScrollaxResult<()> {
        if self.selector.trim().is_empty() {
            return Err(ScrollaxError::config("selector must not be empty"));
        }
        Ok(())
    }
}

/// Scroll-driven parallax positioning engine.
///
/// Owns only its target snapshots and config; the viewport and document
/// are injected per call, so the engine can be built, driven, and torn
/// down without touching any ambient state.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    targets: Vec<Target>,
    stop: StopHandle,
    running: bool,
}

impl Engine {
    /// Discovers targets and captures their geometry snapshots.
    ///
    /// Fails fast when the selector matches nothing; the error carries the
    /// selector and no host state has been touched at that point.
    #[tracing::instrument(skip(host))]
    pub fn new(host: &impl Host, config: EngineConfig) -> ScrollaxResult<Self> {
        config.validate()?;

        let targets = discover(host, &config)?;
        tracing::debug!(count = targets.len(), "captured parallax targets");

        Ok(Self {
            config,
            targets,
            stop: StopHandle::new(),
            running: false,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A clone of the engine's halt signal, to be held by whatever needs
    /// to end [`run`](Engine::run) while it exclusively borrows the
    /// engine.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// One frame: re-read the viewport and move every visible target.
    /// Invisible targets keep their last-applied transform.
    pub fn tick(&mut self, host: &mut impl Host) {
        let view = host.state();
        for target in &self.targets {
            if !target.is_visible(view) {
                continue;
            }
            let position = target.position(view);
            host.set_transform(target.node, Translate3d::vertical(position));
        }
    }

    /// Full re-initialization: throw the snapshots away and re-run
    /// discovery. This is the resize path; it shares the zero-match error
    /// contract with construction.
    #[tracing::instrument(skip(self, host))]
    pub fn refresh(&mut self, host: &mut impl Host) -> ScrollaxResult<()> {
        self.targets = discover(&*host, &self.config)?;
        tracing::debug!(count = self.targets.len(), "recaptured parallax targets");
        self.tick(host);
        Ok(())
    }

    pub fn handle(&mut self, host: &mut impl Host, event: ViewportEvent) -> ScrollaxResult<()> {
        match event {
            ViewportEvent::Frame | ViewportEvent::Scroll => {
                self.tick(host);
                Ok(())
            }
            ViewportEvent::Resize => self.refresh(host),
        }
    }

    /// Drains `events` until the source is exhausted or a stop is
    /// requested through [`stop`](Engine::stop) or a
    /// [`StopHandle`]. The stop request is checked before every event, so
    /// a request made before `run` halts it immediately and a request
    /// made mid-loop halts it at the next iteration. Each request is
    /// consumed by the run it halts.
    pub fn run(
        &mut self,
        host: &mut impl Host,
        events: &mut impl EventSource,
    ) -> ScrollaxResult<()> {
        self.running = true;
        let result = loop {
            if self.stop.take() {
                break Ok(());
            }
            let Some(event) = events.next_event() else {
                break Ok(());
            };
            if let Err(err) = self.handle(host, event) {
                break Err(err);
            }
        };
        self.running = false;
        result
    }

    /// Requests that [`run`](Engine::run) halt before its next event.
    pub fn stop(&self) {
        self.stop.stop();
    }
}

fn discover(host: &impl Host, config: &EngineConfig) -> ScrollaxResult<Vec<Target>> {
    let nodes = host.query(&config.selector);
    if nodes.is_empty() {
        return Err(ScrollaxError::no_targets(config.selector.clone()));
    }

    let view = host.state();
    Ok(nodes
        .into_iter()
        .map(|node| {
            Target::capture(
                node,
                host.bounding_rect(node),
                view,
                host.speed_attr(node).as_deref(),
                config.default_speed,
            )
        })
        .collect())
}
