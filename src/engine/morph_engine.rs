//! Registry of morph targets and the timeline-driven playback that renders them.
//!
//! The engine never owns a clock. `play` hands a progress track to the host's
//! [`Timeline`]; every progress notification re-renders all registered targets
//! in one pass. Each playback carries a generation number, and anything that
//! supersedes it (`play`, `stop`, `render_static`) makes its later ticks inert.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::animation::ease::Ease;
use crate::animation::timeline::{ProgressTrack, Timeline};
use crate::engine::target::{MorphTarget, TargetId};
use crate::foundation::error::{MorphError, MorphResult};

/// Playback settings shared by every `play` call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of one playback.
    pub duration_ms: f64,
    /// Curve the timeline applies to progress.
    pub ease: Ease,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            ease: Ease::Linear,
        }
    }
}

/// What the engine last rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Source pose rendered (or nothing rendered yet).
    Idle,
    /// A playback is in flight.
    Playing,
    /// Target pose rendered.
    Settled,
}

/// Arguments to [`MorphEngine::play`].
pub struct PlayOptions<'a> {
    /// Clock that drives progress. Required.
    pub timeline: Option<&'a mut dyn Timeline>,
    /// Vertex stride for in-flight frames (level of detail).
    pub sample_stride: usize,
    /// Where in the timeline's schedule playback starts.
    pub start_offset_ms: f64,
    /// Called once when this playback reaches the end, unless superseded.
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl Default for PlayOptions<'_> {
    fn default() -> Self {
        Self {
            timeline: None,
            sample_stride: 1,
            start_offset_ms: 0.0,
            on_complete: None,
        }
    }
}

impl<'a> PlayOptions<'a> {
    /// Options bound to `timeline`, everything else default.
    pub fn on(timeline: &'a mut dyn Timeline) -> Self {
        Self {
            timeline: Some(timeline),
            ..Self::default()
        }
    }

    /// Set [`PlayOptions::sample_stride`].
    pub fn stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride;
        self
    }

    /// Set [`PlayOptions::start_offset_ms`].
    pub fn offset(mut self, offset_ms: f64) -> Self {
        self.start_offset_ms = offset_ms;
        self
    }

    /// Set the completion callback.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

/// Token for one `play` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    generation: u64,
}

struct EngineState {
    next_id: u64,
    targets: BTreeMap<TargetId, Rc<MorphTarget>>,
    generation: u64,
    phase: Phase,
}

impl EngineState {
    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Disposer returned by [`MorphEngine::register`]. Disposing after the engine
/// is gone, or twice, is a no-op.
#[derive(Debug)]
pub struct Registration {
    id: TargetId,
    state: Weak<RefCell<EngineState>>,
}

impl Registration {
    /// Id of the registered target.
    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Remove the target. Returns `true` only if it was still registered.
    pub fn dispose(self) -> bool {
        match self.state.upgrade() {
            Some(state) => state.borrow_mut().targets.remove(&self.id).is_some(),
            None => false,
        }
    }
}

/// Registry of morph targets plus the playback that renders them.
pub struct MorphEngine {
    config: EngineConfig,
    state: Rc<RefCell<EngineState>>,
}

impl Default for MorphEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MorphEngine {
    /// Empty engine with the given playback settings.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: Rc::new(RefCell::new(EngineState {
                next_id: 0,
                targets: BTreeMap::new(),
                generation: 0,
                phase: Phase::Idle,
            })),
        }
    }

    /// Playback settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add a target. It joins the next rendered frame.
    pub fn register(&self, target: MorphTarget) -> Registration {
        let mut state = self.state.borrow_mut();
        let id = TargetId(state.next_id);
        state.next_id += 1;
        state.targets.insert(id, Rc::new(target));
        tracing::debug!(%id, total = state.targets.len(), "registered morph target");
        Registration {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Returns `false` for ids that are unknown or already disposed.
    pub fn unregister(&self, id: TargetId) -> bool {
        self.state.borrow_mut().targets.remove(&id).is_some()
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.state.borrow().targets.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().targets.is_empty()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<TargetId> {
        self.state.borrow().targets.keys().copied().collect()
    }

    /// What the engine last rendered.
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// `true` while `playback` is the live, unfinished playback.
    pub fn is_current(&self, playback: Playback) -> bool {
        let state = self.state.borrow();
        state.generation == playback.generation && state.phase == Phase::Playing
    }

    /// Write the source (`t < 1`) or target (`t >= 1`) pose of every target.
    /// Cancels any in-flight playback. Returns how many targets were written.
    pub fn render_static(&self, t: f64, precision: usize) -> usize {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.supersede();
            state.phase = if t >= 1.0 { Phase::Settled } else { Phase::Idle };
            state.targets.values().cloned().collect::<Vec<_>>()
        };
        snapshot
            .iter()
            .filter(|target| target.write_pose(t, precision))
            .count()
    }

    /// Cancel the in-flight playback, leaving drawables as last written.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.supersede();
        if state.phase == Phase::Playing {
            state.phase = Phase::Idle;
        }
    }

    /// Attach a progress track to the supplied timeline and return immediately.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(stride = opts.sample_stride, offset_ms = opts.start_offset_ms)
    )]
    pub fn play(&self, opts: PlayOptions<'_>) -> MorphResult<Playback> {
        let PlayOptions {
            timeline,
            sample_stride,
            start_offset_ms,
            on_complete,
        } = opts;
        let Some(timeline) = timeline else {
            return Err(MorphError::MissingClock);
        };
        if sample_stride == 0 {
            return Err(MorphError::validation("sample stride must be >= 1"));
        }
        if !self.config.duration_ms.is_finite() || self.config.duration_ms < 0.0 {
            return Err(MorphError::validation(format!(
                "duration must be finite and >= 0 (got {})",
                self.config.duration_ms
            )));
        }
        if !start_offset_ms.is_finite() {
            return Err(MorphError::validation("start offset must be finite"));
        }

        let generation = {
            let mut state = self.state.borrow_mut();
            state.phase = Phase::Playing;
            state.supersede()
        };

        let update_state = Rc::downgrade(&self.state);
        let mut last = 0.0_f64;
        let on_update = move |progress: f64| {
            // NaN collapses to the previous value via f64::max.
            let t = progress.clamp(0.0, 1.0).max(last);
            last = t;
            render_frame(&update_state, generation, t, sample_stride);
        };

        let complete_state = Rc::downgrade(&self.state);
        let on_done = move || {
            if !render_frame(&complete_state, generation, 1.0, sample_stride) {
                tracing::debug!(generation, "superseded playback completed");
                return;
            }
            if let Some(state) = complete_state.upgrade() {
                let mut state = state.borrow_mut();
                if state.generation == generation {
                    state.phase = Phase::Settled;
                }
            }
            if let Some(cb) = on_complete {
                cb();
            }
        };

        timeline.add(
            ProgressTrack::new(self.config.duration_ms, self.config.ease, on_update, on_done),
            start_offset_ms,
        );
        tracing::debug!(generation, "playback attached");
        Ok(Playback { generation })
    }
}

/// One lock-step pass over a snapshot of the registry. Returns `false` when
/// the playback is stale or the engine is gone.
fn render_frame(
    state: &Weak<RefCell<EngineState>>,
    generation: u64,
    t: f64,
    stride: usize,
) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    let snapshot = {
        let Ok(state) = state.try_borrow() else {
            tracing::warn!("engine busy, dropping frame");
            return false;
        };
        if state.generation != generation {
            return false;
        }
        state.targets.values().cloned().collect::<Vec<_>>()
    };
    for target in &snapshot {
        target.write_frame(t, stride);
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/engine/morph_engine.rs"]
mod tests;
