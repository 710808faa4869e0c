//! The clock seam. Hosts own scheduling; the morph engine only hands a
//! [`ProgressTrack`] to whatever [`Timeline`] it is given.

use crate::animation::ease::Ease;

/// One progress-driven animation slot: `on_update` receives eased progress in
/// `[0, 1]`, `on_complete` fires once after progress reaches 1.
pub struct ProgressTrack {
    /// Length of the track; 0 completes on the first tick.
    pub duration_ms: f64,
    /// Curve applied to raw progress before `on_update`.
    pub ease: Ease,
    on_update: Box<dyn FnMut(f64)>,
    on_complete: Box<dyn FnOnce()>,
}

impl ProgressTrack {
    /// Track with its update and completion callbacks.
    pub fn new(
        duration_ms: f64,
        ease: Ease,
        on_update: impl FnMut(f64) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            duration_ms,
            ease,
            on_update: Box::new(on_update),
            on_complete: Box::new(on_complete),
        }
    }

    /// Deliver one progress notification. Timelines call this per frame.
    pub fn update(&mut self, progress: f64) {
        (self.on_update)(progress);
    }

    /// Signal completion, consuming the track.
    pub fn complete(self) {
        (self.on_complete)();
    }
}

impl std::fmt::Debug for ProgressTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTrack")
            .field("duration_ms", &self.duration_ms)
            .field("ease", &self.ease)
            .finish_non_exhaustive()
    }
}

/// External scheduler contract.
pub trait Timeline {
    /// Schedule `track` to start `offset_ms` into this timeline.
    fn add(&mut self, track: ProgressTrack, offset_ms: f64);
}

struct Scheduled {
    offset_ms: f64,
    duration_ms: f64,
    ease: Ease,
    on_update: Box<dyn FnMut(f64)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// Deterministic, caller-stepped timeline.
#[derive(Default)]
pub struct ManualTimeline {
    now_ms: f64,
    paused: bool,
    entries: Vec<Scheduled>,
}

impl ManualTimeline {
    /// Timeline at time 0 with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Tracks still waiting or running.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stop reacting to `advance`.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Undo [`ManualTimeline::pause`].
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the timeline is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time at which the last pending track completes (0 once all have).
    pub fn end_ms(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.offset_ms + e.duration_ms)
            .fold(0.0, f64::max)
    }

    /// No track is waiting or running.
    pub fn is_finished(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the clock forward and notify every started, unfinished track.
    /// Ignored while paused or for non-positive steps.
    pub fn advance(&mut self, dt_ms: f64) {
        if self.paused || !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        self.now_ms += dt_ms;
        self.tick();
    }

    /// Step in `step_ms` increments until every track has completed or the
    /// timeline is paused from a callback. Returns the number of steps taken.
    pub fn run_to_end(&mut self, step_ms: f64) -> usize {
        if !step_ms.is_finite() || step_ms <= 0.0 {
            return 0;
        }
        let mut steps = 0;
        while !self.is_finished() && !self.paused {
            self.advance(step_ms);
            steps += 1;
        }
        steps
    }

    fn tick(&mut self) {
        let now = self.now_ms;
        // Completed tracks are dropped.
        self.entries.retain_mut(|entry| {
            if now < entry.offset_ms {
                return true;
            }
            let raw = if entry.duration_ms <= 0.0 {
                1.0
            } else {
                ((now - entry.offset_ms) / entry.duration_ms).clamp(0.0, 1.0)
            };
            (entry.on_update)(entry.ease.apply(raw));
            if raw < 1.0 {
                return true;
            }
            if let Some(on_complete) = entry.on_complete.take() {
                on_complete();
            }
            false
        });
    }
}

impl Timeline for ManualTimeline {
    fn add(&mut self, track: ProgressTrack, offset_ms: f64) {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.entries.push(Scheduled {
            offset_ms: sanitize(offset_ms),
            duration_ms: sanitize(track.duration_ms),
            ease: track.ease,
            on_update: track.on_update,
            on_complete: Some(track.on_complete),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
