use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::animation::timeline::ManualTimeline;
use crate::engine::drawable::SvgPathElement;
use crate::foundation::core::Rgb8;
use crate::interp::color::ColorBlend;
use crate::interp::pair::{MorphOptions, build_pair};
use crate::interp::transform::{TransformBlend, TransformDescriptor};
use crate::outline::builder::{build_animated, build_static};

const SQUARE: &str = "M0,0 L100,0 L100,100 L0,100 Z";
const DIAMOND: &str = "M 100,20 L 180,100 L 100,180 L 20,100 Z";

fn opts() -> MorphOptions {
    MorphOptions {
        samples: 24,
        ..MorphOptions::default()
    }
}

fn target(
    from: &str,
    to: &str,
) -> (MorphTarget, Rc<RefCell<SvgPathElement>>, crate::interp::pair::MorphPair) {
    let pair = build_pair(from, to, &opts()).unwrap();
    let el = SvgPathElement::new().shared();
    let color = ColorBlend::from_hex("#60A5FA", "#F97316").unwrap();
    let t = MorphTarget::new(el.clone(), Some(pair.clone()), color, 24);
    (t, el, pair)
}

/// Holds the attached track so a test can drive it by hand.
#[derive(Default)]
struct CapturingTimeline {
    tracks: Vec<(ProgressTrack, f64)>,
}

impl Timeline for CapturingTimeline {
    fn add(&mut self, track: ProgressTrack, offset_ms: f64) {
        self.tracks.push((track, offset_ms));
    }
}

#[test]
fn register_and_dispose() {
    let engine = MorphEngine::default();
    let (a, _, _) = target(SQUARE, DIAMOND);
    let (b, _, _) = target(DIAMOND, SQUARE);
    let ra = engine.register(a);
    let rb = engine.register(b);
    assert_ne!(ra.id(), rb.id());
    assert_eq!(engine.len(), 2);

    let a_id = ra.id();
    assert!(ra.dispose());
    assert!(!engine.unregister(a_id));
    assert_eq!(engine.ids(), vec![rb.id()]);
    assert!(engine.unregister(rb.id()));
    assert!(engine.is_empty());
}

#[test]
fn static_render_writes_source_pose() {
    let engine = MorphEngine::default();
    let (t, el, pair) = target(SQUARE, DIAMOND);
    engine.register(t);

    assert_eq!(engine.render_static(0.0, 1), 1);
    let el = el.borrow();
    assert_eq!(el.d, build_static(pair.a().as_slice(), 1));
    assert_eq!(el.fill, Some(Rgb8::from_hex("#60A5FA").unwrap()));
    assert_eq!(el.stroke, el.fill);
    assert!(el.transform.is_none());
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn static_render_is_idempotent() {
    let engine = MorphEngine::default();
    let (t, el, _) = target(SQUARE, DIAMOND);
    engine.register(t);
    engine.render_static(0.0, 2);
    let first = el.borrow().clone();
    engine.render_static(0.0, 2);
    let second = el.borrow().clone();
    assert_eq!(first.d, second.d);
    assert_eq!(first.fill, second.fill);
}

#[test]
fn static_render_snaps_to_poses() {
    let engine = MorphEngine::default();
    let (t, el, pair) = target(SQUARE, DIAMOND);
    let blend = TransformBlend::new(
        TransformDescriptor::default(),
        TransformDescriptor {
            x: 10.0,
            scale: 0.5,
            ..TransformDescriptor::default()
        },
    );
    engine.register(t.with_transform(blend));

    engine.render_static(0.6, 1);
    assert_eq!(el.borrow().d, build_static(pair.a().as_slice(), 1));
    assert_eq!(el.borrow().fill, Some(Rgb8::from_hex("#60A5FA").unwrap()));
    assert_eq!(el.borrow().transform, Some(TransformDescriptor::default()));

    engine.render_static(1.0, 1);
    assert_eq!(el.borrow().d, build_static(pair.b().as_slice(), 1));
    assert_eq!(el.borrow().fill, Some(Rgb8::from_hex("#F97316").unwrap()));
    assert_eq!(el.borrow().transform.map(|t| t.x), Some(10.0));
    assert_eq!(engine.phase(), Phase::Settled);
}

#[test]
fn sample_budget_caps_static_vertices() {
    let engine = MorphEngine::default();
    let pair = build_pair(SQUARE, DIAMOND, &opts()).unwrap();
    let el = SvgPathElement::new().shared();
    let color = ColorBlend::from_hex("#000", "#fff").unwrap();
    engine.register(MorphTarget::new(el.clone(), Some(pair.clone()), color, 4));
    engine.render_static(0.0, 0);
    assert_eq!(el.borrow().d, build_static(&pair.a().as_slice()[..4], 0));
}

#[test]
fn play_requires_a_clock() {
    let engine = MorphEngine::default();
    let err = engine.play(PlayOptions::default()).unwrap_err();
    assert!(matches!(err, MorphError::MissingClock));
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn play_rejects_zero_stride() {
    let engine = MorphEngine::default();
    let mut tl = ManualTimeline::new();
    let err = engine.play(PlayOptions::on(&mut tl).stride(0)).unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));
    assert!(tl.is_empty());
}

#[test]
fn play_runs_to_target_and_completes_once() {
    let engine = MorphEngine::new(EngineConfig {
        duration_ms: 100.0,
        ..EngineConfig::default()
    });
    let (t, el, pair) = target(SQUARE, DIAMOND);
    engine.register(t);

    let done = Rc::new(Cell::new(0));
    let mut tl = ManualTimeline::new();
    let playback = engine
        .play(PlayOptions::on(&mut tl).offset(20.0).on_complete({
            let done = Rc::clone(&done);
            move || done.set(done.get() + 1)
        }))
        .unwrap();
    assert!(engine.is_current(playback));
    assert_eq!(el.borrow().writes(), 0);

    tl.advance(70.0);
    let mid = build_animated(pair.a().as_slice(), pair.b().as_slice(), 0.5, 1);
    assert_eq!(el.borrow().d, mid);

    tl.run_to_end(16.0);
    assert_eq!(done.get(), 1);
    assert_eq!(
        el.borrow().d,
        build_animated(pair.a().as_slice(), pair.b().as_slice(), 1.0, 1)
    );
    assert_eq!(el.borrow().fill, Some(Rgb8::from_hex("#F97316").unwrap()));
    assert_eq!(engine.phase(), Phase::Settled);
    assert!(!engine.is_current(playback));
}

#[test]
fn progress_never_moves_backwards() {
    let engine = MorphEngine::default();
    let (t, el, pair) = target(SQUARE, DIAMOND);
    engine.register(t);

    let mut tl = CapturingTimeline::default();
    engine.play(PlayOptions::on(&mut tl)).unwrap();
    let (mut track, offset) = tl.tracks.pop().unwrap();
    assert_eq!(offset, 0.0);
    assert_eq!(track.duration_ms, 2000.0);

    track.update(0.75);
    let at_75 = el.borrow().d.clone();
    track.update(0.25);
    assert_eq!(el.borrow().d, at_75);
    track.update(f64::NAN);
    assert_eq!(el.borrow().d, at_75);
    track.update(4.0);
    assert_eq!(
        el.borrow().d,
        build_animated(pair.a().as_slice(), pair.b().as_slice(), 1.0, 1)
    );
}

#[test]
fn newer_play_supersedes_older_clock() {
    let engine = MorphEngine::new(EngineConfig {
        duration_ms: 100.0,
        ..EngineConfig::default()
    });
    let (t, el, _) = target(SQUARE, DIAMOND);
    engine.register(t);

    let old_done = Rc::new(Cell::new(false));
    let mut old = ManualTimeline::new();
    let first = engine
        .play(PlayOptions::on(&mut old).on_complete({
            let old_done = Rc::clone(&old_done);
            move || old_done.set(true)
        }))
        .unwrap();
    let mut new = ManualTimeline::new();
    let second = engine.play(PlayOptions::on(&mut new)).unwrap();
    assert!(!engine.is_current(first));
    assert!(engine.is_current(second));

    new.advance(10.0);
    let written = el.borrow().writes();
    old.run_to_end(25.0);
    assert_eq!(el.borrow().writes(), written);
    assert!(!old_done.get());
    assert_eq!(engine.phase(), Phase::Playing);
}

#[test]
fn static_render_makes_inflight_ticks_inert() {
    let engine = MorphEngine::new(EngineConfig {
        duration_ms: 100.0,
        ..EngineConfig::default()
    });
    let (t, el, pair) = target(SQUARE, DIAMOND);
    engine.register(t);

    let mut tl = ManualTimeline::new();
    engine.play(PlayOptions::on(&mut tl)).unwrap();
    tl.advance(30.0);
    engine.render_static(0.0, 1);
    tl.run_to_end(10.0);
    assert_eq!(el.borrow().d, build_static(pair.a().as_slice(), 1));
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn stop_cancels_playback() {
    let engine = MorphEngine::new(EngineConfig {
        duration_ms: 100.0,
        ..EngineConfig::default()
    });
    let (t, el, _) = target(SQUARE, DIAMOND);
    engine.register(t);
    let mut tl = ManualTimeline::new();
    let playback = engine.play(PlayOptions::on(&mut tl)).unwrap();
    tl.advance(40.0);
    let frozen = el.borrow().d.clone();
    engine.stop();
    assert!(!engine.is_current(playback));
    assert_eq!(engine.phase(), Phase::Idle);
    tl.run_to_end(10.0);
    assert_eq!(el.borrow().d, frozen);
}

#[test]
fn targets_without_geometry_are_skipped() {
    let engine = MorphEngine::default();
    let broken = SvgPathElement::new().shared();
    let color = ColorBlend::from_hex("#111", "#222").unwrap();
    engine.register(MorphTarget::new(broken.clone(), None, color, 24));
    let (t, el, _) = target(SQUARE, DIAMOND);
    engine.register(t);

    assert_eq!(engine.render_static(0.0, 1), 1);
    let mut tl = ManualTimeline::new();
    engine.play(PlayOptions::on(&mut tl)).unwrap();
    tl.run_to_end(100.0);

    assert_eq!(broken.borrow().writes(), 0);
    assert!(el.borrow().writes() > 1);
    assert_eq!(engine.phase(), Phase::Settled);
}

#[test]
fn per_target_stride_overrides_playback_stride() {
    let engine = MorphEngine::new(EngineConfig {
        duration_ms: 10.0,
        ..EngineConfig::default()
    });
    let (t, el, pair) = target(SQUARE, DIAMOND);
    engine.register(t.with_motion_stride(3));
    let mut tl = ManualTimeline::new();
    engine.play(PlayOptions::on(&mut tl).stride(2)).unwrap();
    tl.run_to_end(10.0);
    assert_eq!(
        el.borrow().d,
        build_animated(pair.a().as_slice(), pair.b().as_slice(), 1.0, 3)
    );
}

#[test]
fn busy_drawable_does_not_stall_siblings() {
    let engine = MorphEngine::default();
    let (a, el_a, _) = target(SQUARE, DIAMOND);
    let (b, el_b, _) = target(DIAMOND, SQUARE);
    engine.register(a);
    engine.register(b);

    let _held = el_a.borrow_mut();
    assert_eq!(engine.render_static(0.0, 1), 1);
    assert_eq!(el_b.borrow().writes(), 1);
}

#[test]
fn dropped_engine_leaves_clock_harmless() {
    let mut tl = ManualTimeline::new();
    let el = {
        let engine = MorphEngine::new(EngineConfig {
            duration_ms: 50.0,
            ..EngineConfig::default()
        });
        let (t, el, _) = target(SQUARE, DIAMOND);
        let registration = engine.register(t);
        engine.play(PlayOptions::on(&mut tl)).unwrap();
        drop(engine);
        assert!(!registration.dispose());
        el
    };
    tl.run_to_end(10.0);
    assert_eq!(el.borrow().writes(), 0);
}

#[test]
fn config_parses_with_defaults() {
    let cfg: EngineConfig =
        serde_json::from_value(serde_json::json!({"ease": "inOutCubic"})).unwrap();
    assert_eq!(cfg.duration_ms, 2000.0);
    assert_eq!(cfg.ease, Ease::InOutCubic);
}
