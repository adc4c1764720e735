//! Integration Tests for the Intro Gate
//!
//! These drive a whole gate session headless: a mock weather source
//! resolves the snapshot, the logical clock is stepped by hand, and input
//! events are fed in as a surface would.
//!
//! # Test Coverage
//!
//! 1. **Weather → Scene**: category drives populations and lightning
//! 2. **Fallback**: a failing source still yields a presentable gate
//! 3. **Gesture**: clamping, decay and one-shot completion across sources
//! 4. **Lifecycle**: re-parameterization and teardown cancel everything

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use splash_core::{
    resolve_snapshot, Gate, GestureOutcome, InputEvent, SplashConfig, SplashPhase, StaticSource,
    TimerKind, VehicleDirection, WeatherCategory, WeatherError, WeatherSnapshot, WeatherSource,
    WindBand,
};

const FRAME: Duration = Duration::from_millis(16);

// ============================================================================
// Mock Weather Sources
// ============================================================================

/// Source that counts calls and fails every time
#[derive(Default)]
struct FailingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl WeatherSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(WeatherError::Status {
            status: 503,
            body: "maintenance".to_string(),
        })
    }
}

/// Source that answers after a delay
struct SlowSource {
    delay: Duration,
    snapshot: WeatherSnapshot,
}

#[async_trait]
impl WeatherSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.snapshot)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn seeded_config(seed: u64) -> SplashConfig {
    let mut config = SplashConfig::default();
    config.animation.seed = Some(seed);
    config
}

/// Gate whose completion callback bumps the returned counter
fn counting_gate(seed: u64) -> (Gate, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let gate = Gate::new(
        seeded_config(seed),
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    (gate, calls)
}

fn presenting_gate(snapshot: WeatherSnapshot) -> (Gate, Arc<AtomicUsize>) {
    let (mut gate, calls) = counting_gate(17);
    gate.resolve_weather(snapshot);
    (gate, calls)
}

fn run_frames(gate: &mut Gate, frames: u32) {
    for _ in 0..frames {
        gate.tick(FRAME);
    }
}

// ============================================================================
// Weather → Scene
// ============================================================================

#[tokio::test]
async fn test_thunderstorm_codes_build_a_stormy_scene() {
    for code in [95, 96, 99] {
        let source = StaticSource::new(WeatherSnapshot::new(26, 12, code, true));
        let snapshot = resolve_snapshot(&source, None).await;
        let (gate, _) = presenting_gate(snapshot);

        let scene = gate.scene().expect("scene built");
        assert_eq!(gate.category(), Some(WeatherCategory::Thunderstorm));
        assert_eq!(scene.rain().len(), 80);
        assert!(gate.lightning().is_enabled());
        assert!(gate.timers().is_armed(TimerKind::LightningStrike));
    }
}

#[test]
fn test_lightning_reschedules_within_range() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(24, 8, 95, false));

    let mut last_strikes = gate.lightning().strikes();
    let mut seen_flash = false;
    // Roughly two minutes of frames
    for _ in 0..7_500 {
        gate.tick(FRAME);
        seen_flash |= gate.lightning_visible();

        if gate.lightning().strikes() != last_strikes {
            last_strikes = gate.lightning().strikes();
            let delay = gate.lightning().last_delay().expect("delay drawn");
            assert!(delay >= Duration::from_millis(3_000));
            assert!(delay < Duration::from_millis(8_000));
        }
    }
    assert!(last_strikes >= 10, "only {last_strikes} strikes");
    assert!(seen_flash);
}

#[test]
fn test_flash_lasts_about_150ms() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(24, 8, 99, false));

    while !gate.lightning_visible() {
        gate.tick(FRAME);
        assert!(gate.now() < Duration::from_secs(9));
    }
    let lit_at = gate.now();
    while gate.lightning_visible() {
        gate.tick(FRAME);
    }
    let lit_for = gate.now() - lit_at;
    assert!(lit_for >= Duration::from_millis(150));
    assert!(lit_for < Duration::from_millis(150) + FRAME * 2);
}

#[test]
fn test_rain_codes_build_a_rainy_scene_without_lightning() {
    for code in [51, 53, 55, 61, 63, 65, 80, 81, 82] {
        let (mut gate, _) = presenting_gate(WeatherSnapshot::new(27, 5, code, true));
        assert_eq!(gate.category(), Some(WeatherCategory::Rain));
        assert_eq!(gate.scene().map(|s| s.rain().len()), Some(50));
        assert!(!gate.lightning().is_enabled());

        run_frames(&mut gate, 1_000);
        assert_eq!(gate.lightning().strikes(), 0);
        assert!(!gate.timers().is_armed(TimerKind::LightningStrike));
    }
}

#[test]
fn test_storm_in_strong_wind_uses_gusty_tables() {
    let (gate, _) = presenting_gate(WeatherSnapshot::new(25, 25, 95, true));
    let scene = gate.scene().expect("scene built");

    assert_eq!(scene.params().wind_band, WindBand::Gusty);
    assert!((scene.vehicle().speed - 0.8).abs() < f32::EPSILON);
    assert_eq!(scene.wind().len(), 25);
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test]
async fn test_failed_fetch_falls_back_to_clear_day() {
    let source = FailingSource::default();
    let snapshot = resolve_snapshot(&source, None).await;

    assert_eq!(snapshot, WeatherSnapshot::FALLBACK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    let (gate, _) = presenting_gate(snapshot);
    let scene = gate.scene().expect("scene built");
    assert_eq!(gate.phase(), SplashPhase::Presenting);
    assert_eq!(gate.category(), Some(WeatherCategory::Clear));
    assert_eq!(scene.rain().len(), 0);
    assert_eq!(scene.clouds().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_slow_source_stays_loading_until_resolved() {
    let (mut gate, _) = counting_gate(3);
    let source = SlowSource {
        delay: Duration::from_secs(20),
        snapshot: WeatherSnapshot::new(22, 4, 3, false),
    };

    gate.tick(Duration::from_secs(5));
    assert_eq!(gate.phase(), SplashPhase::Loading);

    let snapshot = resolve_snapshot(&source, None).await;
    gate.resolve_weather(snapshot);
    assert_eq!(gate.phase(), SplashPhase::Presenting);
    assert_eq!(gate.category(), Some(WeatherCategory::Cloudy));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_knob_turns_a_stall_into_fallback() {
    let source = SlowSource {
        delay: Duration::from_secs(60),
        snapshot: WeatherSnapshot::new(22, 4, 95, false),
    };
    let snapshot = resolve_snapshot(&source, Some(Duration::from_secs(5))).await;
    assert_eq!(snapshot, WeatherSnapshot::FALLBACK);
}

// ============================================================================
// Gesture
// ============================================================================

#[test]
fn test_completion_fires_once_for_every_source() {
    let sources: [&[InputEvent]; 3] = [
        &[InputEvent::TouchStart { y: 600.0 }, InputEvent::TouchMove { y: 350.0 }],
        &[InputEvent::MouseDown { y: 600.0 }, InputEvent::MouseMove { y: 390.0 }],
        &[
            InputEvent::Wheel { delta_y: 300.0 },
            InputEvent::Wheel { delta_y: 300.0 },
        ],
    ];

    for events in sources {
        let (mut gate, calls) = presenting_gate(WeatherSnapshot::FALLBACK);
        let outcomes: Vec<GestureOutcome> =
            events.iter().map(|event| gate.handle_input(*event)).collect();
        assert_eq!(outcomes.last(), Some(&GestureOutcome::Completed));

        // Keep hammering after completion
        for _ in 0..5 {
            gate.handle_input(InputEvent::Wheel { delta_y: 1_000.0 });
            gate.handle_input(InputEvent::TouchStart { y: 900.0 });
            gate.handle_input(InputEvent::TouchMove { y: 0.0 });
            gate.tick(FRAME);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(gate.phase(), SplashPhase::Dismissed);
        assert_eq!(gate.session().progress, 0.0);
        assert!(!gate.session().ready);
    }
}

#[test]
fn test_progress_stays_in_unit_interval() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::FALLBACK);
    let script = [
        InputEvent::MouseDown { y: 100.0 },
        InputEvent::MouseMove { y: 400.0 },
        InputEvent::MouseMove { y: 60.0 },
        InputEvent::MouseUp,
        InputEvent::Wheel { delta_y: 120.0 },
        InputEvent::Wheel { delta_y: -500.0 },
        InputEvent::TouchStart { y: 300.0 },
        InputEvent::TouchMove { y: 320.0 },
        InputEvent::TouchMove { y: 250.0 },
        InputEvent::TouchEnd,
        InputEvent::MouseMove { y: -4_000.0 },
    ];

    for event in script {
        gate.handle_input(event);
        for _ in 0..3 {
            gate.tick(FRAME);
            let p = gate.session().progress;
            assert!((0.0..=1.0).contains(&p), "progress {p} after {event:?}");
        }
    }
    assert_eq!(gate.phase(), SplashPhase::Presenting);
}

#[test]
fn test_non_finite_input_never_passes_the_gate() {
    let (mut gate, calls) = presenting_gate(WeatherSnapshot::FALLBACK);
    let script = [
        InputEvent::Wheel { delta_y: f32::NAN },
        InputEvent::Wheel { delta_y: f32::INFINITY },
        InputEvent::TouchStart { y: 300.0 },
        InputEvent::TouchMove { y: f32::NAN },
        InputEvent::TouchMove { y: f32::NEG_INFINITY },
        InputEvent::TouchEnd,
        InputEvent::MouseDown { y: f32::INFINITY },
        InputEvent::MouseDown { y: 300.0 },
        InputEvent::MouseMove { y: f32::NAN },
        InputEvent::MouseUp,
    ];

    for event in script {
        assert_ne!(gate.handle_input(event), GestureOutcome::Completed, "{event:?}");
        let p = gate.session().progress;
        assert!((0.0..=1.0).contains(&p), "progress {p} after {event:?}");
    }

    // An ordinary notch afterwards only adds its own share
    assert_eq!(
        gate.handle_input(InputEvent::Wheel { delta_y: 100.0 }),
        GestureOutcome::Progressed
    );
    assert!((gate.session().progress - 0.2).abs() < 1e-6);
    assert_eq!(gate.phase(), SplashPhase::Presenting);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_zero_touch_distance_keeps_progress_finite() {
    let mut config = seeded_config(3);
    config.gesture.touch_distance_px = 0.0;
    let mut gate = Gate::new(config, Box::new(|| {}));
    gate.resolve_weather(WeatherSnapshot::FALLBACK);

    gate.handle_input(InputEvent::TouchStart { y: 300.0 });
    gate.handle_input(InputEvent::TouchMove { y: 300.0 });

    assert_eq!(gate.session().progress, 0.0);
    assert_eq!(gate.phase(), SplashPhase::Presenting);
}

#[test]
fn test_release_at_half_decays_to_zero() {
    let (mut gate, calls) = presenting_gate(WeatherSnapshot::FALLBACK);
    gate.handle_input(InputEvent::TouchStart { y: 500.0 });
    gate.handle_input(InputEvent::TouchMove { y: 400.0 });
    assert!((gate.session().progress - 0.5).abs() < 1e-6);
    assert!(gate.session().ready);
    assert_eq!(gate.feedback().indicator_text, "Release to enter");

    gate.handle_input(InputEvent::TouchEnd);

    let mut previous = gate.session().progress;
    for _ in 0..120 {
        gate.tick(FRAME);
        let current = gate.session().progress;
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0.0);
    assert!(!gate.session().ready);
    assert_eq!(gate.feedback().indicator_text, "Scroll down to continue");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_feedback_tracks_progress() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::FALLBACK);
    gate.handle_input(InputEvent::Wheel { delta_y: 200.0 });

    let feedback = gate.feedback();
    assert!((feedback.bar_fraction - 0.4).abs() < 1e-6);
    assert!((feedback.gate_opacity - 0.8).abs() < 1e-6);
    assert!((feedback.offset_px - 20.0).abs() < 1e-4);
    assert!((feedback.indicator_opacity - 0.6).abs() < 1e-6);
}

#[tokio::test]
async fn test_completion_reaches_host_channel() {
    let (tx, mut rx) = mpsc::unbounded_channel::<&'static str>();
    let mut gate = Gate::new(
        seeded_config(5),
        Box::new(move || {
            let _ = tx.send("enter");
        }),
    );
    gate.resolve_weather(WeatherSnapshot::FALLBACK);

    gate.handle_input(InputEvent::Wheel { delta_y: 500.0 });

    assert_eq!(rx.recv().await, Some("enter"));
    assert!(rx.recv().await.is_none(), "callback dropped after firing");
}

// ============================================================================
// Particles over time
// ============================================================================

#[test]
fn test_populations_are_stable_and_wrap() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(25, 22, 63, true));
    let counts = |gate: &Gate| {
        let scene = gate.scene().expect("scene built");
        (
            scene.rain().len(),
            scene.clouds().len(),
            scene.wind().len(),
            scene.birds().len(),
            scene.road().len(),
        )
    };
    let before = counts(&gate);

    for _ in 0..3_000 {
        gate.tick(FRAME);
        let scene = gate.scene().expect("scene built");
        assert!(scene.rain().iter().all(|d| d.y <= 100.0));
        assert!(scene.clouds().iter().all(|c| c.x <= 110.0));
        assert!(scene.wind().iter().all(|w| w.x <= 105.0));
        assert!(scene.birds().iter().all(|b| b.x <= 105.0));
        assert!(scene.road().iter().all(|m| m.x >= -5.0));
    }

    assert_eq!(counts(&gate), before);
}

#[test]
fn test_vehicle_turns_around_after_pause() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(30, 3, 0, true));
    assert_eq!(
        gate.scene().map(|s| s.vehicle().direction),
        Some(VehicleDirection::Forward)
    );

    // Calm: 130 units at 0.3/frame, then a 3s pause
    run_frames(&mut gate, 440 + 190);

    let vehicle = *gate.scene().expect("scene built").vehicle();
    assert!(vehicle.visible);
    assert_eq!(vehicle.direction, VehicleDirection::Reverse);
    assert!(vehicle.position < 115.0);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_update_weather_rebuilds_only_on_change() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(25, 8, 95, false));
    assert!(gate.timers().is_armed(TimerKind::LightningStrike));

    // Temperature alone does not matter
    assert!(!gate.update_weather(WeatherSnapshot::new(19, 8, 96, false)));
    assert_eq!(gate.scene().map(|s| s.rain().len()), Some(80));

    assert!(gate.update_weather(WeatherSnapshot::new(25, 8, 2, true)));
    let scene = gate.scene().expect("scene rebuilt");
    assert_eq!(scene.rain().len(), 0);
    assert_eq!(scene.clouds().len(), 4);
    assert!(!gate.timers().is_armed(TimerKind::LightningStrike));
    assert!(!gate.lightning_visible());
}

#[test]
fn test_second_resolve_behaves_like_update() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::FALLBACK);
    gate.resolve_weather(WeatherSnapshot::new(25, 30, 61, true));

    assert_eq!(gate.phase(), SplashPhase::Presenting);
    assert_eq!(gate.category(), Some(WeatherCategory::Rain));
    assert_eq!(gate.scene().map(|s| s.params().wind_band), Some(WindBand::Gusty));
}

#[test]
fn test_dismissal_tears_everything_down() {
    let (mut gate, _) = presenting_gate(WeatherSnapshot::new(25, 30, 95, false));
    run_frames(&mut gate, 10);

    gate.handle_input(InputEvent::Wheel { delta_y: 600.0 });

    assert!(gate.is_torn_down());
    assert_eq!(gate.timers().armed_count(), 0);
    assert_eq!(gate.scene().map(|s| s.running_loops()), Some(0));

    let frozen: Vec<f32> = gate
        .scene()
        .expect("scene kept")
        .rain()
        .iter()
        .map(|d| d.y)
        .collect();
    run_frames(&mut gate, 100);
    let after: Vec<f32> = gate
        .scene()
        .expect("scene kept")
        .rain()
        .iter()
        .map(|d| d.y)
        .collect();
    assert_eq!(frozen, after);
}

#[test]
fn test_same_seed_same_scene() {
    let snapshot = WeatherSnapshot::new(25, 14, 81, true);
    let (mut a, _) = presenting_gate(snapshot);
    let (mut b, _) = presenting_gate(snapshot);

    run_frames(&mut a, 250);
    run_frames(&mut b, 250);

    let xs = |gate: &Gate| -> Vec<f32> {
        gate.scene()
            .expect("scene built")
            .rain()
            .iter()
            .map(|d| d.x)
            .collect()
    };
    assert_eq!(xs(&a), xs(&b));
}
