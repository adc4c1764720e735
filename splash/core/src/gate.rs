//! Gate - the intro screen's single owner
//!
//! The gate ties every piece together and is the only thing a surface talks
//! to. It owns the logical clock; nothing in here reads wall time, so a test
//! can drive a whole session by calling [`Gate::tick`] with fixed deltas.
//!
//! # Flow
//!
//! ```text
//! Gate::new ──▶ Loading
//!                  │ resolve_weather(snapshot)
//!                  ▼
//!              Presenting ◀── update_weather (rebuilds scene on change)
//!                  │ gesture reaches 1
//!                  ▼
//!              Dismissed ──▶ on_complete(), teardown
//! ```

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{TimerKind, TimerSet};
use crate::config::SplashConfig;
use crate::events::InputEvent;
use crate::gesture::{GestureFeedback, GestureOutcome, GestureSession, GestureTracker};
use crate::lightning::LightningScheduler;
use crate::particles::{Scene, SceneEvent, SceneParams};
use crate::phase::{CompletionCallback, SplashMachine, SplashPhase};
use crate::weather::{WeatherCategory, WeatherSnapshot};

/// How long the vehicle waits off-screen before turning around
pub const VEHICLE_PAUSE: Duration = Duration::from_millis(3_000);

/// The intro gate
#[derive(Debug)]
pub struct Gate {
    /// Loaded configuration
    config: SplashConfig,
    /// Logical clock, time since creation
    now: Duration,
    /// Every pending one-shot timer
    timers: TimerSet,
    /// Randomness for particle placement and strike delays
    rng: StdRng,
    /// Snapshot the scene was built from
    snapshot: Option<WeatherSnapshot>,
    /// Particle layers; absent until the snapshot resolves
    scene: Option<Scene>,
    /// Strike and flash bookkeeping
    lightning: LightningScheduler,
    /// Gesture progress
    tracker: GestureTracker,
    /// Phase and completion callback
    machine: SplashMachine,
    /// Set once teardown has run
    torn_down: bool,
}

impl Gate {
    /// Create a loading gate; `on_complete` runs once when it is passed
    #[must_use]
    pub fn new(config: SplashConfig, on_complete: CompletionCallback) -> Self {
        let rng = config
            .animation
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let tracker = GestureTracker::new(config.gesture.clone(), config.animation.frame_interval());

        Self {
            config,
            now: Duration::ZERO,
            timers: TimerSet::new(),
            rng,
            snapshot: None,
            scene: None,
            lightning: LightningScheduler::new(),
            tracker,
            machine: SplashMachine::new(on_complete),
            torn_down: false,
        }
    }

    /// Deliver the resolved snapshot; builds the scene and starts presenting
    ///
    /// A second call while presenting behaves like [`Gate::update_weather`].
    pub fn resolve_weather(&mut self, snapshot: WeatherSnapshot) {
        match self.machine.phase() {
            SplashPhase::Loading => {
                tracing::info!(
                    category = ?snapshot.category(),
                    temperature_c = snapshot.temperature_c,
                    wind_kmh = snapshot.wind_speed_kmh,
                    "Weather resolved"
                );
                self.build_scene(snapshot);
                if let Err(e) = self.machine.resolve() {
                    tracing::debug!(error = %e, "Ignoring phase transition");
                }
            }
            SplashPhase::Presenting => {
                self.update_weather(snapshot);
            }
            SplashPhase::Dismissed => {
                tracing::debug!("Weather arrived after dismissal, ignoring");
            }
        }
    }

    /// Swap in a new snapshot; returns true if the scene was rebuilt
    ///
    /// The scene is only rebuilt when the category or wind speed changed.
    pub fn update_weather(&mut self, snapshot: WeatherSnapshot) -> bool {
        match self.machine.phase() {
            SplashPhase::Loading => {
                self.resolve_weather(snapshot);
                return true;
            }
            SplashPhase::Dismissed => return false,
            SplashPhase::Presenting => {}
        }

        let unchanged = self.snapshot.is_some_and(|current| {
            current.category() == snapshot.category()
                && current.wind_speed_kmh == snapshot.wind_speed_kmh
        });
        if unchanged {
            self.snapshot = Some(snapshot);
            return false;
        }

        tracing::debug!(
            category = ?snapshot.category(),
            wind_kmh = snapshot.wind_speed_kmh,
            "Re-parameterizing scene"
        );
        self.stop_scene();
        self.build_scene(snapshot);
        true
    }

    /// Feed one input event to the gesture tracker
    pub fn handle_input(&mut self, event: InputEvent) -> GestureOutcome {
        if self.machine.phase() != SplashPhase::Presenting {
            return GestureOutcome::Ignored;
        }

        let outcome = self.tracker.handle(event);
        match outcome {
            GestureOutcome::Progressed => {
                if matches!(event, InputEvent::Wheel { .. }) {
                    self.timers
                        .arm(TimerKind::WheelQuiet, self.config.gesture.wheel_quiet(), self.now);
                } else {
                    self.timers.cancel(TimerKind::WheelQuiet);
                }
            }
            GestureOutcome::Released => {
                self.timers.cancel(TimerKind::WheelQuiet);
            }
            GestureOutcome::Completed => {
                if let Err(e) = self.machine.dismiss() {
                    tracing::debug!(error = %e, "Ignoring phase transition");
                }
                self.teardown();
            }
            GestureOutcome::Ignored => {}
        }
        outcome
    }

    /// Advance the clock by `delta`
    ///
    /// Fires due timers earliest first, then steps every running frame loop
    /// and the gesture decay.
    pub fn tick(&mut self, delta: Duration) {
        self.now += delta;
        if self.torn_down {
            return;
        }

        for kind in self.timers.take_due(self.now) {
            self.fire(kind);
        }

        if let Some(scene) = self.scene.as_mut() {
            for event in scene.advance(delta, &mut self.rng) {
                match event {
                    SceneEvent::VehicleLeftViewport => {
                        self.timers.arm(TimerKind::VehiclePause, VEHICLE_PAUSE, self.now);
                    }
                }
            }
        }

        self.tracker.advance(delta);
    }

    /// Cancel every frame loop and timer; safe to call more than once
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.stop_scene();
        self.timers.cancel_all();
        self.tracker.reset();
        self.torn_down = true;
        tracing::debug!("Gate torn down");
    }

    fn fire(&mut self, kind: TimerKind) {
        tracing::debug!(timer = ?kind, at_ms = self.now.as_millis(), "Timer fired");
        match kind {
            TimerKind::LightningStrike => {
                self.lightning.strike(&mut self.timers, self.now, &mut self.rng);
            }
            TimerKind::LightningFlash => self.lightning.end_flash(),
            TimerKind::VehiclePause => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.return_vehicle();
                }
            }
            TimerKind::WheelQuiet => {
                self.tracker.release();
            }
        }
    }

    fn build_scene(&mut self, snapshot: WeatherSnapshot) {
        let params = SceneParams::derive(&snapshot);
        let scene = Scene::new(params, self.config.animation.frame_interval(), &mut self.rng);

        if params.lightning {
            self.lightning.enable(&mut self.timers, self.now, &mut self.rng);
        }

        self.snapshot = Some(snapshot);
        self.scene = Some(scene);
    }

    fn stop_scene(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.cancel_all();
        }
        self.timers.cancel(TimerKind::VehiclePause);
        self.lightning.disable(&mut self.timers);
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        self.machine.phase()
    }

    /// Snapshot in use, once resolved
    #[must_use]
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// Category of the snapshot in use
    #[must_use]
    pub fn category(&self) -> Option<WeatherCategory> {
        self.snapshot.map(|s| s.category())
    }

    /// Gesture state
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.tracker.session()
    }

    /// Visual feedback for the current gesture
    #[must_use]
    pub fn feedback(&self) -> GestureFeedback {
        self.tracker.feedback()
    }

    /// Particle layers, once resolved
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Whether the lightning flash is showing
    #[must_use]
    pub fn lightning_visible(&self) -> bool {
        self.lightning.is_visible()
    }

    /// Lightning bookkeeping
    #[must_use]
    pub fn lightning(&self) -> &LightningScheduler {
        &self.lightning
    }

    /// Pending timers
    #[must_use]
    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// Logical time since creation
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Configuration the gate was built with
    #[must_use]
    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    /// Whether teardown has run
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for Gate {
    fn drop(&mut self) {
        self.teardown();
    }
}
