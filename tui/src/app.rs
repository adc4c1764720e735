//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin surface over the gate:
//! - Event loop (keyboard, mouse, resize, frame tick, weather arrival)
//! - Gate for everything the intro does
//! - Compositor for drawing the scene planes
//!
//! # Flow
//!
//! 1. The weather fetch is spawned and delivered through a oneshot channel
//! 2. Terminal events become `InputEvent`s for the gate
//! 3. Every frame the gate's clock advances by the real elapsed time
//! 4. When the gate is passed, its callback sends a `HostSignal` and the app
//!    switches to the main content view

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;

use splash_core::{resolve_snapshot, Gate, SplashConfig, SplashPhase, WeatherSnapshot, WeatherSource};

use crate::compositor::{Compositor, Plane};
use crate::input::{map_event, Action};
use crate::portfolio;
use crate::render::{self, hud, scene, scene::SceneLayout};

/// Signals the gate sends to its host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostSignal {
    /// The gate was passed; show the portfolio
    EnterMainContent,
}

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The intro gate (loading or presenting)
    Splash,
    /// The portfolio behind the gate
    MainContent,
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Which screen is showing
    view: View,
    /// Loaded configuration
    config: SplashConfig,

    // === Gate Integration ===
    /// The intro gate
    gate: Gate,
    /// Completion signals from the gate
    host_rx: mpsc::UnboundedReceiver<HostSignal>,
    /// Where the weather comes from
    source: Arc<dyn WeatherSource>,

    // === Rendering ===
    /// The layered compositor
    compositor: Compositor,
    /// Fixed scene positions for the current size
    layout: SceneLayout,
    /// Time since start, advanced by frame deltas
    elapsed: Duration,
}

impl App {
    /// Create a new App for a terminal of `area`
    pub fn new(config: SplashConfig, source: Arc<dyn WeatherSource>, area: Rect) -> Self {
        let (host_tx, host_rx) = mpsc::unbounded_channel();
        let gate = Gate::new(
            config.clone(),
            Box::new(move || {
                let _ = host_tx.send(HostSignal::EnterMainContent);
            }),
        );

        Self {
            running: true,
            view: View::Splash,
            config,
            gate,
            host_rx,
            source,
            compositor: Compositor::new(area),
            layout: SceneLayout::new(area),
            elapsed: Duration::ZERO,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        let mut ticker = tokio::time::interval(self.config.animation.frame_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut weather_rx = Some(self.spawn_weather_fetch());
        let mut last_frame = Instant::now();

        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                        None => self.running = false,
                    }
                }

                // Weather arrives once
                result = async {
                    match weather_rx.as_mut() {
                        Some(rx) => rx.await,
                        None => std::future::pending().await,
                    }
                }, if weather_rx.is_some() => {
                    weather_rx = None;
                    match result {
                        Ok(snapshot) => self.resolve_weather(snapshot),
                        Err(_) => {
                            tracing::warn!("Weather task dropped, using fallback");
                            self.resolve_weather(WeatherSnapshot::FALLBACK);
                        }
                    }
                }

                // Frame tick
                _ = ticker.tick() => {}
            }

            let now = Instant::now();
            self.update(now - last_frame);
            last_frame = now;

            self.render(terminal)?;
        }

        self.gate.teardown();
        Ok(())
    }

    /// Spawn the one-shot weather fetch
    fn spawn_weather_fetch(&self) -> oneshot::Receiver<WeatherSnapshot> {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let timeout = self.config.weather.fetch_timeout();

        tokio::spawn(async move {
            let snapshot = resolve_snapshot(source.as_ref(), timeout).await;
            let _ = tx.send(snapshot);
        });

        rx
    }

    /// Hand a resolved snapshot to the gate
    pub fn resolve_weather(&mut self, snapshot: WeatherSnapshot) {
        self.gate.resolve_weather(snapshot);
    }

    /// Handle a raw terminal event
    pub fn handle_event(&mut self, event: &Event) {
        let action = map_event(event, &self.config.gesture);
        self.handle_action(action);
    }

    /// Act on a mapped terminal event
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Resize(width, height) => self.handle_resize(width, height),
            Action::Gate(input) => {
                if self.view == View::Splash {
                    self.gate.handle_input(input);
                }
            }
            Action::Ignore => {}
        }
        self.process_host_signals();
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        self.compositor.resize(area);
        self.layout = SceneLayout::new(area);
    }

    /// Advance animations by `delta`
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
        if self.view == View::Splash {
            self.gate.tick(delta);
        }
        self.process_host_signals();
    }

    /// Drain signals from the gate's completion callback
    fn process_host_signals(&mut self) {
        while let Ok(signal) = self.host_rx.try_recv() {
            match signal {
                HostSignal::EnterMainContent => {
                    tracing::info!("Gate passed, entering main content");
                    self.view = View::MainContent;
                }
            }
        }
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            self.draw(frame.buffer_mut());
        })?;
        Ok(())
    }

    /// Draw the current view into `buf`
    pub fn draw(&mut self, buf: &mut Buffer) {
        let area = buf.area;
        match self.view {
            View::MainContent => portfolio::render_main_content(buf, area),
            View::Splash if self.gate.phase() == SplashPhase::Loading => {
                hud::draw_loading(buf, self.elapsed);
            }
            View::Splash => self.draw_splash(buf),
        }
    }

    /// Composite the gate's planes and copy them into `buf`
    fn draw_splash(&mut self, buf: &mut Buffer) {
        let (Some(scene_state), Some(snapshot)) = (self.gate.scene(), self.gate.snapshot()) else {
            hud::draw_loading(buf, self.elapsed);
            return;
        };
        let feedback = self.gate.feedback();

        if let Some(plane) = self.compositor.begin(Plane::Sky) {
            scene::draw_sky(plane, scene_state);
        }
        if let Some(plane) = self.compositor.begin(Plane::Scenery) {
            scene::draw_scenery(plane, &self.layout, snapshot);
        }
        if let Some(plane) = self.compositor.begin(Plane::Road) {
            scene::draw_road(plane, &self.layout, scene_state);
        }
        if let Some(plane) = self.compositor.begin(Plane::Weather) {
            scene::draw_weather(plane, scene_state);
        }
        if let Some(plane) = self.compositor.begin(Plane::Hud) {
            hud::draw_status_bar(plane, snapshot, &self.config.weather.location_label);
            hud::draw_indicator(plane, self.layout.indicator_y, &feedback);
            hud::draw_progress_bar(plane, &feedback);
        }

        let output = self.compositor.composite();
        render::apply_feedback(
            output,
            &feedback,
            self.gate.lightning_visible(),
            self.config.gesture.cell_height_px,
        );

        let area = buf.area;
        for y in 0..area.height.min(output.area.height) {
            for x in 0..area.width.min(output.area.width) {
                if let (Some(src), Some(dst)) = (output.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Which screen is showing
    pub fn view(&self) -> View {
        self.view
    }

    /// The gate
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}
