//! Portfolio Splash TUI - Terminal surface for the intro gate
//!
//! This crate draws the weather-driven intro gate in a full-screen terminal
//! and hands over to the portfolio once the visitor scrolls past it.
//!
//! # Architecture
//!
//! - **App**: event loop, weather fetch task, host signal from the gate
//! - **Compositor**: one plane per depth, composited back to front
//! - **Render**: percentages to cells, gesture offset, dimming and flash
//! - **Input**: crossterm events to gate input
//! - **Portfolio**: the content behind the gate

pub mod app;
pub mod art;
pub mod compositor;
pub mod input;
pub mod portfolio;
pub mod render;
pub mod theme;

pub use app::{App, HostSignal, View};
