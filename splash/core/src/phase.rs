//! Transition State Machine
//!
//! `Loading → Presenting → Dismissed`. Dismissal hands control back to the
//! host through a one-shot completion callback.

use std::fmt;

use thiserror::Error;

/// Where the gate is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplashPhase {
    /// Waiting for the weather snapshot
    Loading,
    /// Scene is live and accepting gestures
    Presenting,
    /// Gate has been passed; terminal
    Dismissed,
}

impl fmt::Display for SplashPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Presenting => write!(f, "presenting"),
            Self::Dismissed => write!(f, "dismissed"),
        }
    }
}

/// A transition that is not allowed from the current phase
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PhaseError {
    /// Weather can only resolve while loading
    #[error("cannot resolve weather while {0}")]
    AlreadyResolved(SplashPhase),
    /// Only a presenting gate can be dismissed
    #[error("cannot dismiss while {0}")]
    NotPresenting(SplashPhase),
}

/// Callback run when the gate is passed
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Owns the phase and the host's completion callback
pub struct SplashMachine {
    phase: SplashPhase,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for SplashMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplashMachine")
            .field("phase", &self.phase)
            .field("callback_pending", &self.on_complete.is_some())
            .finish()
    }
}

impl SplashMachine {
    /// Start in [`SplashPhase::Loading`]
    #[must_use]
    pub fn new(on_complete: CompletionCallback) -> Self {
        Self {
            phase: SplashPhase::Loading,
            on_complete: Some(on_complete),
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// `Loading → Presenting`
    pub fn resolve(&mut self) -> Result<(), PhaseError> {
        if self.phase != SplashPhase::Loading {
            return Err(PhaseError::AlreadyResolved(self.phase));
        }
        self.phase = SplashPhase::Presenting;
        tracing::info!(phase = %self.phase, "Splash phase changed");
        Ok(())
    }

    /// `Presenting → Dismissed`, firing the completion callback
    pub fn dismiss(&mut self) -> Result<(), PhaseError> {
        if self.phase != SplashPhase::Presenting {
            return Err(PhaseError::NotPresenting(self.phase));
        }
        self.phase = SplashPhase::Dismissed;
        tracing::info!(phase = %self.phase, "Splash phase changed");

        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        Ok(())
    }
}
