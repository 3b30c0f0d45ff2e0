//! Knight's-tour TUI application state and logic.
//!
//! This module contains the testable state for the TUI demo: key
//! handling, speed presets, sound and guide toggles, and the bell cue.
//! Terminal I/O is handled by the binary.
//!
//! ```bash
//! # Run with a YAML config
//! cargo run --bin knight_tui -- tour.yaml
//! ```

use crossterm::event::KeyCode;
use std::path::Path;

use crate::config::{TourConfig, SPEED_PRESETS};
use crate::engine::controller::{RunState, StepOutcome, StopCause, TourController};
use crate::engine::guide::{decompose, GuideSegment};
use crate::error::TourResult;

/// Application state for the knight's-tour TUI demo.
pub struct TourApp {
    /// The underlying tour engine.
    pub tour: TourController,
    /// Whether the bell cue is enabled.
    pub sound_on: bool,
    /// Whether the guide arrow is drawn.
    pub guide_on: bool,
    /// Index into [`SPEED_PRESETS`].
    speed_idx: usize,
    /// Frame counter.
    pub frame_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// A move happened since the last bell drain.
    bell_pending: bool,
}

impl TourApp {
    /// Create the application from a configuration.
    #[must_use]
    pub fn new(config: TourConfig) -> Self {
        let sound_on = config.sound;
        let guide_on = config.guide;
        let speed_idx = SPEED_PRESETS
            .iter()
            .position(|&s| s == config.speed)
            .unwrap_or(0);
        let tour = TourController::new(config);

        Self {
            tour,
            sound_on,
            guide_on,
            speed_idx,
            frame_count: 0,
            should_quit: false,
            bell_pending: false,
        }
    }

    /// Create the application from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TourResult<Self> {
        Ok(Self::new(TourConfig::from_yaml(yaml)?))
    }

    /// Create the application from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the YAML is invalid.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> TourResult<Self> {
        Ok(Self::new(TourConfig::load(path)?))
    }

    /// Drive the engine clock; called once per frame with the elapsed
    /// milliseconds since app start.
    pub fn advance(&mut self, now_ms: u64) {
        let outcome = self.tour.advance(now_ms);
        if matches!(outcome, Some(StepOutcome::Moved(_))) && self.sound_on {
            self.bell_pending = true;
        }
        self.frame_count += 1;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode, now_ms: u64) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_running(now_ms),
            KeyCode::Char('n') => self.single_step(now_ms),
            KeyCode::Char('r') => self.tour.reset(),
            KeyCode::Char('s') => self.sound_on = !self.sound_on,
            KeyCode::Char('g') => self.guide_on = !self.guide_on,
            KeyCode::Char(c @ '1'..='4') => {
                // '1'..'4' index the presets 1x/2x/4x/8x
                let idx = usize::from(c as u8 - b'1');
                self.set_speed_preset(idx, now_ms);
            }
            _ => {}
        }
    }

    /// Single start/stop toggle, mapped onto the engine's distinct
    /// commands.
    pub fn toggle_running(&mut self, now_ms: u64) {
        if self.tour.is_running() {
            self.tour.stop();
        } else {
            self.tour.start(now_ms);
        }
    }

    /// Apply exactly one move while staying paused.
    pub fn single_step(&mut self, now_ms: u64) {
        if self.tour.is_running() {
            return;
        }
        self.tour.start(now_ms);
        let outcome = self.tour.tick();
        if matches!(outcome, Some(StepOutcome::Moved(_))) {
            if self.sound_on {
                self.bell_pending = true;
            }
            self.tour.stop();
        }
    }

    /// Select a speed preset by index.
    pub fn set_speed_preset(&mut self, idx: usize, now_ms: u64) {
        if let Some(&speed) = SPEED_PRESETS.get(idx) {
            self.speed_idx = idx;
            self.tour.set_speed(speed, now_ms);
        }
    }

    /// Current speed preset index.
    #[must_use]
    pub const fn speed_idx(&self) -> usize {
        self.speed_idx
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain the pending bell cue. Returns true at most once per move.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Guide segments for the would-be next move, when the guide is on
    /// and the tour is running.
    #[must_use]
    pub fn guide_segments(&self) -> Option<[GuideSegment; 2]> {
        if !self.guide_on || !self.tour.is_running() {
            return None;
        }
        self.tour
            .peek_next_move()
            .map(|next| decompose(self.tour.board().knight(), next))
    }

    /// Status label for the UI.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self.tour.state() {
            RunState::Idle => "IDLE",
            RunState::Running => "RUNNING",
            RunState::Stopped(StopCause::Command) => "PAUSED",
            RunState::Stopped(StopCause::Exhausted) => "ENDED",
        }
    }
}
