//! Tour controller: the run/stop state machine.
//!
//! Owns the board, the RNG, and the tick clock; it is the only writer
//! of board state. Presentation collaborators subscribe through
//! [`TourObserver`] and receive read-only snapshots; the engine never
//! calls into rendering or audio code directly.

use serde::{Deserialize, Serialize};

use crate::config::TourConfig;
use crate::engine::board::{Board, BoardSnapshot, Coord};
use crate::engine::clock::TickClock;
use crate::engine::heuristic::select_next;
use crate::engine::rng::TourRng;

/// Why a run left the `Running` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopCause {
    /// Explicit stop command; the tour can be resumed.
    Command,
    /// No legal onward move remained. Terminal for this run.
    Exhausted,
}

/// Lifecycle state of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Board freshly reset, not ticking.
    Idle,
    /// Tick source armed.
    Running,
    /// Tick source halted; board retains its last state.
    Stopped(StopCause),
}

/// Result of one applied tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The knight moved to this square.
    Moved(Coord),
    /// The tour exhausted its legal moves.
    Ended,
}

/// Outbound notification seam for presentation collaborators.
///
/// Every hook has an empty default body; implementors override what
/// they consume. Hooks fire exactly once per state-changing transition.
/// The per-move sound cue is the `on_move` event, fire-and-forget: the
/// engine neither awaits nor depends on what observers do with it.
pub trait TourObserver {
    /// Board was reset; the knight stands on its new starting square.
    fn on_reset(&mut self, snapshot: &BoardSnapshot) {
        let _ = snapshot;
    }

    /// A tick moved the knight.
    fn on_move(&mut self, snapshot: &BoardSnapshot) {
        let _ = snapshot;
    }

    /// An explicit stop command halted the run.
    fn on_stopped(&mut self) {}

    /// The tour ran out of legal moves.
    fn on_ended(&mut self) {}
}

/// The run/stop state machine driving a knight's tour.
pub struct TourController {
    config: TourConfig,
    board: Board,
    rng: TourRng,
    clock: TickClock,
    state: RunState,
    speed: u32,
    step_count: u64,
    observers: Vec<Box<dyn TourObserver>>,
}

impl TourController {
    /// Create a controller and place the knight from the configured
    /// seed. Starts `Idle`.
    #[must_use]
    pub fn new(config: TourConfig) -> Self {
        let mut rng = TourRng::new(config.seed);
        let mut board = Board::new(config.board_size);
        board.reset(&mut rng);
        let clock = TickClock::new(config.interval_ms());
        let speed = config.speed.max(1);

        Self {
            config,
            board,
            rng,
            clock,
            state: RunState::Idle,
            speed,
            step_count: 0,
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to outbound notifications.
    pub fn subscribe(&mut self, observer: Box<dyn TourObserver>) {
        self.observers.push(observer);
    }

    /// Reset to the initial state: same master seed, same placement,
    /// same run on replay. Transitions to `Idle` and fires `on_reset`.
    pub fn reset(&mut self) {
        let seed = self.rng.master_seed();
        self.reset_with_seed(seed);
    }

    /// Reset with a new seed, re-randomizing the knight's start.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = TourRng::new(seed);
        self.board.reset(&mut self.rng);
        self.clock.disarm();
        self.state = RunState::Idle;
        self.step_count = 0;

        let snapshot = self.snapshot();
        for obs in &mut self.observers {
            obs.on_reset(&snapshot);
        }
    }

    /// Begin ticking. Valid from `Idle` or `Stopped`; a stopped tour
    /// resumes from its exact position. No-op while already `Running`.
    pub fn start(&mut self, now_ms: u64) {
        if self.state == RunState::Running {
            return;
        }
        self.state = RunState::Running;
        self.clock.arm(now_ms);
    }

    /// Halt ticking, leaving the board untouched. Fires `on_stopped`.
    /// No-op unless `Running`.
    pub fn stop(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.state = RunState::Stopped(StopCause::Command);
        self.clock.disarm();
        for obs in &mut self.observers {
            obs.on_stopped();
        }
    }

    /// Change the speed multiplier; the effective interval becomes
    /// `base_interval_ms / multiplier` (at least 1 ms). While `Running`
    /// the pending deadline is rescheduled from `now_ms` at the new
    /// interval.
    pub fn set_speed(&mut self, multiplier: u32, now_ms: u64) {
        self.speed = multiplier.max(1);
        let interval = (self.config.base_interval_ms / u64::from(self.speed)).max(1);
        self.clock.set_interval(interval, now_ms);
    }

    /// Drive the clock: fires at most one tick when the deadline has
    /// passed. Returns the tick's outcome, or `None` when nothing was
    /// due.
    pub fn advance(&mut self, now_ms: u64) -> Option<StepOutcome> {
        if self.state == RunState::Running && self.clock.poll(now_ms) {
            self.tick()
        } else {
            None
        }
    }

    /// Apply one tick: select, move, notify. Returns `None` unless
    /// `Running` (a wrong-state tick is a benign no-op).
    ///
    /// On exhaustion the state becomes `Stopped(Exhausted)` and
    /// `on_ended` fires; this is the sole automatic stop condition.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.state != RunState::Running {
            return None;
        }

        match select_next(&self.board, self.board.knight()) {
            Some(next) => {
                self.board.move_knight(next);
                self.step_count += 1;

                let snapshot = self.snapshot();
                for obs in &mut self.observers {
                    obs.on_move(&snapshot);
                }
                Some(StepOutcome::Moved(next))
            }
            None => {
                self.state = RunState::Stopped(StopCause::Exhausted);
                self.clock.disarm();
                for obs in &mut self.observers {
                    obs.on_ended();
                }
                Some(StepOutcome::Ended)
            }
        }
    }

    /// The move the next tick would apply, without applying it. Drives
    /// the guide overlay.
    #[must_use]
    pub fn peek_next_move(&self) -> Option<Coord> {
        select_next(&self.board, self.board.knight())
    }

    /// Take a serializable snapshot of the current position.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot(self.step_count)
    }

    /// Current board state (read-only).
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether the tick source is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub const fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Master seed of the current run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.master_seed()
    }

    /// Current speed multiplier.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Effective tick interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.clock.interval_ms()
    }

    /// The configuration this controller was built from.
    #[must_use]
    pub const fn config(&self) -> &TourConfig {
        &self.config
    }
}
