//! Core tour-stepping engine.
//!
//! Implements the simulation loop with:
//! - Deterministic RNG (PCG, seeded placement)
//! - Board state and legal-move enumeration
//! - Warnsdorff move selection with deterministic tie-breaking
//! - A run/stop state machine driven by millisecond deadline arithmetic

pub mod board;
pub mod clock;
pub mod controller;
pub mod guide;
pub mod heuristic;
pub mod moves;
pub mod rng;

pub use board::{Board, BoardSnapshot, Coord};
pub use clock::TickClock;
pub use controller::{RunState, StepOutcome, StopCause, TourController, TourObserver};
pub use guide::{decompose, GuideSegment};
pub use heuristic::select_next;
pub use moves::{legal_moves, KNIGHT_OFFSETS};
pub use rng::TourRng;
