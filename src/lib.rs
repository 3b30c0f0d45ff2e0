//! # warnsdorff
//!
//! Deterministic knight's-tour simulation engine.
//!
//! A knight walks an N×N chessboard under Warnsdorff's rule (always move
//! to the unvisited square with the fewest onward moves), one step per
//! timer tick, until the heuristic strands it or the tour completes.
//! The engine is fully deterministic: the same seed reproduces the same
//! run, and state snapshots are serializable and comparable so renderers
//! can be verified against each other.
//!
//! ## Example
//!
//! ```rust
//! use warnsdorff::prelude::*;
//!
//! let config = TourConfig::builder().seed(42).build();
//! let mut tour = TourController::new(config);
//!
//! tour.start(0);
//! while let Some(outcome) = tour.tick() {
//!     if outcome == StepOutcome::Ended {
//!         break;
//!     }
//! }
//! assert!(tour.board().visited_cells() <= 64);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod config;
pub mod engine;
pub mod error;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{TourConfig, TourConfigBuilder};
    pub use crate::engine::board::{Board, BoardSnapshot, Coord};
    pub use crate::engine::controller::{
        RunState, StepOutcome, StopCause, TourController, TourObserver,
    };
    pub use crate::engine::rng::TourRng;
    pub use crate::error::{TourError, TourResult};
}

/// Re-export for public API
pub use error::{TourError, TourResult};
