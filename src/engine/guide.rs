//! Guide geometry.
//!
//! Decomposes a prospective knight move into the two axis-aligned legs
//! of its "L" for directional display. Pure data: renderers scale the
//! segments to pixels or terminal cells themselves.

use serde::{Deserialize, Serialize};

use crate::engine::board::Coord;

/// One axis-aligned leg of the guide arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSegment {
    /// Leg start.
    pub from: Coord,
    /// Leg end.
    pub to: Coord,
    /// Whether this leg carries the directional terminator (arrowhead).
    pub arrowhead: bool,
}

/// Split the move `from → to` into its two legs.
///
/// When the horizontal displacement is 2, the corner sits at
/// `(to.x, from.y)` (horizontal leg first); otherwise at
/// `(from.x, to.y)` (vertical leg first). The second leg carries the
/// arrowhead.
#[must_use]
pub fn decompose(from: Coord, to: Coord) -> [GuideSegment; 2] {
    let dx = i16::from(to.x) - i16::from(from.x);
    let corner = if dx.abs() == 2 {
        Coord::new(to.x, from.y)
    } else {
        Coord::new(from.x, to.y)
    };
    [
        GuideSegment {
            from,
            to: corner,
            arrowhead: false,
        },
        GuideSegment {
            from: corner,
            to,
            arrowhead: true,
        },
    ]
}
