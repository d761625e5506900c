//! Room selection under the two-tier travel-cost policy
//!
//! Strategy:
//! - Priority 1: the least-spread window of rooms on a single floor
//! - Priority 2: cross-floor fallback ordered by lift proximity
//!
//! Selection is a pure function over an availability snapshot. It never
//! mutates anything; the caller applies the winning set to the inventory.

pub mod cross_floor;
pub mod same_floor;

use crate::core::error::{ConciergeError, Result};
use crate::core::room::Room;
use tracing::debug;

/// Smallest bookable party
pub const MIN_REQUEST: usize = 1;

/// Largest bookable party; bigger groups go through group sales, not this desk
pub const MAX_REQUEST: usize = 5;

/// Travel-cost weight of crossing one floor, in room-index steps
pub const FLOOR_COST_WEIGHT: u32 = 2;

/// A selected set of rooms and its travel-cost metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Chosen rooms, as they appeared in the availability snapshot
    pub rooms: Vec<Room>,
    /// Horizontal span for a same-floor set, bounding-box cost otherwise
    pub cost: u32,
}

impl Allocation {
    /// Display numbers of the chosen rooms
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }
}

/// Heuristic scalar that linearizes a room's 2-D position for cross-floor
/// comparison: crossing one floor costs about two room-index steps
pub(crate) fn proximity_score(room: &Room) -> u32 {
    room.floor * FLOOR_COST_WEIGHT + room.index
}

/// Bounding-box travel cost of a set of rooms: two cost units per floor
/// spanned plus one per room-index spanned
pub(crate) fn bounding_box_cost(window: &[Room]) -> u32 {
    let mut min_floor = u32::MAX;
    let mut max_floor = 0;
    let mut min_index = u32::MAX;
    let mut max_index = 0;
    for room in window {
        min_floor = min_floor.min(room.floor);
        max_floor = max_floor.max(room.floor);
        min_index = min_index.min(room.index);
        max_index = max_index.max(room.index);
    }
    (max_floor - min_floor) * FLOOR_COST_WEIGHT + (max_index - min_index)
}

/// Pick the lowest-cost set of `count` rooms from an availability snapshot
///
/// Priority 1 looks for the least-spread window on a single floor; only when
/// no floor holds `count` available rooms does Priority 2 search across
/// floors. Ties always go to the first minimum in scan order (floors
/// ascending, windows left to right), so results are reproducible for a
/// given occupancy state.
///
/// # Errors
///
/// - `InvalidCount` when `count` is outside [`MIN_REQUEST`]..=[`MAX_REQUEST`]
/// - `InsufficientInventory` when the snapshot holds fewer than `count` rooms
/// - `NoArrangementFound` is unreachable for a well-formed snapshot but kept
///   as a guard against corrupted state
pub fn select_best_set(available: &[Room], count: usize) -> Result<Allocation> {
    if !(MIN_REQUEST..=MAX_REQUEST).contains(&count) {
        return Err(ConciergeError::InvalidCount(count));
    }
    if available.len() < count {
        return Err(ConciergeError::InsufficientInventory {
            requested: count,
            available: available.len(),
        });
    }

    if let Some(allocation) = same_floor::search(available, count) {
        return Ok(allocation);
    }

    debug!(count, "no single floor qualifies, optimizing across floors");

    cross_floor::search(available, count).ok_or(ConciergeError::NoArrangementFound)
}
