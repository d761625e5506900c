//! Priority-2 search: cross-floor fallback ordered by lift proximity
//!
//! Reached only when inventory is fragmented enough that no single floor can
//! seat the whole party. Rooms are linearized by a proximity score
//! (floor * 2 + index) and a window of the requested size slides over the
//! sorted list, scoring each window by its true bounding-box cost.
//!
//! The score pre-sort is a deliberate approximation: two rooms with adjacent
//! scores can still sit farther apart than a non-adjacent pair, so the
//! result is not guaranteed globally optimal. It keeps the search at
//! O(m log m) instead of evaluating every size-n subset, and callers depend
//! on the exact selections it produces. Do not replace it with an
//! exhaustive optimizer.

use super::{bounding_box_cost, proximity_score, Allocation};
use crate::core::room::Room;

/// Find the minimum bounding-box-cost window of `count` rooms across floors
///
/// Same tie-break rule as the same-floor stage: the first window to reach
/// the minimum in ascending-score scan order wins. Returns `None` only when
/// the snapshot holds fewer than `count` rooms.
pub fn search(available: &[Room], count: usize) -> Option<Allocation> {
    if count == 0 || available.len() < count {
        return None;
    }

    let mut sorted = available.to_vec();
    // Floor and index break score ties so the scan order never depends on
    // snapshot order
    sorted.sort_by_key(|r| (proximity_score(r), r.floor, r.index));

    let mut best: Option<Allocation> = None;
    for window in sorted.windows(count) {
        let cost = bounding_box_cost(window);
        if best.as_ref().map_or(true, |b| cost < b.cost) {
            best = Some(Allocation {
                rooms: window.to_vec(),
                cost,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_lowest_scores_near_the_lift() {
        // Two rooms per floor on three floors, party of three.
        // Scores: (1,0)=2 (1,1)=3 (2,0)=4 (2,1)=5 (3,0)=6 (3,1)=7.
        // Every window of three costs 2*1 + 1 = 3; the first one wins.
        let rooms = vec![
            Room::new(1, 0),
            Room::new(1, 1),
            Room::new(2, 0),
            Room::new(2, 1),
            Room::new(3, 0),
            Room::new(3, 1),
        ];
        let allocation = search(&rooms, 3).unwrap();
        assert_eq!(allocation.room_numbers(), vec![101, 102, 201]);
        assert_eq!(allocation.cost, 3);
    }

    #[test]
    fn test_bounding_box_beats_score_adjacency() {
        // Score order: (1,0)=2, (1,4)=6, (3,0)=6, (3,1)=7.
        // Window [(1,0),(1,4)] costs 4; window [(1,4),(3,0)] costs 2*2+4=8;
        // window [(3,0),(3,1)] costs 1 and wins despite higher scores.
        let rooms = vec![
            Room::new(1, 0),
            Room::new(1, 4),
            Room::new(3, 0),
            Room::new(3, 1),
        ];
        let allocation = search(&rooms, 2).unwrap();
        assert_eq!(allocation.room_numbers(), vec![301, 302]);
        assert_eq!(allocation.cost, 1);
    }

    #[test]
    fn test_first_minimum_wins_ties() {
        // Scores: (1,0)=2, (1,2)=4, (2,0)=4, (2,2)=6. Tie between (1,2) and
        // (2,0) is broken by floor, fixing the scan order. Both windows of
        // two cost 2; the first scanned, [(1,0),(1,2)], wins.
        let rooms = vec![
            Room::new(2, 0),
            Room::new(1, 2),
            Room::new(2, 2),
            Room::new(1, 0),
        ];
        let allocation = search(&rooms, 2).unwrap();
        assert_eq!(allocation.room_numbers(), vec![101, 103]);
        assert_eq!(allocation.cost, 2);
    }

    #[test]
    fn test_window_always_exists_when_enough_rooms() {
        let rooms = vec![Room::new(1, 0), Room::new(5, 9), Room::new(9, 3)];
        assert!(search(&rooms, 3).is_some());
    }

    #[test]
    fn test_too_few_rooms() {
        let rooms = vec![Room::new(1, 0)];
        assert!(search(&rooms, 2).is_none());
    }
}
