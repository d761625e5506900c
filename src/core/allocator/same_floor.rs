//! Priority-1 search: a least-spread window of rooms on a single floor
//!
//! Horizontal cost dominates when every room shares a floor, since no
//! vertical travel is needed. Sliding a window over each floor's sorted
//! indices finds the minimum-spread group in linear time per floor.

use super::Allocation;
use crate::core::room::Room;
use std::collections::BTreeMap;

/// Find the minimum-spread window of `count` available rooms on one floor
///
/// Floors are scanned in ascending order and windows left to right; the
/// first window to reach the minimum cost wins. Returns `None` when no
/// floor holds `count` available rooms.
pub fn search(available: &[Room], count: usize) -> Option<Allocation> {
    // BTreeMap fixes the floor scan order regardless of snapshot order
    let mut by_floor: BTreeMap<u32, Vec<Room>> = BTreeMap::new();
    for room in available {
        by_floor.entry(room.floor).or_default().push(*room);
    }

    let mut best: Option<Allocation> = None;

    for rooms in by_floor.values_mut() {
        if rooms.len() < count {
            continue;
        }
        rooms.sort_by_key(|r| r.index);

        for window in rooms.windows(count) {
            // Gaps left by already-booked rooms widen the span; a truly
            // contiguous run costs 0
            let cost = window[count - 1].index - window[0].index;
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Allocation {
                    rooms: window.to_vec(),
                    cost,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(floor: u32, indices: &[u32]) -> Vec<Room> {
        indices.iter().map(|&i| Room::new(floor, i)).collect()
    }

    #[test]
    fn test_contiguous_block_costs_zero() {
        let rooms = floor(1, &[0, 1, 2, 3, 4]);
        let allocation = search(&rooms, 3).unwrap();
        assert_eq!(allocation.cost, 0);
        assert_eq!(allocation.room_numbers(), vec![101, 102, 103]);
    }

    #[test]
    fn test_gap_widens_cost() {
        // Indices 0, 2, 5: the only window of three spans 5 index steps
        let rooms = floor(1, &[0, 2, 5]);
        let allocation = search(&rooms, 3).unwrap();
        assert_eq!(allocation.cost, 5);
    }

    #[test]
    fn test_picks_tightest_window() {
        // Windows: [0,4,5] cost 5, [4,5,9] cost 5, but [4,5] pair for n=2
        // costs 1 while [0,4] costs 4 and [5,9] costs 4
        let rooms = floor(2, &[0, 4, 5, 9]);
        let allocation = search(&rooms, 2).unwrap();
        assert_eq!(allocation.cost, 1);
        assert_eq!(allocation.room_numbers(), vec![205, 206]);
    }

    #[test]
    fn test_no_qualifying_floor() {
        let mut rooms = floor(1, &[0, 1]);
        rooms.extend(floor(2, &[3, 7]));
        assert!(search(&rooms, 3).is_none());
    }

    #[test]
    fn test_lower_floor_wins_ties() {
        // Both floors offer a contiguous pair; floor 1 is scanned first
        let mut rooms = floor(2, &[0, 1]);
        rooms.extend(floor(1, &[5, 6]));
        let allocation = search(&rooms, 2).unwrap();
        assert_eq!(allocation.rooms[0].floor, 1);
    }

    #[test]
    fn test_leftmost_window_wins_ties() {
        // Two contiguous pairs on one floor; the left one is seen first
        let rooms = floor(1, &[0, 1, 5, 6]);
        let allocation = search(&rooms, 2).unwrap();
        assert_eq!(allocation.room_numbers(), vec![101, 102]);
    }

    #[test]
    fn test_unsorted_snapshot_order_is_irrelevant() {
        let mut rooms = floor(1, &[4, 0, 2, 1, 3]);
        rooms.reverse();
        let allocation = search(&rooms, 3).unwrap();
        assert_eq!(allocation.cost, 0);
        assert_eq!(allocation.room_numbers(), vec![101, 102, 103]);
    }

    #[test]
    fn test_single_room_request() {
        let rooms = floor(3, &[7, 2, 5]);
        let allocation = search(&rooms, 1).unwrap();
        assert_eq!(allocation.cost, 0);
        // Sorted by index, the first window is the lowest index
        assert_eq!(allocation.room_numbers(), vec![303]);
    }
}
