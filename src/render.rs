//! Console rendering of the occupancy grid
//!
//! Pure string producer with no display-state of its own: it reads the
//! inventory and the most recent booking and draws the building top floor
//! first, the way a guest sees it from the lift lobby.

use crate::core::inventory::Inventory;
use crate::core::room::Room;
use std::collections::BTreeMap;

/// Marker for an available room
const AVAILABLE: &str = "[ ] ";
/// Marker for a booked room
const BOOKED: &str = "[X] ";
/// Marker for a room in the most recent booking
const JUST_BOOKED: &str = "[*] ";

/// Render the hotel occupancy as a text grid
///
/// Floors are printed top-down with one row per floor, index 0 on the left
/// (nearest the lift). Rooms listed in `last_booked` get the highlight
/// marker.
pub fn occupancy_grid(inventory: &Inventory, last_booked: &[u32]) -> String {
    let mut by_floor: BTreeMap<u32, Vec<Room>> = BTreeMap::new();
    for room in inventory.rooms() {
        by_floor.entry(room.floor).or_default().push(*room);
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(40)));
    out.push_str(" HOTEL OCCUPANCY\n");
    out.push_str(" [ ]=Avail  [X]=Booked  [*]=Just Booked\n");
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    for (floor, rooms) in by_floor.iter().rev() {
        let mut row = Vec::with_capacity(rooms.len());
        let mut sorted = rooms.clone();
        sorted.sort_by_key(|r| r.index);

        for room in &sorted {
            if last_booked.contains(&room.number) {
                row.push(JUST_BOOKED);
            } else if room.booked {
                row.push(BOOKED);
            } else {
                row.push(AVAILABLE);
            }
        }
        out.push_str(&format!("Floor {:2} | {}\n", floor, row.concat()));
    }

    out.push_str("         ^ LIFT/STAIRS ^\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::HotelLayout;

    #[test]
    fn test_grid_marks_states() {
        let mut inv = Inventory::new(&HotelLayout::new(vec![3]).unwrap());
        inv.mark_booked(&[101, 103]).unwrap();

        let grid = occupancy_grid(&inv, &[103]);
        assert!(grid.contains("Floor  1 | [X] [ ] [*] "));
    }

    #[test]
    fn test_grid_top_floor_first() {
        let inv = Inventory::new(&HotelLayout::new(vec![2, 2]).unwrap());
        let grid = occupancy_grid(&inv, &[]);

        let floor2 = grid.find("Floor  2").unwrap();
        let floor1 = grid.find("Floor  1").unwrap();
        assert!(floor2 < floor1);
    }

    #[test]
    fn test_grid_has_lift_marker() {
        let inv = Inventory::new(&HotelLayout::default());
        assert!(occupancy_grid(&inv, &[]).contains("LIFT/STAIRS"));
    }
}
