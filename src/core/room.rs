//! Room value type and display-number derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single hotel room at a fixed position in the building
///
/// `floor` counts up from 1. `index` is the horizontal ordinal position on
/// that floor, with index 0 nearest the lift/stairs; one index step costs one
/// travel-cost unit, one floor crossing costs two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Floor number, 1-based
    pub floor: u32,
    /// Horizontal position on the floor, 0 = nearest the lift
    pub index: u32,
    /// Display number, unique across the hotel (101, 102, .. 1001, ..)
    pub number: u32,
    /// Occupancy flag
    pub booked: bool,
}

impl Room {
    /// Create an unbooked room at the given position
    pub fn new(floor: u32, index: u32) -> Self {
        Room {
            floor,
            index,
            number: room_number(floor, index),
            booked: false,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Derive the display number for a room position
///
/// Floors 1-9 produce 101.., 901..; floor 10 rolls into 1001.. with the same
/// formula. Uniqueness holds as long as no floor exceeds 99 rooms, which the
/// layout validation enforces.
pub fn room_number(floor: u32, index: u32) -> u32 {
    floor * 100 + index + 1
}
