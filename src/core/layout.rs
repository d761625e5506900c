//! Hotel layout configuration
//!
//! The building shape (how many rooms each floor holds) is external
//! configuration, not algorithm input: the allocator re-derives per-floor
//! orderings from room positions alone. Layouts can be declared in TOML:
//!
//! ```toml
//! floors = [10, 10, 10, 10, 10, 10, 10, 10, 10, 7]
//! ```

use crate::core::error::{ConciergeError, Result};
use crate::core::room::Room;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of floors a layout may describe
pub const MAX_FLOORS: usize = 99;

/// Maximum rooms on a single floor; keeps derived room numbers unique
pub const MAX_ROOMS_PER_FLOOR: u32 = 99;

/// Building shape: rooms per floor, bottom floor first
///
/// `floors[0]` is floor 1. Floors may hold different room counts (a smaller
/// top floor is common).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelLayout {
    floors: Vec<u32>,
}

impl HotelLayout {
    /// Create a validated layout from per-floor room counts
    pub fn new(floors: Vec<u32>) -> Result<Self> {
        Self::validate(&floors)?;
        Ok(HotelLayout { floors })
    }

    /// Parse and validate a layout from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let layout: HotelLayout = toml::from_str(text)?;
        Self::validate(&layout.floors)?;
        Ok(layout)
    }

    /// Load a layout from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(floors: &[u32]) -> Result<()> {
        if floors.is_empty() {
            return Err(ConciergeError::InvalidLayout(
                "layout must describe at least one floor".to_string(),
            ));
        }
        if floors.len() > MAX_FLOORS {
            return Err(ConciergeError::InvalidLayout(format!(
                "too many floors: {} (max {})",
                floors.len(),
                MAX_FLOORS
            )));
        }
        for (i, &count) in floors.iter().enumerate() {
            if count == 0 || count > MAX_ROOMS_PER_FLOOR {
                return Err(ConciergeError::InvalidLayout(format!(
                    "floor {} holds {} rooms (must be 1 to {})",
                    i + 1,
                    count,
                    MAX_ROOMS_PER_FLOOR
                )));
            }
        }
        Ok(())
    }

    /// Number of floors in the building
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Room count on a 1-based floor number, if the floor exists
    pub fn rooms_on_floor(&self, floor: u32) -> Option<u32> {
        self.floors.get(floor.checked_sub(1)? as usize).copied()
    }

    /// Total rooms across all floors
    pub fn total_rooms(&self) -> usize {
        self.floors.iter().map(|&c| c as usize).sum()
    }

    /// Materialize every room position, floors ascending, indices ascending
    pub fn build_rooms(&self) -> Vec<Room> {
        let mut rooms = Vec::with_capacity(self.total_rooms());
        for (i, &count) in self.floors.iter().enumerate() {
            let floor = i as u32 + 1;
            for index in 0..count {
                rooms.push(Room::new(floor, index));
            }
        }
        rooms
    }
}

impl Default for HotelLayout {
    /// The classic 97-room building: nine floors of ten rooms and a
    /// seven-room top floor
    fn default() -> Self {
        let mut floors = vec![10; 9];
        floors.push(7);
        HotelLayout { floors }
    }
}
