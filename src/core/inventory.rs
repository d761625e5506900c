//! Owned occupancy store
//!
//! The inventory owns every room and its booked flag. The allocator never
//! touches it directly: callers take an availability snapshot, run the
//! selection, and apply the winning set through [`Inventory::mark_booked`].

use crate::core::error::{ConciergeError, Result};
use crate::core::layout::HotelLayout;
use crate::core::room::Room;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// All rooms in the hotel and their occupancy state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    rooms: Vec<Room>,
}

impl Inventory {
    /// Create an inventory with every room unbooked
    pub fn new(layout: &HotelLayout) -> Self {
        Inventory {
            rooms: layout.build_rooms(),
        }
    }

    /// View of every room, floors ascending, indices ascending
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Snapshot of the currently unbooked rooms
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms.iter().copied().filter(|r| !r.booked).collect()
    }

    /// Number of currently unbooked rooms
    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| !r.booked).count()
    }

    /// Total rooms in the hotel
    pub fn total_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Look up a room by its display number
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Mark the given rooms as booked, by display number
    ///
    /// Two-phase: every number is resolved before any flag flips, so an
    /// unknown or already-booked room leaves occupancy untouched.
    pub fn mark_booked(&mut self, numbers: &[u32]) -> Result<()> {
        let mut slots = Vec::with_capacity(numbers.len());
        for &number in numbers {
            let pos = self
                .rooms
                .iter()
                .position(|r| r.number == number)
                .ok_or(ConciergeError::UnknownRoom(number))?;
            if self.rooms[pos].booked {
                return Err(ConciergeError::AlreadyBooked(number));
            }
            slots.push(pos);
        }
        for pos in slots {
            self.rooms[pos].booked = true;
        }
        Ok(())
    }

    /// Make every room available again
    pub fn clear_bookings(&mut self) {
        for room in &mut self.rooms {
            room.booked = false;
        }
        debug!("all bookings cleared");
    }

    /// Book a random subset of rooms, `rate` being the booking probability
    ///
    /// Used by demos to simulate a partially occupied hotel. Existing
    /// occupancy is overwritten.
    pub fn randomize_occupancy(&mut self, rng: &mut impl Rng, rate: f64) {
        let rate = rate.clamp(0.0, 1.0);
        for room in &mut self.rooms {
            room.booked = rng.gen_bool(rate);
        }
        debug!(
            available = self.available_count(),
            total = self.total_rooms(),
            "random occupancy generated"
        );
    }
}
