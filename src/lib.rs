//! # Concierge - Travel-Cost-Minimizing Room Allocation
//!
//! `concierge-rs` assigns hotel rooms to incoming bookings while minimizing
//! how far the party walks from the lift. Selection runs a two-tier policy:
//!
//! - **Same floor first**: the least-spread window of rooms on a single
//!   floor (a contiguous run costs 0)
//! - **Cross-floor fallback**: when no floor can seat the whole party, rooms
//!   are gathered "closest to the lift" across floors, scored by a
//!   bounding-box travel cost (two units per floor, one per room step)
//!
//! Selection itself is a pure function over an availability snapshot
//! ([`select_best_set`]); the [`Hotel`] wrapper owns the inventory and
//! commits winning selections atomically.
//!
//! ## Quick Start
//!
//! ```rust
//! use concierge_rs::{Hotel, Result};
//!
//! # fn main() -> Result<()> {
//! let mut hotel = Hotel::new();
//!
//! // Book three rooms for one party
//! let booking = hotel.book_rooms(3)?;
//! assert_eq!(booking.rooms.len(), 3);
//!
//! // An empty hotel always has a contiguous block by the lift
//! assert_eq!(booking.cost, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom layouts
//!
//! ```rust
//! use concierge_rs::{Hotel, HotelLayout, Result};
//!
//! # fn main() -> Result<()> {
//! // Three floors: ten, ten, and a four-room penthouse level
//! let layout = HotelLayout::new(vec![10, 10, 4])?;
//! let mut hotel = Hotel::with_layout(layout);
//!
//! let booking = hotel.book_rooms(2)?;
//! assert_eq!(booking.room_numbers(), vec![101, 102]);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod render;

pub use crate::core::{
    allocator::{select_best_set, Allocation, MAX_REQUEST, MIN_REQUEST},
    error::{ConciergeError, Result},
    inventory::Inventory,
    layout::HotelLayout,
    room::Room,
};

use rand::Rng;
use tracing::{debug, info};

/// High-level booking desk
///
/// Owns the occupancy store, runs the allocator against availability
/// snapshots, and remembers the most recent booking so renderers can
/// highlight it. One `book_rooms` call runs to completion under `&mut self`,
/// which is exactly the critical section a concurrent wrapper would need to
/// guard.
pub struct Hotel {
    layout: HotelLayout,
    inventory: Inventory,
    last_booked: Vec<u32>,
}

impl Hotel {
    /// Create a hotel with the default 97-room layout, all rooms available
    pub fn new() -> Self {
        Self::with_layout(HotelLayout::default())
    }

    /// Create a hotel with a custom layout, all rooms available
    pub fn with_layout(layout: HotelLayout) -> Self {
        let inventory = Inventory::new(&layout);
        Hotel {
            layout,
            inventory,
            last_booked: Vec::new(),
        }
    }

    /// The building shape this hotel was created with
    pub fn layout(&self) -> &HotelLayout {
        &self.layout
    }

    /// Current occupancy store
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the occupancy store
    ///
    /// For external occupancy writers (simulators, bulk imports). The
    /// allocator itself only ever goes through [`Hotel::book_rooms`].
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Room numbers of the most recent successful booking
    pub fn last_booked(&self) -> &[u32] {
        &self.last_booked
    }

    /// Book `count` rooms, minimizing the party's travel cost
    ///
    /// Runs [`select_best_set`] over a snapshot of the available rooms and
    /// commits the winning set. The commit is atomic from the caller's
    /// perspective: every failure path leaves occupancy untouched.
    pub fn book_rooms(&mut self, count: usize) -> Result<Allocation> {
        let available = self.inventory.available_rooms();
        let allocation = select_best_set(&available, count)?;

        let numbers = allocation.room_numbers();
        self.inventory.mark_booked(&numbers)?;
        self.last_booked = numbers;

        info!(
            cost = allocation.cost,
            rooms = ?self.last_booked,
            "booking committed"
        );
        Ok(allocation)
    }

    /// Make every room available again and forget the last booking
    pub fn reset(&mut self) {
        self.inventory = Inventory::new(&self.layout);
        self.last_booked.clear();
        debug!("hotel reset");
    }

    /// Replace occupancy with a random pattern, `rate` being the booking
    /// probability per room
    pub fn randomize_occupancy(&mut self, rng: &mut impl Rng, rate: f64) {
        self.inventory.randomize_occupancy(rng, rate);
        self.last_booked.clear();
    }

    /// Render the occupancy grid with the last booking highlighted
    pub fn render_grid(&self) -> String {
        render::occupancy_grid(&self.inventory, &self.last_booked)
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_commits_to_inventory() {
        let mut hotel = Hotel::new();
        let booking = hotel.book_rooms(2).unwrap();

        assert_eq!(hotel.inventory().available_count(), 95);
        for number in booking.room_numbers() {
            assert!(hotel.inventory().room(number).unwrap().booked);
        }
        assert_eq!(hotel.last_booked(), booking.room_numbers());
    }

    #[test]
    fn test_repeated_bookings_never_overlap() {
        let mut hotel = Hotel::new();
        let first = hotel.book_rooms(3).unwrap();
        let second = hotel.book_rooms(3).unwrap();

        for number in second.room_numbers() {
            assert!(!first.room_numbers().contains(&number));
        }
    }

    #[test]
    fn test_failed_booking_leaves_state_unchanged() {
        let mut hotel = Hotel::new();
        hotel.book_rooms(4).unwrap();
        let before = hotel.inventory().clone();

        assert!(hotel.book_rooms(0).is_err());
        assert!(hotel.book_rooms(9).is_err());
        assert_eq!(hotel.inventory(), &before);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut hotel = Hotel::new();
        hotel.book_rooms(5).unwrap();
        hotel.reset();

        assert_eq!(hotel.inventory().available_count(), 97);
        assert!(hotel.last_booked().is_empty());
    }
}
