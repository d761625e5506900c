//! Core allocation machinery
//!
//! Everything the booking desk needs: the room/layout data model, the owned
//! occupancy store, the travel-cost error taxonomy, and the two-tier
//! selection algorithm.

pub mod allocator;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod room;
