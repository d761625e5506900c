use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Invalid room count: {0} (a booking covers 1 to 5 rooms)")]
    InvalidCount(usize),

    #[error("Not enough rooms: requested {requested}, only {available} available")]
    InsufficientInventory { requested: usize, available: usize },

    #[error("No suitable room arrangement found")]
    NoArrangementFound,

    #[error("Invalid hotel layout: {0}")]
    InvalidLayout(String),

    #[error("Layout parse error: {0}")]
    LayoutParse(#[from] toml::de::Error),

    #[error("Unknown room number: {0}")]
    UnknownRoom(u32),

    #[error("Room already booked: {0}")]
    AlreadyBooked(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConciergeError>;
