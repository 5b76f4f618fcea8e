//! Data models
//!
//! Shared between hotel-server and hotel-client (via API).
//! Wire format is camelCase JSON; all IDs are `i64`.

pub mod account;
pub mod booking;
pub mod reservation_fee;
pub mod room;

// Re-exports
pub use account::*;
pub use booking::*;
pub use reservation_fee::*;
pub use room::*;
