//! Shared helpers.

pub mod date;
pub mod fs;
mod plural;

pub use date::DateUtc;
pub use plural::plural_count;
