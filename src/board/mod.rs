//! Board state: grid occupancy and stone colors.

pub mod types;

pub use types::*;
