//! Capture-exchange evaluation for padbox.

pub mod see;

pub use see::{PIECE_VALUES, static_exchange_evaluation};
