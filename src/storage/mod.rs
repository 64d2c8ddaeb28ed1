//! Data loading and file persistence

pub mod input;
pub mod reports;

pub use input::*;
pub use reports::*;
