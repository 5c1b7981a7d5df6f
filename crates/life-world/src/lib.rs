//! Game-of-Life engine.
//!
//! A toroidal grid stored as a packed bit buffer, advanced one generation at a time
//! with the B3/S23 rule. The buffer is exposed read-only so a host can render it
//! without copying.

pub mod bitgrid;
pub mod pattern;
pub mod rules;
pub mod universe;

pub use bitgrid::BitGrid;
pub use pattern::Pattern;
pub use universe::Universe;
