//! Shape declarations for palettes, groups and their closed key sets.

mod group;
mod names;
mod palette;

pub use group::*;
pub use names::*;
pub use palette::*;
