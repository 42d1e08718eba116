//! Theme Module
//!
//! Light and dark palettes plus the styling helpers the views share. The
//! active palette follows the persisted dark-mode flag; every view asks
//! for it through [`colors::palette`] instead of hardcoding colors.

pub mod colors;
pub mod styles;

pub use colors::{palette, Palette};
pub use styles::*;
