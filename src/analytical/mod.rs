//! Implements analytical solutions for verifications

mod quarter_annulus;
pub use crate::analytical::quarter_annulus::*;
