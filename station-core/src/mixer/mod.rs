//! Pigment blending.

mod blend;

pub use blend::compute_mix;
