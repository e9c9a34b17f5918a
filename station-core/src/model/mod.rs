//! Data model types for the mixing station.

mod color;
mod pigment;
mod product;

pub use color::Rgb;
pub use pigment::{Pigment, PigmentChannel};
pub use product::{ChannelReading, ChannelSnapshot, ProductEvent};
