//! Station control: the LIVE/LOCKED state machine and its inputs.

mod command;
mod controller;
mod view;

pub use command::{Command, Flow};
pub use controller::{LockedBlend, Mode, StationController, StationState};
pub use view::{ChannelView, StationView};
