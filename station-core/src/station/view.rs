//! Read-only snapshot handed to whatever draws the station.

use serde::Serialize;

use crate::inspection::QcResult;
use crate::model::{Pigment, ProductEvent, Rgb};

use super::controller::{LockedBlend, Mode};

/// One slider as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelView {
    pub pigment: Pigment,
    pub amount: f64,
    pub enabled: bool,
    pub selected: bool,
}

/// Everything a frame needs; borrowing the product list avoids copying it
/// every frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationView<'a> {
    pub mix: Rgb,
    pub channels: Vec<ChannelView>,
    pub mode: Mode,
    pub locked: Option<LockedBlend>,
    pub reference_color: Rgb,
    pub qc_threshold: f64,
    pub products: &'a [ProductEvent],
}

impl StationView<'_> {
    pub fn qc_result(&self) -> Option<QcResult> {
        self.locked.map(|l| l.inspection.result)
    }

    pub fn selected(&self) -> Option<&ChannelView> {
        self.channels.iter().find(|c| c.selected)
    }
}
