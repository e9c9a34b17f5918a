//! The station state machine.
//!
//! The station is either LIVE (sliders editable, a product leaves the line
//! every production interval) or LOCKED (a blend has been confirmed and
//! inspected, production is paused and the sliders are frozen).
//!
//! Audit log failures never roll back a transition: the in-memory state is
//! updated first and the storage error is handed back to the caller, who
//! decides whether to keep running.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::StationConfig;
use crate::error::Result;
use crate::inspection::{Inspection, QcResult};
use crate::journal::EventLogger;
use crate::mixer::compute_mix;
use crate::model::{ChannelSnapshot, PigmentChannel, ProductEvent, Rgb};

use super::command::{Command, Flow};
use super::view::{ChannelView, StationView};

/// Top-level production mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Live,
    Locked,
}

/// A confirmed blend and its inspection, held while LOCKED.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockedBlend {
    pub color: Rgb,
    pub inspection: Inspection,
}

/// Everything the controller mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct StationState {
    /// Sliders in their fixed order.
    pub channels: Vec<PigmentChannel>,
    /// Index of the slider being edited.
    pub selected: usize,
    /// Present exactly while production is paused.
    pub locked: Option<LockedBlend>,
    /// Timer reading when the last product was made.
    pub last_production: Duration,
}

impl StationState {
    /// All channels off and at zero, first channel selected, LIVE.
    pub fn new(config: &StationConfig) -> Self {
        Self {
            channels: config
                .pigments
                .iter()
                .map(|(pigment, base)| PigmentChannel::new(*pigment, *base))
                .collect(),
            selected: 0,
            locked: None,
            last_production: Duration::ZERO,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.locked.is_some() {
            Mode::Locked
        } else {
            Mode::Live
        }
    }
}

/// Owns the station state and drives the mixer, inspector and audit log.
#[derive(Debug)]
pub struct StationController {
    config: StationConfig,
    state: StationState,
    logger: EventLogger,
    products: Vec<ProductEvent>,
}

impl StationController {
    /// Create a controller writing to the configured log path.
    pub fn new(config: StationConfig) -> Self {
        let logger = EventLogger::new(config.log_path.clone());
        Self::with_logger(config, logger)
    }

    /// Create a controller with an explicit logger.
    pub fn with_logger(config: StationConfig, logger: EventLogger) -> Self {
        let state = StationState::new(&config);
        Self {
            config,
            state,
            logger,
            products: Vec::new(),
        }
    }

    /// Write the run marker that separates this run from earlier history.
    pub fn begin_run(&self) -> Result<()> {
        self.logger.mark_run_start()?;
        tracing::info!("New run started, logging to {}", self.logger.path().display());
        Ok(())
    }

    pub fn state(&self) -> &StationState {
        &self.state
    }

    pub fn logger(&self) -> &EventLogger {
        &self.logger
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Products made so far this run, oldest first.
    pub fn products(&self) -> &[ProductEvent] {
        &self.products
    }

    /// QC verdict of the locked blend, if any.
    pub fn qc_result(&self) -> Option<QcResult> {
        self.state.locked.map(|l| l.inspection.result)
    }

    /// Blend currently coming out of the sliders.
    pub fn current_mix(&self) -> Rgb {
        compute_mix(&self.state.channels, self.config.neutral_color)
    }

    /// Apply one operator command.
    pub fn apply(&mut self, command: Command) -> Result<Flow> {
        if command.edits_channel() && self.state.locked.is_some() {
            tracing::warn!("Ignoring {:?} while the blend is locked", command);
            return Ok(Flow::Continue);
        }

        match command {
            Command::SelectNext => self.select_offset(1),
            Command::SelectPrevious => self.select_offset(-1),
            Command::IncreaseSelected
            | Command::DecreaseSelected
            | Command::ToggleSelectedEnabled => self.edit_selected(command),
            Command::ToggleLock => return self.toggle_lock().map(|_| Flow::Continue),
            Command::ClearLog => {
                self.logger.clear()?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Advance the production timer to `now`, measured from the start of the
    /// run. Returns the product made on this tick, if any.
    ///
    /// Nothing is produced while LOCKED and the timer is not reset, so a
    /// product follows promptly after unlocking once the interval has passed.
    pub fn tick(&mut self, now: Duration) -> Result<Option<ProductEvent>> {
        if self.state.locked.is_some() {
            return Ok(None);
        }
        if now.saturating_sub(self.state.last_production) <= self.config.production_interval {
            return Ok(None);
        }

        let channels = ChannelSnapshot::capture(&self.state.channels);
        let color = self.current_mix();
        self.state.last_production = now;

        let entry = self.logger.log_production(color, &channels);
        let produced_at = match &entry {
            Ok(entry) => *entry.timestamp(),
            Err(_) => chrono::Local::now(),
        };
        let product = ProductEvent {
            sequence: self.products.len() as u64 + 1,
            color,
            produced_at,
            channels,
        };
        tracing::debug!("Produced #{} with RGB={}", product.sequence, color);
        self.products.push(product.clone());

        entry.map(|_| Some(product))
    }

    /// Read-only snapshot for the presentation layer.
    pub fn view(&self) -> StationView<'_> {
        StationView {
            mix: self.current_mix(),
            channels: self
                .state
                .channels
                .iter()
                .enumerate()
                .map(|(i, c)| ChannelView {
                    pigment: c.pigment,
                    amount: c.amount(),
                    enabled: c.enabled,
                    selected: i == self.state.selected,
                })
                .collect(),
            mode: self.mode(),
            locked: self.state.locked,
            reference_color: self.config.reference_color,
            qc_threshold: self.config.qc_threshold,
            products: &self.products,
        }
    }

    fn toggle_lock(&mut self) -> Result<()> {
        if let Some(blend) = self.state.locked.take() {
            tracing::info!("Unlocked {}, production resumed", blend.color);
            return Ok(());
        }

        let color = self.current_mix();
        let inspection = Inspection::run(
            color,
            self.config.reference_color,
            self.config.qc_threshold,
        );
        let channels = ChannelSnapshot::capture(&self.state.channels);
        self.state.locked = Some(LockedBlend { color, inspection });
        tracing::info!(
            "Locked RGB={} QC={} (distance {:.1})",
            color,
            inspection.result,
            inspection.distance
        );

        self.logger
            .log_selection(color, inspection.result, &channels)
            .map(|_| ())
    }

    fn select_offset(&mut self, offset: isize) {
        let count = self.state.channels.len() as isize;
        if count == 0 {
            return;
        }
        let next = (self.state.selected as isize + offset).rem_euclid(count);
        self.state.selected = next as usize;
        tracing::debug!("Selected {}", self.state.channels[self.state.selected].pigment);
    }

    fn edit_selected(&mut self, command: Command) {
        let step = self.config.slider_step;
        let Some(channel) = self.state.channels.get_mut(self.state.selected) else {
            return;
        };
        match command {
            Command::IncreaseSelected => channel.increase(step),
            Command::DecreaseSelected => channel.decrease(step),
            Command::ToggleSelectedEnabled => channel.toggle(),
            _ => return,
        }
        tracing::debug!(
            "{} = {:.2} ({})",
            channel.pigment,
            channel.amount(),
            if channel.enabled { "ON" } else { "OFF" }
        );
    }
}
