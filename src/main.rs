//! mixing-station - Headless driver for the factory color-mixing station.
//!
//! Reads operator commands from a script (or stdin) and runs the control
//! loop on a simulated 60 fps clock: each command line is applied as its own
//! frame, `wait` lines run idle frames, and every frame advances the
//! production timer then prints the station when it changed.

mod input;
mod render;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use station_core::{Command, Flow, StationConfig, StationController};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use input::{parse_line, Input};

/// Length of one simulated frame.
const FRAME: Duration = Duration::from_micros(16_667);

/// Run the factory color-mixing station from a command script.
#[derive(Parser, Debug)]
#[command(name = "mixing-station")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script of operator commands (reads stdin when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print the final station state as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// The per-frame control loop around a station.
struct ControlLoop {
    station: StationController,
    now: Duration,
    last_frame: String,
}

impl ControlLoop {
    fn new(station: StationController) -> Self {
        Self {
            station,
            now: Duration::ZERO,
            last_frame: String::new(),
        }
    }

    /// Apply this frame's commands, tick, then render.
    fn frame(&mut self, commands: &[Command]) -> Flow {
        for command in commands {
            match self.station.apply(*command) {
                Ok(Flow::Quit) => return Flow::Quit,
                Ok(Flow::Continue) => {}
                // The station stays usable; the gap in the audit log is reported.
                Err(e) => error!("{:?} failed: {}", command, e),
            }
        }

        self.now += FRAME;
        if let Err(e) = self.station.tick(self.now) {
            error!("Production not logged: {}", e);
        }

        let text = render::frame(&self.station.view());
        if text != self.last_frame {
            print!("{}", text);
            self.last_frame = text;
        }
        Flow::Continue
    }

    /// Run idle frames until `duration` of simulated time has passed.
    fn idle(&mut self, duration: Duration) {
        let end = self.now + duration;
        while self.now < end {
            self.frame(&[]);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let station = StationController::new(StationConfig::default());
    station.begin_run().with_context(|| {
        format!(
            "Failed to open audit log {}",
            station.logger().path().display()
        )
    })?;

    let mut control = ControlLoop::new(station);

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Input::Command(command))) => {
                if control.frame(&[command]) == Flow::Quit {
                    break;
                }
            }
            Ok(Some(Input::Wait(duration))) => control.idle(duration),
            Err(e) => warn!("Line {}: {}", number + 1, e),
        }
    }

    info!(
        "Stopped after {:.1}s with {} product(s)",
        control.now.as_secs_f64(),
        control.station.products().len()
    );

    if args.debug {
        let json = serde_json::to_string_pretty(&control.station.view())?;
        println!("{}", json);
    }

    Ok(())
}
