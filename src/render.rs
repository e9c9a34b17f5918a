//! Plain-text frame for the headless station.

use std::fmt::Write;

use station_core::{Mode, StationView};

/// Render the station as a few lines of text.
pub fn frame(view: &StationView<'_>) -> String {
    let mut out = String::new();
    let mode = match view.mode {
        Mode::Live => "LIVE",
        Mode::Locked => "LOCKED",
    };
    let _ = writeln!(
        out,
        "[{}] mix RGB={}  products={}",
        mode,
        view.mix,
        view.products.len()
    );

    for channel in &view.channels {
        let name = channel.pigment.name();
        let initial = name.get(..1).unwrap_or("?").to_uppercase();
        let _ = writeln!(
            out,
            "{}{} : {:.2}  ({})",
            if channel.selected { "> " } else { "  " },
            initial,
            channel.amount,
            if channel.enabled { "ON" } else { "OFF" }
        );
    }

    if let Some(locked) = view.locked {
        let _ = writeln!(
            out,
            "QC {}: RGB={} is {:.1} from {} (threshold {})",
            locked.inspection.result,
            locked.color,
            locked.inspection.distance,
            view.reference_color,
            view.qc_threshold
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use station_core::{Command, StationConfig, StationController};

    #[test]
    fn test_initial_frame() {
        let station = StationController::new(StationConfig::default());
        assert_eq!(
            frame(&station.view()),
            "[LIVE] mix RGB=(150, 150, 150)  products=0\n\
             > R : 0.00  (OFF)\n  \
             G : 0.00  (OFF)\n  \
             B : 0.00  (OFF)\n  \
             Y : 0.00  (OFF)\n"
        );
    }

    #[test]
    fn test_frame_marks_selection() {
        let mut station = StationController::new(StationConfig::default());
        station.apply(Command::SelectNext).unwrap();
        station.apply(Command::IncreaseSelected).unwrap();
        let text = frame(&station.view());
        assert!(text.contains("> G : 0.10  (ON)\n"));
        assert!(text.contains("  R : 0.00  (OFF)\n"));
        assert!(text.starts_with("[LIVE] mix RGB=(0, 255, 0)"));
    }
}
