use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use mpuview::{OrientationState, Renderer};
use serde::Serialize;

/// How accepted orientations are written to stdout.
#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `orientation x=… y=… z=…`, one line per report.
    #[default]
    Pretty,
    /// One JSON object per report.
    Json,
}

#[derive(Serialize)]
struct OrientationOutput {
    x: f32,
    y: f32,
    z: f32,
    timestamp: String,
}

/// Stand-in for a 3D view: prints every redraw to stdout.
#[derive(Debug)]
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Renderer for ConsoleRenderer {
    fn redraw(&mut self, state: &OrientationState) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", render_line(state, self.format));
        let _ = out.flush();
    }
}

pub fn render_line(state: &OrientationState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => format!(
            "orientation x={:.4} y={:.4} z={:.4}",
            state.x, state.y, state.z
        ),
        OutputFormat::Json => {
            let out = OrientationOutput {
                x: state.x,
                y: state.y,
                z: state.z,
                timestamp: now_unix_millis(),
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn now_unix_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_line_has_four_decimals() {
        let line = render_line(&OrientationState::new(20.0, 30.0, -10.5), OutputFormat::Pretty);
        assert_eq!(line, "orientation x=20.0000 y=30.0000 z=-10.5000");
    }

    #[test]
    fn json_line_carries_all_axes() {
        let line = render_line(&OrientationState::new(1.5, 2.0, 3.25), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["x"], 1.5);
        assert_eq!(value["y"], 2.0);
        assert_eq!(value["z"], 3.25);
        assert!(value["timestamp"].is_string());
    }
}
