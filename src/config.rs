use std::time::Duration;

use clap::Parser;

use crate::pattern::Pattern;
use crate::view::BASE_CELL_SIZE;
use crate::view::ZOOM_SPEED;

/// Conway's Game of Life on an unbounded grid, in the terminal.
///
/// Click a cell to toggle it, drag to pan, scroll to zoom. Space starts and pauses, `n` steps
/// once, `c` clears, `r` restores the starting pattern, `g` toggles grid lines, `0` recenters the
/// view and `q` quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "lifeview", version, about, long_about)]
pub struct Config {
    /// Starting pattern: glider, blinker, block, r-pentomino or gosper-gun
    #[arg(short, long, default_value_t = Pattern::Glider)]
    pub pattern: Pattern,

    /// Frames (and generations, while running) per second
    #[arg(
        short,
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    pub fps: u32,

    /// Relative zoom change of one scroll step, greater than 0
    #[arg(short, long, default_value_t = ZOOM_SPEED, value_parser = parse_zoom_speed)]
    pub zoom_speed: f64,

    /// Side of a cell in braille dots at zoom 1
    #[arg(
        short,
        long,
        default_value_t = BASE_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cell_size: u32,

    /// Start the simulation right away instead of paused
    #[arg(short, long)]
    pub run: bool,
}

impl Config {
    /// Time budget of one pass of the control loop
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }
}

/// A zoom speed of zero or less would stop zooming or turn it around
fn parse_zoom_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;

    if !speed.is_finite() || speed <= 0.0 {
        return Err(format!("{speed} is not a positive number"));
    }

    Ok(speed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["lifeview"]).unwrap();

        assert_eq!(config.pattern, Pattern::Glider);
        assert_eq!(config.fps, 30);
        assert_eq!(config.zoom_speed, 0.1);
        assert_eq!(config.cell_size, 10);
        assert!(!config.run);
    }

    #[test]
    fn parses_flags() {
        let config =
            Config::try_parse_from(["lifeview", "--pattern", "gosper-gun", "-f", "60", "--run"])
                .unwrap();

        assert_eq!(config.pattern, Pattern::GosperGun);
        assert_eq!(config.frame_time(), Duration::from_secs_f64(1.0 / 60.0));
        assert!(config.run);
    }

    #[test]
    fn rejects_unknown_pattern() {
        assert!(Config::try_parse_from(["lifeview", "-p", "pulsar"]).is_err());
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Config::try_parse_from(["lifeview", "--fps", "0"]).is_err());
    }

    #[test]
    fn rejects_zero_cell_size() {
        assert!(Config::try_parse_from(["lifeview", "--cell-size", "0"]).is_err());
    }

    #[test]
    fn rejects_non_positive_zoom_speed() {
        assert!(Config::try_parse_from(["lifeview", "--zoom-speed", "0"]).is_err());
        assert!(Config::try_parse_from(["lifeview", "--zoom-speed=-1"]).is_err());
    }

    #[test]
    fn rejects_non_finite_zoom_speed() {
        assert!(Config::try_parse_from(["lifeview", "--zoom-speed", "NaN"]).is_err());
        assert!(Config::try_parse_from(["lifeview", "--zoom-speed", "inf"]).is_err());
    }

    #[test]
    fn accepts_custom_zoom() {
        let config = Config::try_parse_from(["lifeview", "-z", "0.5", "-c", "4"]).unwrap();

        assert_eq!(config.zoom_speed, 0.5);
        assert_eq!(config.cell_size, 4);
    }
}
