use std::io::Write;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};

/// Steps slower than this are highlighted in yellow.
const SLOW: Duration = Duration::from_millis(100);
/// Steps slower than this are highlighted in red.
const VERY_SLOW: Duration = Duration::from_millis(500);

/// Installs the build logger: `HH:MM:SS target message`, filtered by `RUST_LOG` (default `info`).
/// Passing `--quiet` on the command line silences it.
pub fn init_logging() {
    let quiet = std::env::args().any(|arg| arg == "--quiet");

    let installed = Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(move |buf, record| {
            if quiet {
                return Ok(());
            }

            if record.target() == "banner" {
                return writeln!(buf, "{}", record.args());
            }

            let time = chrono::Local::now().format("%H:%M:%S").to_string();
            writeln!(
                buf,
                "{} {} {}",
                time.dimmed(),
                record.target().bold().bright_yellow(),
                record.args()
            )
        })
        .try_init();

    if installed.is_err() {
        log::debug!(target: "build", "logger already installed, keeping it");
    }
}

/// Formats a duration with the largest unit that keeps it readable: `840μs`, `12ms`, `3s`, `2m`.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();

    if secs >= 60 {
        format!("{}m", secs / 60)
    } else if secs > 0 {
        format!("{secs}s")
    } else if elapsed.as_millis() > 0 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{}μs", elapsed.as_micros())
    }
}

/// A duration coloured by how slow it is, for per-page and per-section timings.
pub fn elapsed(elapsed: Duration) -> ColoredString {
    let text = format_duration(elapsed);

    if elapsed >= VERY_SLOW {
        text.red()
    } else if elapsed >= SLOW {
        text.yellow()
    } else {
        text.dimmed()
    }
}

/// Prints a highlighted section title between build phases.
pub fn banner(title: &str) {
    log::info!(target: "banner", "");
    log::info!(target: "banner", "{}", format!(" {title} ").on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_readable_unit() {
        assert_eq!(format_duration(Duration::from_micros(42)), "42μs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(format_duration(Duration::from_millis(1_999)), "1s");
        assert_eq!(format_duration(Duration::from_secs(3)), "3s");
        assert_eq!(format_duration(Duration::from_secs(59)), "59s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m");
        assert_eq!(format_duration(Duration::from_secs(150)), "2m");
    }

    #[test]
    fn colours_follow_slowness() {
        assert_eq!(elapsed(Duration::from_millis(5)), "5ms".dimmed());
        assert_eq!(elapsed(Duration::from_millis(250)), "250ms".yellow());
        assert_eq!(elapsed(Duration::from_secs(3)), "3s".red());
    }
}
