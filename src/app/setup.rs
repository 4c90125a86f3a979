//! Resolves the run mode, diagnostics and terminal width before a session.
use super::args::{AppArgs, Mode};
use crate::screen::{self, BuildInfo};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default diagnostic filter when `RUST_LOG` is unset.
const DEFAULT_DIAGNOSTICS: &str = "warn";

/// Everything the gateway needs to run, resolved from the command line and
/// the environment.
pub struct PreparedApp {
    /// Which path to take.
    pub mode: Mode,
    /// Version and build date shown on the banner.
    pub build: BuildInfo,
    /// Columns to centre the banner in.
    pub width: u16,
}

/// Turns the parsed arguments into a ready-to-run gateway.
///
/// Diagnostics are installed first so the mode and width decisions can be
/// traced.
pub fn prepare(args: AppArgs) -> PreparedApp {
    configure_logging();

    let mode = args.mode();
    let width = screen::terminal_width();
    debug!(?mode, width, "gateway prepared");

    PreparedApp {
        mode,
        build: BuildInfo::current(),
        width,
    }
}

/// Installs the diagnostic subscriber.
///
/// Diagnostics go to stderr so stdout carries only the console log and
/// banner. `RUST_LOG` overrides the default filter.
fn configure_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIAGNOSTICS));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
