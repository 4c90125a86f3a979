//! The gateway session: startup, banner, wait, shutdown.
use super::args::Mode;
use super::prompt::{self, Input};
use crate::logging::{Clock, LineSink, Logger};
use crate::screen::{self, BuildInfo};
use anyhow::Result;
use std::io::Write;
use tokio::io::AsyncRead;
use tracing::{info, warn};

pub const STARTING: &str = "🖤 ONYX-GATE PBA starting...";
pub const TAGLINE: &str = "The elegant gateway to unbreakable security";
pub const TEST_MODE_START: &str = "Test mode: displaying message and exiting";
pub const TEST_MODE_DONE: &str = "Test completed successfully";
pub const DISPLAYING: &str = "Displaying main interface";
pub const INPUT_RECEIVED: &str = "User pressed Enter, continuing...";
pub const SIMULATION_DONE: &str = "PBA simulation completed";
pub const PRODUCTION_NOTE: &str = "In production: drive would be unlocked and system rebooted";
pub const SHUTTING_DOWN: &str = "🛑 ONYX-GATE PBA shutting down";

/// Where a session reads from and writes to.
pub struct Console<'a, S: LineSink, C: Clock, W: Write, R: AsyncRead + Unpin> {
    pub logger: &'a mut Logger<S, C>,
    pub screen: W,
    pub input: R,
}

/// Runs one gateway session in `mode`.
///
/// Console failures are reported as diagnostics and never end the session.
///
/// # Errors
///
/// Only the logger self test can fail, when its lines can't be delivered.
pub async fn run<S, C, W, R>(
    mode: Mode,
    build: &BuildInfo,
    width: u16,
    console: Console<'_, S, C, W, R>,
) -> Result<()>
where
    S: LineSink,
    C: Clock,
    W: Write,
    R: AsyncRead + Unpin,
{
    let Console {
        logger,
        screen: mut out,
        input,
    } = console;

    logger.log_or_warn(STARTING);
    logger.log_or_warn(TAGLINE);

    match mode {
        Mode::SelfTest => {
            info!("running logger self test");
            logger.self_test()?;
        }
        Mode::Test { pause } => {
            logger.log_or_warn(TEST_MODE_START);
            draw_banner(&mut out, build, width);
            if let Err(e) = screen::render_test_notice(&mut out) {
                warn!("failed to print test notice: {}", e);
            }
            tokio::time::sleep(pause).await;
            logger.log_or_warn(TEST_MODE_DONE);
        }
        Mode::Interactive => {
            logger.log_or_warn(DISPLAYING);
            draw_banner(&mut out, build, width);

            if let Input::Line(_) = prompt::wait_for_enter(input).await {
                logger.log_or_warn(INPUT_RECEIVED);
            }

            logger.log_or_warn(SIMULATION_DONE);
            logger.log_or_warn(PRODUCTION_NOTE);
            logger.log_or_warn(SHUTTING_DOWN);
        }
    }

    Ok(())
}

fn draw_banner(out: &mut impl Write, build: &BuildInfo, width: u16) {
    if let Err(e) = screen::render_banner(out, build, width) {
        warn!("failed to draw banner: {}", e);
    }
}
