//! The main entry point for the onyx-gate application.
use anyhow::Result;

/// The main function of the application.
///
/// Runs a single gateway session on one thread, in interactive, test, or
/// self-test mode depending on the command-line arguments.
///
/// # Errors
///
/// Returns an error if the logger self test cannot deliver its lines.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    onyx_gate::app::launch().await
}
