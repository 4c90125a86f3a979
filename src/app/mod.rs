pub mod args;
pub mod gateway;
pub mod prompt;
mod setup;

pub use args::{AppArgs, Mode};

use crate::logging::Logger;
use anyhow::Result;
use gateway::Console;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { mode, build, width } = setup::prepare(args);

    let mut logger = Logger::stdout();
    gateway::run(
        mode,
        &build,
        width,
        Console {
            logger: &mut logger,
            screen: std::io::stdout(),
            input: tokio::io::stdin(),
        },
    )
    .await
}
