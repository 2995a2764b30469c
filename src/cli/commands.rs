//! Session wiring for the CLI

use crate::{
    config::Config,
    core::Dispatcher,
    utils::{process::ProcessRunner, prompt::ConsolePrompt},
};
use anyhow::Context;
use std::io::{self, IsTerminal};
use tracing::{info, instrument, warn};

/// Run the interactive menu on stdin/stdout
#[instrument(skip(config))]
pub fn execute_session(config: &Config) -> anyhow::Result<()> {
    let runner = ProcessRunner::new(config.debug, config.dry_run);

    if runner.is_dry_run() {
        info!("Dry run: commands are printed, not executed");
    } else {
        check_tools(&runner, config);
    }

    let dispatcher = Dispatcher::new(config, runner);
    let stdin = io::stdin();
    let hide_secrets = stdin.is_terminal();
    let mut prompter = ConsolePrompt::new(stdin.lock(), io::stdout(), hide_secrets);

    dispatcher
        .run_session(&mut prompter, &mut io::stdout())
        .context("Menu session aborted")?;

    Ok(())
}

/// Warn about tool binaries missing from PATH
fn check_tools(runner: &ProcessRunner, config: &Config) {
    for tool in [&config.tools.docker, &config.tools.kubectl] {
        if !runner.command_exists(tool) {
            warn!("'{}' was not found in PATH; operations using it will fail", tool);
        }
    }
}
