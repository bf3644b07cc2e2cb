use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, preload::preload},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Preload(cmd)) => preload(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
