//! ftv - flight telemetry viewer CLI.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Command, ConfigAction};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Play { file, speed } => commands::play::handle_play(&file, speed),
        Command::Info { file } => commands::info::handle_info(&file),
        Command::Report { file, output } => commands::report::handle_report(&file, output),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
