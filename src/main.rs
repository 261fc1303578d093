use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use makemeqr::routes::commands::run_command;
use makemeqr::structs::cli_args::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let ok = run_command(cli.cmd, &mut std::io::stdout().lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
