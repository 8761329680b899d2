use std::process::ExitCode;

use clap::Parser;
use payments_actions::{cli::Cli, execute, telemetry::setup_telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    setup_telemetry();

    let cli = Cli::parse();
    match execute(&cli.command).await {
        Ok(link) => {
            println!("{}", link);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
