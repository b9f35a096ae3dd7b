//! move-runner - remote-controlled batch move runner
//!
//! Serves the HTTP control surface, or runs a single config from the shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use move_runner::server::HttpServer;
use move_runner::services::render::render_failure;
use move_runner::utils::logging::init_tracing;
use move_runner::{MoveService, RunCommand, Settings};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "move-runner", version, about)]
struct Cli {
    /// YAML settings file; environment variables take precedence
    #[arg(short, long, env = "MOVE_RUNNER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP control surface (default)
    Serve,
    /// Run one named config and print the outcome
    Run {
        /// Config name, fetched as `<base>/<name>.json`
        name: String,
        /// Operator tag recorded with the run
        #[arg(long, default_value = "cli")]
        user: String,
        /// Roles held by the operator, comma separated
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,
    },
    /// Validate the settings and print them with secrets masked
    Check,
    /// Print version and build information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run_cli(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())
        .await
        .context("failed to load settings")?;
    init_tracing(&settings.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            HttpServer::new(&settings)?.start().await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { name, user, roles } => {
            let service = MoveService::from_settings(&settings)?;
            let command = RunCommand {
                name,
                user_tag: user,
                roles: roles.into_iter().collect(),
            };

            match service.run(command).await {
                Ok(report) => {
                    println!("{}", report.message);
                    if report.result.ok && !report.result.is_empty() {
                        Ok(ExitCode::SUCCESS)
                    } else {
                        Ok(ExitCode::FAILURE)
                    }
                }
                Err(e) => {
                    eprintln!("{}", render_failure(&e));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Check => {
            print!("{}", settings.redacted().to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            let info = move_runner::build_info();
            println!(
                "{} {} (git {}, built {})",
                move_runner::NAME,
                info.version,
                info.git_hash,
                info.build_time
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
