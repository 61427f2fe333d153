use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use linkcollector::cli::{Cli, Commands};
use linkcollector::config::{LoggingConfig, init_config};
use linkcollector::interfaces::cli::run_cli_command;
use linkcollector::runtime::modes::run_server;
use linkcollector::system::logging::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match init_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Failed to load configuration:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let command = cli.command.unwrap_or(Commands::Serve);

    // 管理命令只输出 warn 及以上，避免干扰命令输出
    let logging_config = if command == Commands::Serve {
        config.logging.clone()
    } else {
        LoggingConfig {
            level: "warn".to_string(),
            ..config.logging.clone()
        }
    };
    let _guard = match init_logging(&logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {:#}", "Failed to initialize logging:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Commands::Serve => {
            if let Err(e) = run_server(&config).await {
                eprintln!("{} {:#}", "Server error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
        command => {
            if let Err(e) = run_cli_command(command, &config).await {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
