//! Management commands against a temporary SQLite database

use linkcollector::cli::{Commands, ConfigCommands};
use linkcollector::config::{DatabaseConfig, StaticConfig};
use linkcollector::interfaces::cli::{CliError, run_cli_command};
use linkcollector::runtime::lifetime::startup::prepare_store;
use tempfile::TempDir;

fn sqlite_config(temp_dir: &TempDir) -> StaticConfig {
    let db_path = temp_dir.path().join("links.db");
    StaticConfig {
        database: DatabaseConfig {
            database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
            ..DatabaseConfig::default()
        },
        ..StaticConfig::default()
    }
}

fn add(url: &str, category: &str) -> Commands {
    Commands::Add {
        url: url.to_string(),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn test_commands_run_against_store() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    run_cli_command(Commands::InitSchema, &config).await.unwrap();
    run_cli_command(add("https://x.com/1", "x"), &config)
        .await
        .unwrap();
    run_cli_command(add("https://yt.example/v", "youtube"), &config)
        .await
        .unwrap();
    run_cli_command(add("https://x.com/2", "x"), &config)
        .await
        .unwrap();

    let listing = [
        Commands::List {
            category: None,
            json: false,
        },
        Commands::List {
            category: Some("x".to_string()),
            json: true,
        },
        Commands::List {
            category: Some("empty".to_string()),
            json: false,
        },
        Commands::Categories { by_count: true },
        Commands::Categories { by_count: false },
        Commands::Stats { json: true },
        Commands::Stats { json: false },
    ];
    for cmd in listing {
        run_cli_command(cmd.clone(), &config)
            .await
            .unwrap_or_else(|e| panic!("{:?} failed: {}", cmd, e));
    }

    let store = prepare_store(&config).await.unwrap();
    let links = store.list(None).await.unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].url, "https://x.com/2");

    run_cli_command(Commands::Remove { id: links[0].id }, &config)
        .await
        .unwrap();
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_duplicate_add_is_command_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    run_cli_command(add("https://x.com/dup", "x"), &config)
        .await
        .unwrap();
    let err = run_cli_command(add("https://x.com/dup", "website"), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::CommandError(_)), "{:?}", err);
    assert!(err.to_string().contains("https://x.com/dup"));
}

#[tokio::test]
async fn test_invalid_input_is_command_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    let err = run_cli_command(add("not a url", "x"), &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)), "{:?}", err);

    let err = run_cli_command(add("https://x.com/1", ""), &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)), "{:?}", err);

    let err = run_cli_command(Commands::Remove { id: 404 }, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)), "{:?}", err);

    let store = prepare_store(&config).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unusable_database_is_storage_error() {
    let config = StaticConfig {
        database: DatabaseConfig {
            database_url: "links.db".to_string(),
            backend: Some("cassandra".to_string()),
            ..DatabaseConfig::default()
        },
        ..StaticConfig::default()
    };

    let err = run_cli_command(Commands::Stats { json: false }, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::StorageError(_)), "{:?}", err);
}

#[tokio::test]
async fn test_serve_is_not_a_management_command() {
    let err = run_cli_command(Commands::Serve, &StaticConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[tokio::test]
async fn test_config_generate_needs_no_storage() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("generated.toml");
    let config = StaticConfig {
        database: DatabaseConfig {
            backend: Some("cassandra".to_string()),
            ..DatabaseConfig::default()
        },
        ..StaticConfig::default()
    };

    run_cli_command(
        Commands::Config {
            action: ConfigCommands::Generate {
                output_path: Some(output.display().to_string()),
                force: false,
            },
        },
        &config,
    )
    .await
    .unwrap();

    let written: StaticConfig = toml::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.server.port, 8080);
}
