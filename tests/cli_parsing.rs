//! CLI argument parsing tests.

use clap::Parser;
use quorum::cli::{Cli, Commands};

#[test]
fn test_decide_requires_task() {
    let result = Cli::try_parse_from(["quorum", "decide"]);
    assert!(result.is_err());
}

#[test]
fn test_decide_parses_task_and_people() {
    let cli = Cli::try_parse_from([
        "quorum", "decide", "--task", "task.yaml", "--people", "pool.yaml",
    ])
    .unwrap();

    match cli.command {
        Commands::Decide(args) => {
            assert_eq!(args.task.to_str().unwrap(), "task.yaml");
            assert_eq!(args.people.unwrap().to_str().unwrap(), "pool.yaml");
            assert!(args.config.is_none());
        }
        Commands::Status(_) => panic!("Expected decide subcommand"),
    }
    assert!(!cli.json);
}

#[test]
fn test_global_json_flag() {
    let cli = Cli::try_parse_from(["quorum", "status", "--json"]).unwrap();
    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Status(_)));
}

#[test]
fn test_status_accepts_config_path() {
    let cli = Cli::try_parse_from(["quorum", "status", "--config", "custom.yaml"]).unwrap();
    match cli.command {
        Commands::Status(args) => {
            assert_eq!(args.config.unwrap().to_str().unwrap(), "custom.yaml");
        }
        Commands::Decide(_) => panic!("Expected status subcommand"),
    }
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["quorum", "deploy"]).is_err());
}
