use std::env;
use std::path::Path;

use dotenvy::dotenv;
use serde::Serialize;
use thiserror::Error;

use ca_connect::build_repository;
use ca_connect::domain::listing::{FilterKey, SortKey};
use ca_connect::dto::client::ClientViewQuery;
use ca_connect::forms::client::CaAddClientForm;
use ca_connect::models::config::EngineConfig;
use ca_connect::services::ServiceError;
use ca_connect::services::client as client_service;

const USAGE: &str = "usage:
  ca-connect list [search] [page] [limit]
  ca-connect view <filter> <sort> [search]
  ca-connect show <id>
  ca-connect stats
  ca-connect add '<json form>'";

/// Failures of a single command invocation.
#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed form: {0}")]
    MalformedForm(serde_json::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

type CliResult<T> = Result<T, CliError>;

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn parse_number(arg: Option<&String>, default: usize) -> CliResult<usize> {
    match arg {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| CliError::InvalidArgument(format!("`{value}` is not a number"))),
    }
}

fn parse_key<K>(arg: Option<&String>, default: &str) -> CliResult<K>
where
    K: std::str::FromStr,
    K::Err: std::fmt::Display,
{
    arg.map(String::as_str)
        .unwrap_or(default)
        .parse()
        .map_err(|e: K::Err| CliError::InvalidArgument(e.to_string()))
}

fn run(config: &EngineConfig, args: &[String]) -> CliResult<()> {
    let repo = build_repository(config).map_err(ServiceError::from)?;

    match args.first().map(String::as_str) {
        Some("list") => {
            let search = args.get(1).map(String::as_str).unwrap_or_default();
            let page = parse_number(args.get(2), 1)?;
            let limit = parse_number(args.get(3), config.default_page_size)?;
            print_json(&client_service::list_clients(&repo, page, limit, search)?)
        }
        Some("view") => {
            let filter: FilterKey = parse_key(args.get(1), "all")?;
            let sort: SortKey = parse_key(args.get(2), "name")?;
            let query = ClientViewQuery {
                search: args.get(3).cloned().unwrap_or_default(),
                filter,
                sort,
                ..ClientViewQuery::default()
            };
            print_json(&client_service::load_client_view(
                &repo,
                query,
                config.view_page_size,
            )?)
        }
        Some("show") => {
            let id = args.get(1).map(String::as_str).unwrap_or_default();
            print_json(&client_service::get_client(&repo, id)?)
        }
        Some("stats") => print_json(&client_service::dashboard_stats(&repo)?),
        Some("add") => {
            let raw = args.get(1).map(String::as_str).unwrap_or("{}");
            let form: CaAddClientForm =
                serde_json::from_str(raw).map_err(CliError::MalformedForm)?;
            print_json(&client_service::add_client(&repo, form)?)
        }
        _ => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match EngineConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading engine config: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&config, &args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
