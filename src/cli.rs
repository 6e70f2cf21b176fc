//! Command-line adapter over the library (thin layer)

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use flagkit::config::{self, Config, LogLevel, SourceKind};
use flagkit::countries::{self, Country, DEFAULT_SEARCH_LIMIT};
use flagkit::{logging, FlagError, FlagResolver, Result};

#[derive(Debug, Parser)]
#[command(name = "flagkit", version, about = "Country lookup and flag SVGs")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read and write settings at this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every country
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one country by ISO code
    Show { code: String },
    /// Search names and codes, best matches first
    Search {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Look up a country by nationality (e.g. "swiss")
    Nationality { term: String },
    /// Print flag SVG markup for a code
    Svg {
        code: String,
        /// Override the configured artwork source
        #[arg(long, value_enum)]
        source: Option<SourceKind>,
    },
    /// Resolve several codes concurrently and report how many succeeded
    Preload {
        #[arg(required = true)]
        codes: Vec<String>,
        #[arg(long, value_enum)]
        source: Option<SourceKind>,
    },
    /// Show or update the saved settings
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
        /// Change the saved log level
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,
    },
}

pub async fn run(cli: Cli, mut settings: Config) -> Result<ExitCode> {
    debug!(command = ?cli.command, "Running command");
    let Cli {
        config: config_file,
        command,
        ..
    } = cli;

    match command {
        Command::List { json } => {
            print_countries(countries::all().iter(), json)?;
        }
        Command::Show { code } => match countries::get_by_code(&code) {
            Some(country) => println!("{}", describe(country)),
            None => {
                eprintln!("Unknown country code: {code}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Search { query, limit, json } => {
            let results = countries::search(&query, limit);
            if results.is_empty() && !json {
                eprintln!("No countries match '{query}'");
                return Ok(ExitCode::FAILURE);
            }
            print_countries(results.into_iter(), json)?;
        }
        Command::Nationality { term } => match countries::get_by_nationality(&term) {
            Some(country) => println!("{}", describe(country)),
            None => {
                eprintln!("Unknown nationality: {term}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Svg { code, source } => {
            let resolver = resolver_for(&settings, source)?;
            let svg = resolver.resolve(&code).await?;
            println!("{svg}");
        }
        Command::Preload { codes, source } => {
            let resolver = resolver_for(&settings, source)?;
            let resolved = resolver.preload(&codes).await;
            println!("{resolved}/{} flags resolved", codes.len());
            if resolved < codes.len() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Config { save, log_level } => {
            if let Some(level) = log_level {
                info!(?level, "Log level selected");
                settings.log_level = level;
                logging::set_verbosity(level);
            }
            let target = settings_path(config_file.as_deref());
            if save || log_level.is_some() {
                let path = target
                    .as_deref()
                    .ok_or_else(|| FlagError::Config("No config directory on this platform".into()))?;
                config::save_to(&settings, path)?;
            }
            if let Some(path) = &target {
                println!("# {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn resolver_for(settings: &Config, source: Option<SourceKind>) -> Result<FlagResolver> {
    match source {
        Some(source) => FlagResolver::from_config(&Config {
            source,
            ..settings.clone()
        }),
        None => FlagResolver::from_config(settings),
    }
}

/// The file `--config` names, else the default location.
fn settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(config::config_path)
}

fn describe(country: &Country) -> String {
    match country.emoji {
        Some(emoji) => format!("{} {} {}", emoji, country.iso, country.name),
        None => format!("   {} {}", country.iso, country.name),
    }
}

fn print_countries<'a>(rows: impl Iterator<Item = &'a Country>, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_countries(&mut out, rows, json)
}

fn write_countries<'a>(
    out: &mut impl Write,
    rows: impl Iterator<Item = &'a Country>,
    json: bool,
) -> Result<()> {
    if json {
        let rows: Vec<&Country> = rows.collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        for country in rows {
            writeln!(out, "{}", describe(country))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(codes: &[&str], json: bool) -> String {
        let rows = codes.iter().filter_map(|code| countries::get_by_code(code));
        let mut out = Vec::new();
        write_countries(&mut out, rows, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn describe_with_emoji() {
        let fr = countries::get_by_code("FR").unwrap();
        assert_eq!(describe(fr), "🇫🇷 FR France");
    }

    #[test]
    fn describe_pads_missing_emoji() {
        let xk = countries::get_by_code("XK").unwrap();
        assert_eq!(describe(xk), "   XK Kosovo");
    }

    #[test]
    fn plain_listing_is_one_line_per_country() {
        assert_eq!(render(&["FR", "XK"], false), "🇫🇷 FR France\n   XK Kosovo\n");
        assert_eq!(render(&[], false), "");
    }

    #[test]
    fn json_listing_omits_missing_emoji() {
        let out = render(&["US", "XK"], true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["iso"], "US");
        assert_eq!(rows[0]["name"], "United States");
        assert_eq!(rows[0]["emoji"], "🇺🇸");
        assert_eq!(rows[1]["iso"], "XK");
        assert!(rows[1].get("emoji").is_none());
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn explicit_settings_path_wins() {
        let path = Path::new("/tmp/custom/flagkit.json");
        assert_eq!(settings_path(Some(path)), Some(path.to_path_buf()));
        assert_eq!(settings_path(None), config::config_path());
    }

    #[tokio::test]
    async fn config_command_saves_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let path_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["flagkit", "--config", path_arg, "config", "--log-level", "debug"]);
        run(cli, Config::default()).await.unwrap();

        let saved = config::load_from(&path).unwrap();
        assert_eq!(saved.log_level, LogLevel::Debug);
    }

    #[tokio::test]
    async fn config_save_flag_writes_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Config {
            fetch_timeout_ms: 1_234,
            ..Config::default()
        };
        let cli = Cli::parse_from(["flagkit", "config", "--save", "--config", path.to_str().unwrap()]);
        run(cli, settings).await.unwrap();

        assert_eq!(config::load_from(&path).unwrap().fetch_timeout_ms, 1_234);
    }
}
