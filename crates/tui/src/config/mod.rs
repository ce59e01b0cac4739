use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/fittakka.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timezone: String,
    pub recent_limit: usize,
    pub tips_limit: usize,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            recent_limit: engine::DEFAULT_RECENT_LIMIT,
            tips_limit: engine::DEFAULT_TIPS_LIMIT,
            log_file: "fittakka.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Time zone used to display expense dates.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .trim()
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

#[derive(Debug, Parser)]
#[command(name = "fittakka", about = "Take control of your finances")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override display timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override log level (e.g. debug, info, warn).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FITTAKKA").try_parsing(true));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    // Fail before the terminal is taken over.
    settings.tz()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["fittakka", "--config", "does/not/exist.toml"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_from(args(&[])).unwrap();
        assert_eq!(settings.recent_limit, 3);
        assert_eq!(settings.tips_limit, 3);
    }

    #[test]
    fn cli_overrides_win() {
        let settings = load_from(args(&[
            "--timezone",
            "Europe/Rome",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(settings.timezone, "Europe/Rome");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.tz().unwrap(), chrono_tz::Europe::Rome);
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let err = load_from(args(&["--timezone", "Mars/Olympus"])).unwrap_err();
        assert!(matches!(err, AppError::Timezone(_)));
    }
}
