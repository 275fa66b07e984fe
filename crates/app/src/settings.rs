//! Settings for the budget planner binary.
//!
//! Values come from an optional `settings.toml` next to the binary, then
//! from `BUDGET__*` environment variables (e.g. `BUDGET__SERVER__PORT=8080`),
//! then from command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(name = "budget_planner")]
#[command(about = "Personal budget planner REST API")]
pub struct Args {
    /// Settings file, without or with its extension.
    #[arg(long, default_value = "settings")]
    pub config: String,

    /// Log level applied to every crate of the workspace.
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

fn default_level() -> String {
    String::from("info")
}

fn default_seed() -> bool {
    true
}

impl Settings {
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(&args.config).required(false))
            .add_source(Environment::with_prefix("BUDGET").separator("__"));
        let builder = match &args.level {
            Some(level) => builder.set_override("app.level", level.as_str())?,
            None => builder,
        };

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(raw: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn sqlite_server_settings() {
        let settings = parse(
            r#"
            [app]
            level = "debug"

            [server]
            port = 3000
            database = { sqlite = "budget.db" }
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        let server = settings.server.unwrap();
        assert_eq!(server.port, 3000);
        assert_eq!(server.bind, None);
        assert_eq!(server.database, Database::Sqlite("budget.db".to_string()));
        assert!(server.seed_defaults);
    }

    #[test]
    fn memory_database_and_defaults() {
        let settings = parse(
            r#"
            [server]
            port = 8000
            database = "memory"
            seed_defaults = false
            "#,
        );
        assert_eq!(settings.app.level, "info");
        let server = settings.server.unwrap();
        assert_eq!(server.database, Database::Memory);
        assert!(!server.seed_defaults);
    }

    #[test]
    fn server_section_is_optional() {
        let settings = parse("");
        assert!(settings.server.is_none());
    }
}
