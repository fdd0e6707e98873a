use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process-wide configuration, resolved once at startup.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:todos.sqlite".to_string(),
            port: 8080,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `DATABASE_URL` / `PORT` / `LOGLEVEL` from the
    /// environment. `main` reads the dotenv file before touching `CONFIG`,
    /// so `.env` entries land here too.
    pub fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["DATABASE_URL", "PORT", "LOGLEVEL"]))
            .extract()
            .unwrap_or_else(|e| {
                eprintln!("invalid configuration ({e}); falling back to defaults");
                Config::default()
            })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
