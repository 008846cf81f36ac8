use loom_notify::EmailConfig;
use loom_sheets::SheetsConfig;

/// Server configuration loaded from environment variables.
///
/// Resolved once at startup; handlers and adapters never read the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// Spreadsheet location and credentials file.
    pub sheets: SheetsConfig,
    /// SMTP relay and sender account.
    pub email: EmailConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var | Default   |
    /// |---------|-----------|
    /// | `HOST`  | `0.0.0.0` |
    /// | `PORT`  | `5001`    |
    ///
    /// See [`SheetsConfig::from_env`] and [`EmailConfig::from_env`] for the
    /// adapter variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".into())
            .parse()
            .expect("PORT must be a valid u16");

        Self {
            host,
            port,
            sheets: SheetsConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
