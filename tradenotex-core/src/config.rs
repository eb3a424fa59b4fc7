// tradenotex-core/src/config.rs
// Connection settings come from flags or the environment, never from source.

use crate::error::{Result, SetupError};

/// Database name used when neither `--db` nor `TRADENOTEX_DB` is given.
pub const DEFAULT_DATABASE: &str = "tradenotex";

/// Environment variable holding the MongoDB connection string.
pub const URI_ENV_VAR: &str = "MONGODB_URI";

/// Environment variable overriding the target database name.
pub const DATABASE_ENV_VAR: &str = "TRADENOTEX_DB";

#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub connection_string: String,
    pub database: String,
}

impl SetupConfig {
    /// Resolve settings with CLI flags taking precedence over the environment.
    /// A `.env` file is honored if present. There is no default connection
    /// string: a run without one is a configuration error.
    pub fn resolve(uri: Option<String>, database: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let connection_string = uri
            .or_else(|| std::env::var(URI_ENV_VAR).ok())
            .ok_or_else(|| {
                SetupError::Config(format!(
                    "no connection string: pass --uri or set {}",
                    URI_ENV_VAR
                ))
            })?;

        let database = database
            .or_else(|| std::env::var(DATABASE_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(SetupConfig {
            connection_string,
            database,
        })
    }

    /// Resolve from the environment alone.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }
}
