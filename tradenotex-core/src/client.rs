// tradenotex-core/src/client.rs
// MongoDB connection bootstrap

use mongodb::{bson::doc, Client, Database};
use tracing::debug;

use crate::config::SetupConfig;
use crate::error::Result;

/// Connect and return a handle to the configured database.
///
/// Runs a `ping` before returning so that bad credentials or an unreachable
/// host fail here instead of halfway through schema setup.
pub async fn connect(config: &SetupConfig) -> Result<Database> {
    let client = Client::with_uri_str(&config.connection_string).await?;
    let db = client.database(&config.database);
    db.run_command(doc! { "ping": 1 }, None).await?;
    debug!(database = %config.database, "connected");
    Ok(db)
}
