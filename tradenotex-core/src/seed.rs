// tradenotex-core/src/seed.rs
// Demo data loader and comment patcher.
//
// Inserts are sequential and non-transactional: a failure mid-run leaves
// whatever was already written in place, matching the provisioning script
// this tool replaces.

use mongodb::bson::{self, doc, Document};
use mongodb::Database;
use tracing::{info, warn};

use crate::demo;
use crate::error::Result;
use crate::model::{ImportRecord, RiskSettings, Trade, User};
use crate::schema;

/// Insert the demo statement into `Trades`. Returns the number of
/// documents written.
pub async fn insert_demo_trades(db: &Database) -> Result<usize> {
    let trades = demo::demo_trades();
    let result = db
        .collection::<Trade>(schema::TRADES)
        .insert_many(&trades, None)
        .await?;
    info!(count = result.inserted_ids.len(), "demo trades inserted");
    Ok(result.inserted_ids.len())
}

/// Insert the demo login. Fails with a duplicate-key error when a user
/// named "demo" already exists (the username index is unique).
pub async fn insert_demo_user(db: &Database) -> Result<()> {
    db.collection::<User>(schema::USERS)
        .insert_one(demo::demo_user(), None)
        .await?;
    info!(username = demo::DEMO_USERNAME, "demo user inserted");
    Ok(())
}

pub async fn insert_demo_risk_settings(db: &Database) -> Result<()> {
    db.collection::<RiskSettings>(schema::RISK_SETTINGS)
        .insert_one(demo::demo_risk_settings(), None)
        .await?;
    info!("demo risk settings inserted");
    Ok(())
}

pub async fn insert_demo_import_record(db: &Database, trade_count: usize) -> Result<()> {
    db.collection::<ImportRecord>(schema::IMPORTS)
        .insert_one(demo::demo_import_record(trade_count), None)
        .await?;
    info!(trade_count, "demo import record inserted");
    Ok(())
}

/// Overwrite the comments of the trade executed at the demo comment
/// timestamp with the two-element demo thread.
///
/// Returns `false` (without error) when no trade matches - a missing
/// target is logged and skipped, not treated as a failure.
pub async fn attach_demo_comments(db: &Database) -> Result<bool> {
    let trades = db.collection::<Document>(schema::TRADES);
    let filter = doc! { "executedAtUTC": demo::commented_trade_executed_at() };

    let Some(target) = trades.find_one(filter, None).await? else {
        warn!("no trade found at the demo comment timestamp, skipping comment patch");
        return Ok(false);
    };

    let id = target.get_object_id("_id")?;
    let comments = bson::to_bson(&demo::demo_comments())?;
    trades
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "comments": comments } },
            None,
        )
        .await?;
    info!(trade_id = %id, "demo comments attached");
    Ok(true)
}
