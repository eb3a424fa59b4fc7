// tradenotex-core/src/lib.rs
// Library crate for the TradeNoteX database provisioning tool

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod model;
pub mod schema;
pub mod seed;
pub mod verify;

// Public exports
pub use config::SetupConfig;
pub use error::{Result, SetupError};
pub use model::{AclPermission, Comment, ImportRecord, RiskSettings, Trade, TradeEmotion, User};
pub use schema::IndexSpec;
pub use verify::VerifyReport;
