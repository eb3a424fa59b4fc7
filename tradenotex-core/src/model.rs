// tradenotex-core/src/model.rs
// Typed documents for the four journal collections.
//
// BSON field names follow the journal API's entities exactly, so anything
// this tool writes is readable by the application and vice versa. Fields
// the seeder never sets are optional and omitted from the document.

use std::collections::HashMap;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-principal read/write grant inside a document's `acl` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclPermission {
    pub read: bool,
    pub write: bool,
}

/// Access-control map: owner identifier -> permissions.
pub type Acl = HashMap<String, AclPermission>;

/// A single executed trade, with its comment thread embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "executedAtUTC")]
    pub executed_at_utc: DateTime,
    pub instrument: String,
    /// "buy" or "sell"
    pub side: String,
    #[serde(rename = "realizedPLEUR")]
    pub realized_pl_eur: f64,
    pub duration_min: Option<i32>,
    pub setup: String,
    pub emotion: Option<TradeEmotion>,
    pub notes: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// 0-100 scale: impulsive vs. planned entry
    pub entry_type: f64,
    pub greed: bool,
    pub youtube_link: String,
    pub comments: Vec<Comment>,
    pub daily_goal_reached: bool,
    pub daily_loss_reached: bool,
    /// "winner", "loser" or "protection"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_status: Option<String>,
    pub owner_id: String,
    pub acl: Acl,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Mood snapshot attached to a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeEmotion {
    pub mood: String,
    pub arousal: String,
}

/// A journal comment embedded in its parent trade. Comments have no
/// lifecycle of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    /// Data URI of an attached chart screenshot; empty when none
    pub screenshot: String,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

impl Comment {
    /// Fresh comment stamped now, the way the journal app creates them.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Comment {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            text: text.into(),
            screenshot: String::new(),
            created_at: DateTime::now(),
            ai_analysis: None,
        }
    }
}

/// Application login. `username` carries a unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub session_token: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Daily profit goal and loss cap for one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSettings {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub owner_id: String,
    #[serde(rename = "goalEUR")]
    pub goal_eur: f64,
    #[serde(rename = "maxLossEUR")]
    pub max_loss_eur: f64,
    pub acl: Acl,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// One statement import: where a batch of trades came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub statement_date: DateTime,
    pub source: String,
    pub count: i32,
    pub owner_id: String,
    pub acl: Acl,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Single-owner ACL granting full access, as the seeder stamps on every
/// owned document.
pub fn owner_acl(owner: &str) -> Acl {
    let mut acl = HashMap::new();
    acl.insert(
        owner.to_string(),
        AclPermission {
            read: true,
            write: true,
        },
    );
    acl
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample_trade() -> Trade {
        Trade {
            id: None,
            executed_at_utc: DateTime::now(),
            instrument: "TECH100".to_string(),
            side: "sell".to_string(),
            realized_pl_eur: 4.84,
            duration_min: None,
            setup: "SMC".to_string(),
            emotion: None,
            notes: String::new(),
            tags: Vec::new(),
            import_id: None,
            account_id: None,
            entry_type: 50.0,
            greed: false,
            youtube_link: String::new(),
            comments: Vec::new(),
            daily_goal_reached: false,
            daily_loss_reached: false,
            trade_status: None,
            owner_id: "demo_user".to_string(),
            acl: owner_acl("demo_user"),
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    #[test]
    fn trade_serializes_with_journal_field_names() {
        let doc = bson::to_document(&sample_trade()).unwrap();

        assert!(doc.contains_key("executedAtUTC"));
        assert!(doc.contains_key("realizedPLEUR"));
        assert!(doc.contains_key("dailyGoalReached"));
        assert!(doc.contains_key("dailyLossReached"));
        assert!(doc.contains_key("youtubeLink"));
        assert!(doc.contains_key("ownerId"));
        assert_eq!(doc.get_f64("entryType").unwrap(), 50.0);
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let doc = bson::to_document(&sample_trade()).unwrap();

        // No _id before insert, no fields the seeder never writes
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("importId"));
        assert!(!doc.contains_key("accountId"));
        assert!(!doc.contains_key("tradeStatus"));

        // durationMin and emotion are explicit nulls, matching the journal app
        assert!(doc.get("durationMin").unwrap().as_null().is_some());
        assert!(doc.get("emotion").unwrap().as_null().is_some());
    }

    #[test]
    fn trade_round_trips_through_bson() {
        let mut trade = sample_trade();
        trade.id = Some(ObjectId::new());
        trade.comments.push(Comment::new("demo_user", "solid entry"));

        let doc = bson::to_document(&trade).unwrap();
        let back: Trade = bson::from_document(doc).unwrap();

        assert_eq!(back.id, trade.id);
        assert_eq!(back.comments.len(), 1);
        assert_eq!(back.comments[0].text, "solid entry");
    }

    #[test]
    fn risk_settings_uses_eur_suffixed_names() {
        let settings = RiskSettings {
            id: None,
            owner_id: "demo_user".to_string(),
            goal_eur: 2.0,
            max_loss_eur: 2.0,
            acl: owner_acl("demo_user"),
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };

        let doc = bson::to_document(&settings).unwrap();
        assert_eq!(doc.get_f64("goalEUR").unwrap(), 2.0);
        assert_eq!(doc.get_f64("maxLossEUR").unwrap(), 2.0);
    }

    #[test]
    fn comment_new_generates_distinct_ids() {
        let a = Comment::new("demo_user", "first");
        let b = Comment::new("demo_user", "second");

        assert_ne!(a.id, b.id);
        assert!(a.ai_analysis.is_none());

        let doc = bson::to_document(&a).unwrap();
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("aiAnalysis"));
    }

    #[test]
    fn owner_acl_grants_full_access_to_one_principal() {
        let acl = owner_acl("demo_user");

        assert_eq!(acl.len(), 1);
        let grant = acl.get("demo_user").unwrap();
        assert!(grant.read && grant.write);
    }
}
