// tradenotex-core/src/schema.rs
// Schema initializer: collections and their secondary indexes.
//
// Both steps are safe to re-run: collections are only created when absent
// and createIndexes is a no-op for an index that already exists with the
// same specification.

use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use tracing::{debug, info};

use crate::error::Result;

pub const TRADES: &str = "Trades";
pub const IMPORTS: &str = "Imports";
pub const RISK_SETTINGS: &str = "RiskSettings";
pub const USERS: &str = "Users";

/// The four journal collections, in creation order.
pub const COLLECTIONS: [&str; 4] = [TRADES, IMPORTS, RISK_SETTINGS, USERS];

/// Declarative index specification: field names with direction
/// (1 ascending, -1 descending) and an optional uniqueness constraint.
#[derive(Debug, Clone, Copy)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: &'static [(&'static str, i32)],
    pub unique: bool,
}

/// Every secondary index the journal relies on.
pub const INDEX_SPECS: &[IndexSpec] = &[
    IndexSpec {
        collection: TRADES,
        keys: &[("ownerId", 1), ("executedAtUTC", -1)],
        unique: false,
    },
    IndexSpec {
        collection: TRADES,
        keys: &[("ownerId", 1), ("instrument", 1)],
        unique: false,
    },
    IndexSpec {
        collection: TRADES,
        keys: &[("ownerId", 1), ("setup", 1)],
        unique: false,
    },
    IndexSpec {
        collection: TRADES,
        keys: &[("executedAtUTC", -1)],
        unique: false,
    },
    IndexSpec {
        collection: TRADES,
        keys: &[("instrument", 1)],
        unique: false,
    },
    IndexSpec {
        collection: IMPORTS,
        keys: &[("ownerId", 1), ("createdAt", -1)],
        unique: false,
    },
    IndexSpec {
        collection: RISK_SETTINGS,
        keys: &[("ownerId", 1)],
        unique: false,
    },
    IndexSpec {
        collection: USERS,
        keys: &[("username", 1)],
        unique: true,
    },
    IndexSpec {
        collection: USERS,
        keys: &[("sessionToken", 1)],
        unique: false,
    },
];

impl IndexSpec {
    fn keys_document(&self) -> Document {
        let mut keys = Document::new();
        for (field, direction) in self.keys {
            keys.insert(field.to_string(), *direction);
        }
        keys
    }

    /// Driver-level index model for this specification.
    pub fn to_index_model(&self) -> IndexModel {
        let builder = IndexModel::builder().keys(self.keys_document());
        if self.unique {
            builder
                .options(IndexOptions::builder().unique(true).build())
                .build()
        } else {
            builder.build()
        }
    }

    /// Number of index specifications declared for one collection.
    pub fn count_for(collection: &str) -> usize {
        INDEX_SPECS
            .iter()
            .filter(|spec| spec.collection == collection)
            .count()
    }
}

/// Create any of the four collections that do not exist yet.
pub async fn ensure_collections(db: &Database) -> Result<()> {
    let existing = db.list_collection_names(None).await?;

    for name in COLLECTIONS {
        if existing.iter().any(|c| c == name) {
            debug!(collection = name, "collection already exists");
            continue;
        }
        db.create_collection(name, None).await?;
        info!(collection = name, "collection created");
    }
    Ok(())
}

/// Declare every index in `INDEX_SPECS` on its collection.
pub async fn ensure_indexes(db: &Database) -> Result<()> {
    for spec in INDEX_SPECS {
        let collection = db.collection::<Document>(spec.collection);
        collection.create_index(spec.to_index_model(), None).await?;
        debug!(collection = spec.collection, keys = ?spec.keys, "index ensured");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_collections_nine_indexes() {
        assert_eq!(COLLECTIONS.len(), 4);
        assert_eq!(INDEX_SPECS.len(), 9);
    }

    #[test]
    fn every_spec_targets_a_known_collection() {
        for spec in INDEX_SPECS {
            assert!(
                COLLECTIONS.contains(&spec.collection),
                "unknown collection {}",
                spec.collection
            );
        }
    }

    #[test]
    fn only_username_is_unique() {
        let unique: Vec<&IndexSpec> = INDEX_SPECS.iter().filter(|s| s.unique).collect();

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].collection, USERS);
        assert_eq!(unique[0].keys, &[("username", 1)]);
    }

    #[test]
    fn trades_carries_the_compound_owner_time_index() {
        let spec = &INDEX_SPECS[0];
        assert_eq!(spec.collection, TRADES);
        assert_eq!(spec.keys, &[("ownerId", 1), ("executedAtUTC", -1)]);
    }

    #[test]
    fn index_counts_per_collection() {
        assert_eq!(IndexSpec::count_for(TRADES), 5);
        assert_eq!(IndexSpec::count_for(IMPORTS), 1);
        assert_eq!(IndexSpec::count_for(RISK_SETTINGS), 1);
        assert_eq!(IndexSpec::count_for(USERS), 2);
    }

    #[test]
    fn keys_document_preserves_field_order_and_direction() {
        let doc = INDEX_SPECS[0].keys_document();

        let fields: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["ownerId", "executedAtUTC"]);
        assert_eq!(doc.get_i32("ownerId").unwrap(), 1);
        assert_eq!(doc.get_i32("executedAtUTC").unwrap(), -1);
    }

    #[test]
    fn unique_spec_builds_unique_index_model() {
        let spec = INDEX_SPECS
            .iter()
            .find(|s| s.unique)
            .expect("a unique spec exists");
        let model = spec.to_index_model();

        assert_eq!(model.options.and_then(|o| o.unique), Some(true));
    }
}
