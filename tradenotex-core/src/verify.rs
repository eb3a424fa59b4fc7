// tradenotex-core/src/verify.rs
// Post-run checks over the seeded database. Each check mirrors an
// observable postcondition of a complete provisioning run.

use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::demo;
use crate::error::Result;
use crate::model::User;
use crate::schema;

/// Outcome of a single postcondition check.
#[derive(Debug)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(name: &'static str, passed: bool, detail: String) -> Self {
        Check {
            name,
            passed,
            detail,
        }
    }
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub checks: Vec<Check>,
}

impl VerifyReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Run every postcondition check against the database.
pub async fn run(db: &Database) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    let trades = db.collection::<Document>(schema::TRADES);

    let trade_count = trades.count_documents(doc! {}, None).await?;
    report.checks.push(Check::new(
        "trade count",
        trade_count == demo::DEMO_TRADE_COUNT as u64,
        format!(
            "{} documents (expected {})",
            trade_count,
            demo::DEMO_TRADE_COUNT
        ),
    ));

    let users = db.collection::<User>(schema::USERS);
    let demo_filter = doc! { "username": demo::DEMO_USERNAME };
    let demo_users = users.count_documents(demo_filter.clone(), None).await?;
    report.checks.push(Check::new(
        "demo user",
        demo_users == 1,
        format!("{} user(s) named \"{}\"", demo_users, demo::DEMO_USERNAME),
    ));

    let hash_present = users
        .find_one(demo_filter, None)
        .await?
        .is_some_and(|user| !user.password_hash.is_empty());
    report.checks.push(Check::new(
        "password hash",
        hash_present,
        if hash_present {
            "non-empty".to_string()
        } else {
            "missing or empty".to_string()
        },
    ));

    let owner_filter = doc! { "ownerId": demo::DEMO_OWNER };
    let risk_count = db
        .collection::<Document>(schema::RISK_SETTINGS)
        .count_documents(owner_filter.clone(), None)
        .await?;
    report.checks.push(Check::new(
        "risk settings",
        risk_count == 1,
        format!("{} document(s) owned by {}", risk_count, demo::DEMO_OWNER),
    ));

    let import_count = db
        .collection::<Document>(schema::IMPORTS)
        .count_documents(owner_filter, None)
        .await?;
    report.checks.push(Check::new(
        "import record",
        import_count == 1,
        format!("{} document(s) owned by {}", import_count, demo::DEMO_OWNER),
    ));

    let commented = trades
        .count_documents(
            doc! {
                "executedAtUTC": demo::commented_trade_executed_at(),
                "comments": { "$size": 2 },
            },
            None,
        )
        .await?;
    report.checks.push(Check::new(
        "patched trade",
        commented == 1,
        format!("{} trade(s) with a two-comment thread", commented),
    ));

    let uncommented = trades
        .count_documents(doc! { "comments": { "$size": 0 } }, None)
        .await?;
    let expected_uncommented = trade_count.saturating_sub(1);
    report.checks.push(Check::new(
        "remaining trades",
        uncommented == expected_uncommented,
        format!(
            "{} trade(s) without comments (expected {})",
            uncommented, expected_uncommented
        ),
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_passes_only_when_every_check_does() {
        let mut report = VerifyReport::default();
        report
            .checks
            .push(Check::new("a", true, "ok".to_string()));
        assert!(report.all_passed());
        assert_eq!(report.failed_count(), 0);

        report
            .checks
            .push(Check::new("b", false, "off by one".to_string()));
        assert!(!report.all_passed());
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn empty_report_passes_vacuously() {
        assert!(VerifyReport::default().all_passed());
    }
}
