// tradenotex-core/src/demo.rs
// The literal demo dataset: 12 trades from two sessions on TECH100, one
// login, one risk profile and the import record they came from. Values are
// kept byte-for-byte from the journal's demo statement, Portuguese comment
// texts included.

use chrono::{TimeZone, Utc};
use mongodb::bson::DateTime;

use crate::model::{owner_acl, Comment, ImportRecord, RiskSettings, Trade, User};

pub const DEMO_OWNER: &str = "demo_user";
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_EMAIL: &str = "demo@tradenotex.com";
pub const DEMO_INSTRUMENT: &str = "TECH100";
pub const DEMO_SETUP: &str = "SMC";

/// Number of trades in the demo statement.
pub const DEMO_TRADE_COUNT: usize = 12;

/// bcrypt hash of "demo123"
const DEMO_PASSWORD_HASH: &str = "$2a$11$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LeZeUfkZMBs9kYZJ6";

/// Placeholder chart image embedded in the second demo comment.
const DEMO_SCREENSHOT_DATA_URI: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI0MDAiIGhlaWdodD0iMjAwIj48cmVjdCBmaWxsPSIjMWIyMzMwIiB3aWR0aD0iNDAwIiBoZWlnaHQ9IjIwMCIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkeT0iLjNlbSIgZmlsbD0iIzljYTNhZiIgZm9udC1mYW1pbHk9Im1vbm9zcGFjZSI+W0dyw6ZpY28gZGUgZXhlbXBsb108L3RleHQ+PC9zdmc+";

/// Execution timestamp of the trade the demo comments attach to.
pub fn commented_trade_executed_at() -> DateTime {
    utc(2025, 8, 7, 13, 46, 41)
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime {
    DateTime::from_chrono(
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap(),
    )
}

/// The demo statement: execution time, side and realized P/L per trade.
/// Everything else is identical across the twelve.
const DEMO_EXECUTIONS: [(u32, u32, u32, u32, &str, f64); DEMO_TRADE_COUNT] = [
    (7, 13, 46, 41, "sell", 4.84),
    (7, 13, 50, 13, "sell", 0.0),
    (7, 13, 56, 21, "buy", -1.61),
    (7, 14, 5, 20, "buy", 0.0),
    (7, 14, 24, 58, "sell", -3.15),
    (7, 14, 45, 24, "sell", 0.0),
    (7, 16, 40, 59, "buy", 5.41),
    (7, 17, 4, 11, "buy", 0.0),
    (7, 17, 37, 35, "sell", -2.73),
    (8, 10, 2, 6, "buy", -0.37),
    (8, 10, 53, 47, "sell", 0.02),
    (8, 12, 50, 7, "buy", 1.17),
];

pub fn demo_trades() -> Vec<Trade> {
    let now = DateTime::now();
    DEMO_EXECUTIONS
        .iter()
        .map(|&(day, hour, min, sec, side, realized_pl_eur)| Trade {
            id: None,
            executed_at_utc: utc(2025, 8, day, hour, min, sec),
            instrument: DEMO_INSTRUMENT.to_string(),
            side: side.to_string(),
            realized_pl_eur,
            duration_min: None,
            setup: DEMO_SETUP.to_string(),
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
            owner_id: DEMO_OWNER.to_string(),
            acl: owner_acl(DEMO_OWNER),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

pub fn demo_user() -> User {
    let now = DateTime::now();
    User {
        id: None,
        username: DEMO_USERNAME.to_string(),
        email: DEMO_EMAIL.to_string(),
        password_hash: DEMO_PASSWORD_HASH.to_string(),
        session_token: format!("demo_session_token_{}", Utc::now().timestamp()),
        created_at: now,
        updated_at: now,
    }
}

pub fn demo_risk_settings() -> RiskSettings {
    let now = DateTime::now();
    RiskSettings {
        id: None,
        owner_id: DEMO_OWNER.to_string(),
        goal_eur: 2.0,
        max_loss_eur: 2.0,
        acl: owner_acl(DEMO_OWNER),
        created_at: now,
        updated_at: now,
    }
}

pub fn demo_import_record(trade_count: usize) -> ImportRecord {
    let now = DateTime::now();
    ImportRecord {
        id: None,
        name: "Importação Demo - Trading212".to_string(),
        statement_date: utc(2025, 8, 8, 0, 0, 0),
        source: "trading212".to_string(),
        count: trade_count as i32,
        owner_id: DEMO_OWNER.to_string(),
        acl: owner_acl(DEMO_OWNER),
        created_at: now,
        updated_at: now,
    }
}

/// The two comments attached to the trade executed at
/// [`commented_trade_executed_at`].
pub fn demo_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "comment_1".to_string(),
            author: DEMO_OWNER.to_string(),
            text: "Entrada baseada em rompimento da resistência. Volume estava aumentando."
                .to_string(),
            screenshot: String::new(),
            created_at: utc(2025, 8, 7, 14, 0, 0),
            ai_analysis: Some(
                "Excelente observação! O rompimento de resistência com aumento de volume é um \
                 sinal técnico forte. Para melhorar, considere verificar o RSI para confirmar se \
                 não está sobrecomprado."
                    .to_string(),
            ),
        },
        Comment {
            id: "comment_2".to_string(),
            author: DEMO_OWNER.to_string(),
            text: "Setup clássico de reversão. Identifiquei divergência no RSI.".to_string(),
            screenshot: DEMO_SCREENSHOT_DATA_URI.to_string(),
            created_at: utc(2025, 8, 7, 15, 30, 0),
            ai_analysis: Some(
                "Interessante estratégia! O reconhecimento de padrões está melhorando. Sugiro \
                 monitorar também o volume relativo para confirmar a força do movimento."
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_has_twelve_trades() {
        let trades = demo_trades();
        assert_eq!(trades.len(), DEMO_TRADE_COUNT);
    }

    #[test]
    fn exactly_one_trade_matches_the_comment_target() {
        let target = commented_trade_executed_at();
        let matching = demo_trades()
            .iter()
            .filter(|t| t.executed_at_utc == target)
            .count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn all_trades_share_owner_instrument_and_setup() {
        for trade in demo_trades() {
            assert_eq!(trade.owner_id, DEMO_OWNER);
            assert_eq!(trade.instrument, DEMO_INSTRUMENT);
            assert_eq!(trade.setup, DEMO_SETUP);
            assert!(trade.comments.is_empty());
            assert!(trade.side == "buy" || trade.side == "sell");
            assert!(trade.acl.contains_key(DEMO_OWNER));
        }
    }

    #[test]
    fn first_trade_realized_pl_matches_statement() {
        let trades = demo_trades();
        assert_eq!(
            trades[0].executed_at_utc,
            commented_trade_executed_at()
        );
        assert_eq!(trades[0].side, "sell");
        assert!((trades[0].realized_pl_eur - 4.84).abs() < f64::EPSILON);
    }

    #[test]
    fn demo_user_has_credentials() {
        let user = demo_user();
        assert_eq!(user.username, DEMO_USERNAME);
        assert!(!user.password_hash.is_empty());
        assert!(user.session_token.starts_with("demo_session_token_"));
    }

    #[test]
    fn risk_settings_are_symmetric_two_euro_bounds() {
        let settings = demo_risk_settings();
        assert_eq!(settings.goal_eur, 2.0);
        assert_eq!(settings.max_loss_eur, 2.0);
        assert_eq!(settings.owner_id, DEMO_OWNER);
    }

    #[test]
    fn import_record_counts_the_statement() {
        let record = demo_import_record(DEMO_TRADE_COUNT);
        assert_eq!(record.count, 12);
        assert_eq!(record.source, "trading212");
        assert_eq!(record.owner_id, DEMO_OWNER);
    }

    #[test]
    fn two_comments_one_with_screenshot() {
        let comments = demo_comments();
        assert_eq!(comments.len(), 2);
        assert!(comments[0].screenshot.is_empty());
        assert!(comments[1]
            .screenshot
            .starts_with("data:image/svg+xml;base64,"));
        assert!(comments.iter().all(|c| c.ai_analysis.is_some()));
        assert!(comments.iter().all(|c| c.author == DEMO_OWNER));
    }
}
