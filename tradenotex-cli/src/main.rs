use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mongodb::Database;
use tradenotex_core::{client, demo, schema, seed, verify, SetupConfig};

#[derive(Parser)]
#[command(name = "tradenotex")]
#[command(about = "Provisioning and demo-data seeding for the TradeNoteX trading journal")]
#[command(version)]
struct Cli {
    /// MongoDB connection string (defaults to MONGODB_URI)
    #[arg(long, global = true)]
    uri: Option<String>,
    /// Target database name (defaults to TRADENOTEX_DB, then "tradenotex")
    #[arg(long, global = true)]
    db: Option<String>,
    /// Verbose diagnostic output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create collections and indexes (safe to re-run)
    Setup,
    /// Full provisioning run: schema, demo data, demo comments
    Seed,
    /// Check that the database matches the expected demo state
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SetupConfig::resolve(cli.uri, cli.db).context("resolving configuration")?;
    let db = client::connect(&config)
        .await
        .with_context(|| format!("connecting to database '{}'", config.database))?;
    println!("📊 Connected to MongoDB (database: {})", config.database);

    match cli.command {
        Commands::Setup => run_setup(&db).await,
        Commands::Seed => run_seed(&db).await,
        Commands::Verify => run_verify(&db).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

async fn run_setup(db: &Database) -> Result<()> {
    schema::ensure_collections(db)
        .await
        .context("creating collections")?;
    schema::ensure_indexes(db).await.context("creating indexes")?;

    for name in schema::COLLECTIONS {
        println!(
            "✅ Collection {} ready ({} indexes)",
            name,
            tradenotex_core::IndexSpec::count_for(name)
        );
    }
    Ok(())
}

async fn run_seed(db: &Database) -> Result<()> {
    run_setup(db).await?;

    let inserted = seed::insert_demo_trades(db)
        .await
        .context("inserting demo trades")?;
    println!("✅ Inserted {} demo trades", inserted);

    match seed::insert_demo_user(db).await {
        Ok(()) => println!(
            "✅ Demo user created (username: {}, password: demo123)",
            demo::DEMO_USERNAME
        ),
        Err(err) if err.is_duplicate_key() => {
            anyhow::bail!("demo user already exists; usernames are unique - was seed run twice?")
        }
        Err(err) => return Err(err).context("inserting demo user"),
    }

    seed::insert_demo_risk_settings(db)
        .await
        .context("inserting risk settings")?;
    println!("✅ Risk settings created");

    seed::insert_demo_import_record(db, inserted)
        .await
        .context("inserting import record")?;
    println!("✅ Import record created");

    if seed::attach_demo_comments(db)
        .await
        .context("attaching demo comments")?
    {
        println!("✅ Comments attached to the first trade");
    } else {
        println!("⚠️  No trade matched the comment timestamp; comments skipped");
    }

    Ok(())
}

async fn run_verify(db: &Database) -> Result<()> {
    let report = verify::run(db).await.context("verifying seeded data")?;

    for check in &report.checks {
        let mark = if check.passed { "✅" } else { "❌" };
        println!("{} {}: {}", mark, check.name, check.detail);
    }

    if report.all_passed() {
        println!("🎉 Database matches the expected demo state");
        Ok(())
    } else {
        anyhow::bail!("{} verification check(s) failed", report.failed_count())
    }
}
