//! # Seed Data Generator
//!
//! Populates the database with sample repository records for development.
//!
//! ## Usage
//! ```bash
//! # Generate 10 records (default)
//! cargo run -p depmon-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p depmon-db --bin seed -- --count 250
//!
//! # Specify database path
//! cargo run -p depmon-db --bin seed -- --db ./data/depmon.db
//! ```
//!
//! ## Generated Records
//! Ids run `1..=count`. Each record gets:
//! - URL: `https://github.com/depmon/sample-{id}`
//! - A description on odd ids, none on even ids
//! - `archived` on every fourth id, `active` on all but every fifth id

use chrono::{Duration, Utc};
use depmon_core::Repository;
use depmon_db::{Database, DbConfig};
use std::env;

const DEFAULT_COUNT: i64 = 10;
const DEFAULT_DB_PATH: &str = "./depmon_dev.db";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct SeedArgs {
    count: i64,
    db_path: String,
}

/// Parses `args` (without the program name).
///
/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<SeedArgs>, String> {
    let mut parsed = SeedArgs {
        count: DEFAULT_COUNT,
        db_path: String::from(DEFAULT_DB_PATH),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = iter.next().ok_or("--count needs a value")?;
                parsed.count = match value.parse::<i64>() {
                    Ok(n) if n >= 0 => n,
                    _ => return Err(format!("invalid --count value: '{value}'")),
                };
            }
            "--db" | "-d" => {
                parsed.db_path = iter.next().ok_or("--db needs a value")?.clone();
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument: '{other}'")),
        }
    }

    Ok(Some(parsed))
}

fn print_help() {
    println!("DepMon Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of records to generate (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let SeedArgs { count, db_path } = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run with --help for usage.");
            return Err(message.into());
        }
    };

    println!("DepMon Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!("Records:  {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let store = db.repositories();

    let existing = store.count_records().await?;
    if existing > 0 {
        println!("⚠ Database already has {} repositories", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for id in 1..=count {
        let record = sample_repository(id);
        if let Err(e) = store.insert(&record).await {
            eprintln!("Failed to insert repository {}: {}", id, e);
            continue;
        }
        generated += 1;
    }

    println!();
    println!("✓ Generated {} repositories in {:?}", generated, start.elapsed());

    db.close().await;
    Ok(())
}

/// Builds the sample record for `id`.
fn sample_repository(id: i64) -> Repository {
    // Older ids look older
    let created_at = Utc::now() - Duration::days(id);

    Repository {
        repository_id: id,
        html_url: format!("https://github.com/depmon/sample-{id}"),
        description: (id % 2 == 1).then(|| format!("Sample repository #{id}")),
        archived: id % 4 == 0,
        active: id % 5 != 0,
        created_at,
        updated_at: created_at,
    }
}
