//! CLI tool for managing diary entries
//!
//! # Usage
//!
//! ```bash
//! # Add an entry
//! diary-entry add "Trip" "Went to the lake" --date 2024-06-01 --db sqlite://diary.db
//!
//! # List entries, optionally searching title and body
//! diary-entry list --query lake --db sqlite://diary.db
//!
//! # Show or delete one entry
//! diary-entry show 1 --db sqlite://diary.db
//! diary-entry delete 1 --db sqlite://diary.db
//! ```

use clap::{Parser, Subcommand};
use diary_rs::config::DEFAULT_MAX_QUERY_LEN;
use diary_rs::diary::validation::{parse_date, validate_search};
use diary_rs::diary::{self, CreateEntryRequest, DiaryStore, DATE_FORMAT};

#[derive(Parser)]
#[command(name = "diary-entry")]
#[command(about = "Manage diary entries", long_about = None)]
struct Cli {
    /// Database URL (e.g., sqlite://diary.db)
    #[arg(short, long, default_value = "sqlite://diary.db?mode=rwc")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new entry
    Add {
        title: String,
        body: String,
        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// List entries
    List {
        /// Only entries whose title or body contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Only entries on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one entry
    Show { id: i64 },
    /// Delete an entry
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = DiaryStore::connect(&cli.db).await?;

    match cli.command {
        Commands::Add { title, body, date } => {
            let date = parse_date(date.as_deref())?;
            let entry = store
                .create_entry(CreateEntryRequest { title, body, date })
                .await?;
            println!("✓ Entry {} added", entry.id);
        }
        Commands::List { query, date } => {
            let query =
                validate_search(query.as_deref(), date.as_deref(), DEFAULT_MAX_QUERY_LEN)?;
            let entries = store.list_entries().await?;
            let entries = diary::apply(&entries, &query);

            if entries.is_empty() {
                println!("No entries found.");
            } else {
                println!("{:<6} {:<12} {:<40}", "ID", "Date", "Title");
                println!("{:-<60}", "");

                for entry in &entries {
                    let date = entry
                        .date
                        .map(|d| d.format(DATE_FORMAT).to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("{:<6} {:<12} {:<40}", entry.id, date, entry.title);
                }

                println!(
                    "\nTotal: {} entr{}",
                    entries.len(),
                    if entries.len() == 1 { "y" } else { "ies" }
                );
            }
        }
        Commands::Show { id } => match store.get_entry(id).await? {
            Some(entry) => {
                println!("# {}", entry.title);
                if let Some(date) = entry.date {
                    println!("{}", date.format(DATE_FORMAT));
                }
                println!("\n{}", entry.body);
            }
            None => {
                eprintln!("Error: Entry {} does not exist", id);
                std::process::exit(1);
            }
        },
        Commands::Delete { id } => {
            store.delete_entry(id).await?;
            println!("✓ Entry {} deleted", id);
        }
    }

    Ok(())
}
