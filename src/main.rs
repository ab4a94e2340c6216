use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lushu_numerology::reference;
use lushu_numerology::report::build_report;
use lushu_numerology::{calculate_reading, BirthDate};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod config;
mod db;
mod models;

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Lu Shu numerology readings from a date of birth", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a reading without saving it
    Calc {
        /// Date of birth as YYYY-MM-DD
        #[arg(long)]
        dob: BirthDate,
        #[arg(long)]
        title: Option<String>,
        /// Print the stored JSON shape instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Create or upgrade the database schema
    InitDb,
    /// Calculate a reading and save it for an owner
    Save {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        dob: BirthDate,
        #[arg(long)]
        title: Option<String>,
    },
    /// List an owner's saved readings, newest first
    List {
        #[arg(long)]
        owner: Uuid,
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Print a saved reading
    Show {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        json: bool,
    },
    /// Write a saved reading to a markdown file
    Report {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long, default_value = "reading.md")]
        out: PathBuf,
    },
    /// Change or clear the title of a saved reading
    Rename {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a saved reading
    Delete {
        #[arg(long)]
        owner: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Import readings from a CSV file (owner_id,date_of_birth,title)
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Look up an angel number such as 111 or 777
    Angel { number: Option<u16> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::Settings::from_env()?;

    match cli.command {
        Commands::Calc { dob, title, json } => {
            let reading = calculate_reading(&dob).with_title(title);
            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print!("{}", build_report(&reading));
            }
        }
        Commands::InitDb => {
            let pool = settings.connect().await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Save { owner, dob, title } => {
            let pool = settings.connect().await?;
            let reading = calculate_reading(&dob).with_title(title);
            let id = db::insert_reading(&pool, owner, &reading).await?;
            println!(
                "Saved reading {id} (mulank {}, destiny {}).",
                reading.mulank, reading.destiny
            );
        }
        Commands::List { owner, limit } => {
            let pool = settings.connect().await?;
            let readings = db::fetch_readings(&pool, owner, limit).await?;

            if readings.is_empty() {
                println!("No readings saved for this owner.");
                return Ok(());
            }

            println!("Saved readings:");
            for summary in readings.iter() {
                println!(
                    "- {} {} (born {}, mulank {}, destiny {}) saved {}",
                    summary.id,
                    summary.title.as_deref().unwrap_or("Untitled"),
                    summary.date_of_birth,
                    summary.mulank,
                    summary.destiny,
                    summary.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Commands::Show { owner, id, json } => {
            let pool = settings.connect().await?;
            let record = db::fetch_reading(&pool, owner, id)
                .await?
                .with_context(|| format!("reading {id} not found"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record.reading)?);
            } else {
                print!("{}", build_report(&record.reading));
                println!();
                println!(
                    "Reading {} for owner {}, saved {}.",
                    record.id,
                    record.owner_id,
                    record.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Commands::Report { owner, id, out } => {
            let pool = settings.connect().await?;
            let record = db::fetch_reading(&pool, owner, id)
                .await?
                .with_context(|| format!("reading {id} not found"))?;
            std::fs::write(&out, build_report(&record.reading))
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Rename { owner, id, title } => {
            let pool = settings.connect().await?;
            if !db::rename_reading(&pool, owner, id, title.as_deref()).await? {
                anyhow::bail!("reading {id} not found");
            }
            println!("Reading {id} updated.");
        }
        Commands::Delete { owner, id } => {
            let pool = settings.connect().await?;
            if !db::delete_reading(&pool, owner, id).await? {
                anyhow::bail!("reading {id} not found");
            }
            println!("Reading {id} deleted.");
        }
        Commands::Import { csv } => {
            let pool = settings.connect().await?;
            let inserted = db::import_csv(&pool, &csv).await?;
            println!("Inserted {inserted} readings from {}.", csv.display());
        }
        Commands::Angel { number } => match number {
            Some(number) => {
                let angel = reference::angel_number(number).with_context(|| {
                    format!("{number} is not a listed angel number (try 000, 111 ... 999)")
                })?;
                println!("{:03} - {}: {}", angel.number, angel.theme, angel.meaning);
            }
            None => {
                for angel in reference::angel_numbers() {
                    println!("{:03} - {}: {}", angel.number, angel.theme, angel.meaning);
                }
            }
        },
    }

    Ok(())
}
