use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use reservas::config::{FileConfig, Settings};
use reservas::utils::{logger, validation::Validate};
use reservas::{
    to_csv, DateRange, LocalStorage, ReservationDraft, ReservationQuery, ReservationStore,
    SlotTime, SportType,
};

#[derive(Debug, Parser)]
#[command(name = "reservas")]
#[command(about = "Reservation book for a sports facility back office")]
struct Cli {
    /// Directory the reservation data lives in (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Book a slot
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "football")]
        sport: SportType,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Start of the slot, HH:MM
        #[arg(long)]
        start: SlotTime,
        /// End of the slot, HH:MM
        #[arg(long)]
        end: SlotTime,
    },
    /// List reservations for a day, week or month view
    List {
        #[arg(long, value_enum, default_value = "week")]
        view: View,
        /// Anchor date for the view; defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        sport: Option<SportType>,
        /// Case-insensitive text filter over name, phone and sport
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a reservation by id
    Remove { id: String },
    /// Write the whole book as CSV to stdout
    Export,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    Day,
    Week,
    Month,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting reservas CLI");

    let settings = resolve_settings(&cli)?;
    if cli.verbose {
        tracing::debug!("settings: {:?}", settings);
    }

    let storage = LocalStorage::new(settings.storage_path.clone());
    let store = ReservationStore::open(storage)
        .await
        .context("failed to open reservation store")?;

    match cli.command {
        Command::Add {
            name,
            phone,
            sport,
            date,
            start,
            end,
        } => {
            let draft = ReservationDraft {
                name,
                phone,
                sport_type: sport,
                date,
                start_time: start,
                end_time: end,
            };

            match store.create(draft).await {
                Ok(reservation) => {
                    println!(
                        "✅ Booked {} on {} at {} (id {})",
                        reservation.name, reservation.date, reservation.start_time, reservation.id
                    );
                }
                Err(e) => {
                    tracing::error!("booking failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::List {
            view,
            date,
            sport,
            search,
        } => {
            let anchor = date.unwrap_or_else(|| Local::now().date_naive());
            let mut query = ReservationQuery {
                sport_type: sport,
                search_text: search,
                ..Default::default()
            };
            match view {
                View::Day => query.date = Some(anchor),
                View::Week => {
                    query.date_range = Some(DateRange::week_of(anchor, settings.week_start))
                }
                View::Month => query.date_range = Some(DateRange::month_of(anchor)),
            }

            let results = store.query(&query).await;
            if results.is_empty() {
                println!("No reservations for this period");
            }
            for r in &results {
                println!(
                    "{}  {}-{}  {:<12}  {}  {}  (id {})",
                    r.date,
                    r.start_time,
                    r.end_time,
                    r.sport_type.label(),
                    r.name,
                    r.phone,
                    r.id
                );
            }
        }
        Command::Remove { id } => match store.delete(&id).await {
            Ok(()) => println!("✅ Removed reservation {}", id),
            Err(e) => {
                tracing::error!("delete failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Command::Export => {
            print!("{}", to_csv(&store.list_all().await)?);
        }
    }

    Ok(())
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(FileConfig::load(path)?)?,
        None => Settings::default(),
    };

    if let Some(dir) = &cli.data_dir {
        settings.storage_path = dir.clone();
    }

    settings.validate().context("invalid settings")?;
    Ok(settings)
}
