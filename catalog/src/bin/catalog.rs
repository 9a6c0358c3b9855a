use std::path::PathBuf;
use std::process::ExitCode;

use catalog::{
    get_or_create_daily_theme, get_player, get_theme, increment_vote, list_formations,
    list_players, list_themes, players_for_theme, seed_if_empty, CatalogError, DailyTheme,
    FormationFilter, PlayerFilter, SeedOutcome, Settings, VoteOutcome,
};
use clap::{Parser, Subcommand};
use database::SqliteStore;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Football player catalog, formations and daily themes")]
struct Params {
    /// SQLite URL or file path; falls back to DATABASE_URL, then the config file
    #[arg(long)]
    database_url: Option<String>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the reference players and themes into an empty catalog
    Seed,
    /// Show today's theme, creating the default one if needed
    DailyTheme,
    /// Add one vote to a formation
    Vote { formation_id: String },
    /// List players, optionally filtered
    Players {
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        club: Option<String>,
        #[arg(long)]
        era: Option<String>,
    },
    Player { id: String },
    /// List formations, most-voted first
    Formations {
        #[arg(long)]
        theme: Option<String>,
    },
    Themes,
    /// List the players a theme admits
    ThemePlayers { theme_id: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CatalogError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, CatalogError> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings.database_config(args.database_url);
    let store = SqliteStore::connect(&config).await?;

    match args.command {
        Command::Seed => match seed_if_empty(&store).await? {
            SeedOutcome::Seeded { players, themes } => {
                println!("Seeded {players} players and {themes} themes")
            }
            SeedOutcome::AlreadySeeded => println!("Sample data already exists"),
        },
        Command::DailyTheme => {
            let daily = get_or_create_daily_theme(&store).await?;
            if let DailyTheme::CreatedDefault(theme) = &daily {
                log::info!("No daily theme yet, created {}", theme.id);
            }
            print_json(daily.theme())?;
        }
        Command::Vote { formation_id } => match increment_vote(&store, &formation_id).await? {
            VoteOutcome::Recorded => println!("Vote recorded"),
            VoteOutcome::NotFound => {
                eprintln!("Formation not found: {formation_id}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Players { position, club, era } => {
            let filter = PlayerFilter {
                position,
                club,
                era,
            };
            print_json(&list_players(&store, &filter).await?)?;
        }
        Command::Player { id } => match get_player(&store, &id).await? {
            Some(player) => print_json(&player)?,
            None => {
                eprintln!("Player not found: {id}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Formations { theme } => {
            let filter = FormationFilter { theme };
            print_json(&list_formations(&store, &filter).await?)?;
        }
        Command::Themes => print_json(&list_themes(&store).await?)?,
        Command::ThemePlayers { theme_id } => match get_theme(&store, &theme_id).await? {
            Some(theme) => print_json(&players_for_theme(&store, &theme).await?)?,
            None => {
                eprintln!("Theme not found: {theme_id}");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
