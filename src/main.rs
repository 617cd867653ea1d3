//! Assetr CLI application entry point
//!
//! A command-line shell over the asset library: it opens the configured
//! database, builds an [`AssetLibrary`] with the data-URL file reader, and
//! dispatches one command.
//!
//! # Usage
//!
//! ```bash
//! # Show both sections (default command)
//! assetr
//! assetr list --section target --type image
//!
//! # Import files into a section, as a file picker would
//! assetr import -s source holiday.png theme.mp3
//!
//! # Drop an existing asset onto the target section
//! assetr drop -s target --text 3f2c9a6e-...
//!
//! # Move or delete by id (move without a section flips it)
//! assetr move 3f2c9a6e-... source
//! assetr move 3f2c9a6e-...
//! assetr delete 3f2c9a6e-...
//! ```
//!
//! Log verbosity is controlled with the `ASSETR_LOG` environment variable
//! (`warn` by default).

use assetr::{
    AssetLibrary, AssetrError, TypeFilter,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::AssetrConfig,
    db::Database,
    ingest::DataUrlReader,
};
use std::path::Path;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, AssetrError>;

fn init_logging() {
    // A second initialization only happens in tests; ignore it.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("ASSETR_LOG")
                .from_env_lossy(),
        )
        .try_init();
}

/// Handle the config command
///
/// # Errors
///
/// Returns `AssetrError` if the key is unknown, the value cannot be parsed,
/// or saving fails.
fn handle_config_command(mut config: AssetrConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting
                .split_once('=')
                .ok_or_else(|| AssetrError::InvalidInput("Invalid format. Use: assetr config set key=value".into()))?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
    }
    Ok(())
}

/// Open the asset database and build the library on it
///
/// # Errors
///
/// Returns `AssetrError` if the database directory cannot be created or the
/// database cannot be opened.
fn open_library(db_path: &Path) -> Result<AssetLibrary<Database, DataUrlReader>> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    debug!(path = %db_path.display(), "Opening asset database");
    let db = Database::open(db_path)?;
    if !db.has_snapshot()? {
        info!(path = %db_path.display(), "Starting a new asset collection");
    }
    Ok(AssetLibrary::open(db, DataUrlReader::new()))
}

/// Main entry point for the assetr application
///
/// # Errors
///
/// Returns `AssetrError` if configuration loading fails, the database cannot
/// be opened, or a command fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let config = AssetrConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;
    let db_path = match cli.db.clone() {
        Some(path) => path,
        None => config.database_path()?,
    };

    match cli.get_command() {
        Commands::Config { command } => handle_config_command(config, &command, quiet)?,
        Commands::List { section, asset_type } => {
            let library = open_library(&db_path)?;
            let filter = TypeFilter::from(asset_type.map(Into::into));
            commands::list(&library, section.map(Into::into), filter, quiet)?;
        }
        Commands::Import { section, files } => {
            let library = open_library(&db_path)?;
            let section = section.map_or(config.default_section, Into::into);
            commands::import(&library, &files, section, quiet).await?;
        }
        Commands::Drop { section, text, files } => {
            let library = open_library(&db_path)?;
            let section = section.map_or(config.default_section, Into::into);
            commands::drop_payload(&library, text, &files, section, quiet).await?;
        }
        Commands::Move { id, section } => {
            let library = open_library(&db_path)?;
            commands::relocate(&library, &id, section.map(Into::into), quiet)?;
        }
        Commands::Delete { id } => {
            let library = open_library(&db_path)?;
            commands::delete(&library, &id, quiet)?;
        }
    }

    Ok(())
}
