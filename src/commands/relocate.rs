//! Move command - reassign an asset to another section

use crate::assets::{Asset, Section};
use crate::db::Persistence;
use crate::ingest::FileReader;
use crate::library::AssetLibrary;
use crate::AssetrError;

type Result<T> = std::result::Result<T, AssetrError>;

/// Execute the move command
///
/// Without an explicit section the asset flips to the other one, as if it
/// had been dragged across.
///
/// # Errors
/// Returns `AssetrError::InvalidInput` if no asset has this id
pub fn execute<P: Persistence, R: FileReader>(
    library: &AssetLibrary<P, R>,
    id: &str,
    section: Option<Section>,
    quiet: bool,
) -> Result<()> {
    let current = library
        .context()
        .with_store(|store| store.get(id).map(Asset::section))?
        .ok_or_else(|| AssetrError::InvalidInput(format!("No asset with id '{id}'")))?;
    let section = section.unwrap_or_else(|| current.opposite());

    library.move_asset(id, section)?;
    if !quiet {
        println!("Moved {id} to {section}");
    }
    Ok(())
}
