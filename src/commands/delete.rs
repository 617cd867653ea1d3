//! Delete command - remove an asset

use crate::db::Persistence;
use crate::ingest::FileReader;
use crate::library::AssetLibrary;
use crate::AssetrError;

type Result<T> = std::result::Result<T, AssetrError>;

/// Execute the delete command
///
/// Deleting an unknown id is not an error; it only prints a notice.
///
/// # Errors
/// Returns an error if the store is busy
pub fn execute<P: Persistence, R: FileReader>(
    library: &AssetLibrary<P, R>,
    id: &str,
    quiet: bool,
) -> Result<()> {
    let deleted = library.delete_asset(id)?;
    if !quiet {
        if deleted {
            println!("Deleted {id}");
        } else {
            println!("No asset with id '{id}', nothing deleted");
        }
    }
    Ok(())
}
