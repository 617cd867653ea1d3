//! List command - show assets per section

use crate::assets::{Section, TypeFilter};
use crate::db::Persistence;
use crate::ingest::FileReader;
use crate::library::AssetLibrary;
use crate::{AssetrError, output};

type Result<T> = std::result::Result<T, AssetrError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn execute<P: Persistence, R: FileReader>(
    library: &AssetLibrary<P, R>,
    section: Option<Section>,
    filter: TypeFilter,
    quiet: bool,
) -> Result<()> {
    let sections: Vec<Section> = section.map_or_else(|| Section::ALL.to_vec(), |s| vec![s]);

    for section in sections {
        library.set_filter(section, filter);
        let assets = library.assets(section)?;

        if !quiet {
            println!("{}", output::section_heading(section, assets.len()));
            if assets.is_empty() {
                println!("  (empty)");
            }
        }
        for asset in &assets {
            println!("{}", output::asset_line(asset, quiet));
        }
    }
    Ok(())
}
