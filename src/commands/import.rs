//! Import and drop commands - bring files into a section

use crate::assets::Section;
use crate::db::Persistence;
use crate::dnd::{DropOutcome, TransferPayload};
use crate::ingest::{FileInput, FileReader};
use crate::library::AssetLibrary;
use crate::{AssetrError, output};
use std::path::PathBuf;
use tracing::info;

type Result<T> = std::result::Result<T, AssetrError>;

/// Execute the import command, the file-picker path
///
/// # Errors
/// Returns an error only for store contract violations; per-file problems are
/// reported in the printed summary.
pub async fn execute<P: Persistence, R: FileReader>(
    library: &AssetLibrary<P, R>,
    files: &[PathBuf],
    section: Section,
    quiet: bool,
) -> Result<()> {
    let inputs = files.iter().map(FileInput::from_path).collect();
    let report = library.handle_upload(section, inputs).await;
    info!(added = report.added.len(), skipped = report.skipped.len(), failed = report.failed.len(), "Import finished");

    if quiet {
        for id in &report.added {
            println!("{id}");
        }
    } else {
        println!("{}", output::ingest_summary(&report, section));
    }
    Ok(())
}

/// Execute the drop command, the drag-and-drop path
///
/// # Errors
/// Returns an error if the store is busy while moving.
pub async fn execute_drop<P: Persistence, R: FileReader>(
    library: &AssetLibrary<P, R>,
    text: Option<String>,
    files: &[PathBuf],
    section: Section,
    quiet: bool,
) -> Result<()> {
    let payload = TransferPayload {
        text,
        files: files.iter().map(FileInput::from_path).collect(),
    };

    match library.handle_drop(section, payload).await? {
        DropOutcome::Moved { asset_id, found: true } => {
            if !quiet {
                println!("Moved {asset_id} to {section}");
            }
        }
        DropOutcome::Moved { asset_id, found: false } => {
            if !quiet {
                println!("No asset with id '{asset_id}', nothing moved");
            }
        }
        DropOutcome::Ingested(report) => {
            if quiet {
                for id in &report.added {
                    println!("{id}");
                }
            } else {
                println!("{}", output::ingest_summary(&report, section));
            }
        }
        DropOutcome::Ignored => {
            if !quiet {
                println!("Nothing to drop");
            }
        }
    }
    Ok(())
}
