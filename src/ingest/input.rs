//! Raw file inputs handed to the ingestion pipeline
//!
//! A [`FileInput`] is what a drop event or a file picker delivers: a name, a
//! reported MIME type, and somewhere to read the bytes from. Files picked
//! from disk carry no reported MIME type, so [`FileInput::from_path`] derives
//! one from the extension.

use crate::assets::AssetType;
use std::path::{Path, PathBuf};

/// MIME type used when nothing better is known
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Where the bytes of a file input live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on the local filesystem
    Path(PathBuf),
    /// Bytes already in memory
    Bytes(Vec<u8>),
}

/// A file offered for ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    /// Original file name (no directory part)
    pub name: String,
    /// MIME type as reported by the source
    pub mime: String,
    pub source: FileSource,
}

impl FileInput {
    /// Build an input from in-memory bytes with an explicit MIME type
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            source: FileSource::Bytes(bytes),
        }
    }

    /// Build an input for a file on disk, guessing the MIME type from its extension
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let mime = guess_mime(&path).to_string();
        Self {
            name,
            mime,
            source: FileSource::Path(path),
        }
    }

    /// Asset type implied by the reported MIME type, if it is admitted
    #[must_use]
    pub fn asset_type(&self) -> Option<AssetType> {
        AssetType::from_mime(&self.mime)
    }
}

/// Guess a MIME type from a path's extension
///
/// Unknown or missing extensions map to [`UNKNOWN_MIME`].
#[must_use]
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => UNKNOWN_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_known_extensions() {
        assert_eq!(guess_mime(Path::new("a.png")), "image/png");
        assert_eq!(guess_mime(Path::new("dir/b.JPEG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("c.mkv")), "video/x-matroska");
        assert_eq!(guess_mime(Path::new("d.mp3")), "audio/mpeg");
    }

    #[test]
    fn test_guess_mime_unknown() {
        assert_eq!(guess_mime(Path::new("archive.xyz")), UNKNOWN_MIME);
        assert_eq!(guess_mime(Path::new("Makefile")), UNKNOWN_MIME);
    }

    #[test]
    fn test_from_path_uses_file_name() {
        let input = FileInput::from_path("/tmp/holiday/beach.webp");
        assert_eq!(input.name, "beach.webp");
        assert_eq!(input.mime, "image/webp");
        assert_eq!(input.asset_type(), Some(AssetType::Image));
        assert_eq!(input.source, FileSource::Path(PathBuf::from("/tmp/holiday/beach.webp")));
    }

    #[test]
    fn test_octet_stream_is_not_admitted() {
        let input = FileInput::from_path("blob.bin");
        assert_eq!(input.mime, UNKNOWN_MIME);
        assert_eq!(input.asset_type(), None);
    }

    #[test]
    fn test_from_bytes_keeps_reported_mime() {
        let input = FileInput::from_bytes("song", "audio/ogg", vec![1, 2, 3]);
        assert_eq!(input.asset_type(), Some(AssetType::Audio));
        assert_eq!(input.source, FileSource::Bytes(vec![1, 2, 3]));
    }
}
