//! File-reading collaborator
//!
//! Turning a raw file into a displayable URL is the only suspension point in
//! the system. [`FileReader`] abstracts it; [`DataUrlReader`] is the default
//! implementation and produces `data:` URLs.

use super::input::{FileInput, FileSource, UNKNOWN_MIME};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::future::Future;
use thiserror::Error;

/// Errors from reading a file's content
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying read failed
    #[error("Failed to read '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The reader refused the file
    #[error("Reader rejected '{0}'")]
    Rejected(String),
}

/// Materializes a file's content into a URL string
pub trait FileReader {
    /// Read `file` and return a URL referencing its bytes
    ///
    /// # Errors
    ///
    /// Returns `ReadError` if the content cannot be read.
    fn read_as_data_url(&self, file: &FileInput) -> impl Future<Output = Result<String, ReadError>>;
}

/// Reads files fully and encodes them as base64 `data:` URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlReader;

impl DataUrlReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileReader for DataUrlReader {
    async fn read_as_data_url(&self, file: &FileInput) -> Result<String, ReadError> {
        let encoded = match &file.source {
            FileSource::Bytes(bytes) => STANDARD.encode(bytes),
            FileSource::Path(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| ReadError::Io {
                    name: file.name.clone(),
                    source,
                })?;
                STANDARD.encode(bytes)
            }
        };
        Ok(data_url(&file.mime, &encoded))
    }
}

/// Assemble a base64 `data:` URL
#[must_use]
pub fn data_url(mime: &str, base64_payload: &str) -> String {
    let mime = if mime.trim().is_empty() { UNKNOWN_MIME } else { mime };
    format!("data:{mime};base64,{base64_payload}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_in_memory_bytes() {
        let input = FileInput::from_bytes("a.png", "image/png", b"hello".to_vec());
        let url = DataUrlReader::new().read_as_data_url(&input).await.unwrap();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_reads_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
        file.write_all(b"ID3").unwrap();

        let input = FileInput::from_path(file.path());
        let url = DataUrlReader::new().read_as_data_url(&input).await.unwrap();

        assert_eq!(url, "data:audio/mpeg;base64,SUQz");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = FileInput::from_path(dir.path().join("gone.png"));

        let err = DataUrlReader::new().read_as_data_url(&input).await.unwrap_err();

        assert!(matches!(err, ReadError::Io { ref name, .. } if name == "gone.png"));
        assert!(err.to_string().contains("gone.png"));
    }

    #[test]
    fn test_data_url_defaults_empty_mime() {
        assert_eq!(data_url("", "AA=="), "data:application/octet-stream;base64,AA==");
    }
}
