//! Core asset record types
//!
//! - **`AssetType`**: media kind derived from a MIME top-level type
//! - **`Section`**: one of the two buckets an asset lives in
//! - **`Asset`**: one stored media record
//! - **`TypeFilter`**: per-section view filter
//! - **`IconKind`**: display hint derived from the file extension
//!
//! The serialized shape of [`Asset`] is camelCase JSON so that a collection
//! written by one frontend can be read by another:
//!
//! ```json
//! {"id":"…","type":"image","url":"data:…","name":"a.png","createdAt":"…","section":"source"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media kind of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Audio,
    Video,
}

impl AssetType {
    /// All admitted asset types, in display order
    pub const ALL: [Self; 3] = [Self::Image, Self::Audio, Self::Video];

    /// Derive the asset type from a MIME string
    ///
    /// Only the top-level segment (the part before `/`) is inspected. The
    /// comparison ignores ASCII case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use assetr::assets::AssetType;
    ///
    /// assert_eq!(AssetType::from_mime("image/png"), Some(AssetType::Image));
    /// assert_eq!(AssetType::from_mime("Video/MP4"), Some(AssetType::Video));
    /// assert_eq!(AssetType::from_mime("text/plain"), None);
    /// assert_eq!(AssetType::from_mime(""), None);
    /// ```
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let top_level = mime.split('/').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|kind| top_level.eq_ignore_ascii_case(kind.as_str()))
    }

    /// Lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| format!("unknown asset type '{s}' (expected image, audio or video)"))
    }
}

/// One of the two buckets an asset can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Source,
    Target,
}

impl Section {
    /// Both sections, in display order
    pub const ALL: [Self; 2] = [Self::Source, Self::Target];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }

    /// The other bucket
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| s.eq_ignore_ascii_case(section.as_str()))
            .ok_or_else(|| format!("unknown section '{s}' (expected source or target)"))
    }
}

/// A stored media record
///
/// Only `section` changes after creation, and only through the store's move
/// operation; the field is therefore private with a read accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub url: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    section: Section,
}

impl Asset {
    /// Create a new asset record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        asset_type: AssetType,
        url: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        section: Section,
    ) -> Self {
        Self {
            id: id.into(),
            asset_type,
            url: url.into(),
            name: name.into(),
            created_at,
            section,
        }
    }

    /// The bucket this asset currently belongs to
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    pub(crate) const fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// File extension taken from the name (text after the last `.`)
    ///
    /// Returns `None` for names without a dot or ending in one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Icon hint for this asset's name
    #[must_use]
    pub fn icon(&self) -> IconKind {
        IconKind::for_name(&self.name)
    }
}

/// Per-section view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(AssetType),
}

impl TypeFilter {
    /// Whether an asset of the given type passes this filter
    #[must_use]
    pub fn accepts(self, asset_type: AssetType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == asset_type,
        }
    }
}

impl From<Option<AssetType>> for TypeFilter {
    fn from(value: Option<AssetType>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// Icon shown next to an asset name, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Image,
    Audio,
    Video,
    Unknown,
}

impl IconKind {
    /// Pick the icon for a file name
    ///
    /// Only a handful of extensions are recognized; everything else gets
    /// [`IconKind::Unknown`] even when the asset itself is valid.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg" | "png") => Self::Image,
            Some("mp4") => Self::Video,
            Some("mp3") => Self::Audio,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Asset {
        Asset::new("id-1", AssetType::Image, "data:,", name, Utc::now(), Section::Source)
    }

    #[test]
    fn test_from_mime_top_level_only() {
        assert_eq!(AssetType::from_mime("audio/mpeg"), Some(AssetType::Audio));
        assert_eq!(AssetType::from_mime("video/webm"), Some(AssetType::Video));
        assert_eq!(AssetType::from_mime(" IMAGE/png"), Some(AssetType::Image));
        assert_eq!(AssetType::from_mime("image"), Some(AssetType::Image));
    }

    #[test]
    fn test_from_mime_rejects_other_types() {
        for mime in ["text/plain", "application/pdf", "application/octet-stream", "font/woff", "", "/png"] {
            assert_eq!(AssetType::from_mime(mime), None, "{mime} should be rejected");
        }
    }

    #[test]
    fn test_section_parse_and_display() {
        assert_eq!("source".parse::<Section>(), Ok(Section::Source));
        assert_eq!("TARGET".parse::<Section>(), Ok(Section::Target));
        assert!("elsewhere".parse::<Section>().is_err());
        assert_eq!(Section::Target.to_string(), "target");
        assert_eq!(Section::Source.opposite(), Section::Target);
    }

    #[test]
    fn test_asset_serialized_shape() {
        let created = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let asset = Asset::new("abc", AssetType::Video, "data:video/mp4;base64,AA==", "clip.mp4", created, Section::Target);

        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["type"], "video");
        assert_eq!(json["name"], "clip.mp4");
        assert_eq!(json["section"], "target");
        assert_eq!(json["createdAt"], "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_extension() {
        assert_eq!(sample("photo.png").extension(), Some("png"));
        assert_eq!(sample("my.holiday.jpg").extension(), Some("jpg"));
        assert_eq!(sample("README").extension(), None);
        assert_eq!(sample("trailing.").extension(), None);
    }

    #[test]
    fn test_dotted_and_uppercase_names() {
        // The final segment decides, not the one after the first dot.
        let clip = sample("clip.final.MP4");
        assert_eq!(clip.extension(), Some("MP4"));
        assert_eq!(clip.icon(), IconKind::Video);
        assert_eq!(sample("song.v2.mp3").icon(), IconKind::Audio);
        assert_eq!(sample("photo.png.txt").icon(), IconKind::Unknown);
    }

    #[test]
    fn test_icon_kind() {
        assert_eq!(IconKind::for_name("a.jpg"), IconKind::Image);
        assert_eq!(IconKind::for_name("a.PNG"), IconKind::Image);
        assert_eq!(IconKind::for_name("a.mp4"), IconKind::Video);
        assert_eq!(IconKind::for_name("a.mp3"), IconKind::Audio);
        assert_eq!(IconKind::for_name("a.webp"), IconKind::Unknown);
        assert_eq!(IconKind::for_name("noext"), IconKind::Unknown);
    }

    #[test]
    fn test_type_filter() {
        assert!(TypeFilter::All.accepts(AssetType::Audio));
        assert!(TypeFilter::Only(AssetType::Audio).accepts(AssetType::Audio));
        assert!(!TypeFilter::Only(AssetType::Audio).accepts(AssetType::Image));
        assert_eq!(TypeFilter::from(None), TypeFilter::All);
        assert_eq!(TypeFilter::from(Some(AssetType::Video)), TypeFilter::Only(AssetType::Video));
    }
}
