//! Data models for the blog list.
//!
//! This module contains the stored blog record, the request body used to
//! create and replace records, and the statistics produced by the aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a blog id in raw bytes.
const ID_BYTES: usize = 12;

/// Opaque identifier assigned by the store when a blog is created.
///
/// Rendered as 24 lowercase hex characters: a 4-byte creation timestamp
/// (seconds) followed by an 8-byte sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlogId([u8; ID_BYTES]);

/// Error returned when a string is not a well-formed blog id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformatted id: {0}")]
pub struct BlogIdError(pub String);

impl BlogId {
    /// Builds an id from a creation timestamp and a store sequence number.
    pub fn new(timestamp_secs: u32, sequence: u64) -> Self {
        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&timestamp_secs.to_be_bytes());
        bytes[4..].copy_from_slice(&sequence.to_be_bytes());
        Self(bytes)
    }

    /// Sequence number embedded in the id.
    pub fn sequence(&self) -> u64 {
        let mut seq = [0u8; 8];
        seq.copy_from_slice(&self.0[4..]);
        u64::from_be_bytes(seq)
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for BlogId {
    type Err = BlogIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_BYTES * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BlogIdError(s.to_string()));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| BlogIdError(s.to_string()))?;
        }

        Ok(Self(bytes))
    }
}

impl TryFrom<String> for BlogId {
    type Error = BlogIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlogId> for String {
    fn from(id: BlogId) -> Self {
        id.to_string()
    }
}

/// A stored blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    /// Identifier assigned by the store.
    pub id: BlogId,
    /// Title of the post.
    pub title: String,
    /// Author of the post, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Address of the post.
    pub url: String,
    /// Number of likes.
    #[serde(default)]
    pub likes: u64,
}

impl BlogRecord {
    /// Creates a record from validated fields.
    pub fn from_fields(id: BlogId, fields: BlogFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            url: fields.url,
            likes: fields.likes,
        }
    }
}

/// Validation failures for a blog request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    MissingField(&'static str),

    #[error("`likes` must not be negative, got {0}")]
    NegativeLikes(i64),

    #[error("`likes` must be a whole number no larger than {max}, got {0}", max = u64::MAX)]
    InvalidLikes(String),
}

/// Request body for creating or replacing a blog.
///
/// Every field is optional on the wire; [`BlogInput::validate`] decides
/// what is actually required. `likes` stays a raw JSON number until then
/// so the whole `u64` range is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<Number>,
}

/// Validated mutable fields of a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogFields {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}

impl BlogInput {
    /// Checks required fields and applies defaults.
    ///
    /// `title` and `url` must be present and non-blank. Missing `likes`
    /// becomes 0. The author is kept as given, so an empty author is a
    /// different author from a missing one.
    pub fn validate(self) -> Result<BlogFields, ValidationError> {
        let title = required(self.title, "title")?;
        let url = required(self.url, "url")?;

        let likes = match self.likes {
            None => 0,
            Some(ref n) => like_count(n)?,
        };

        Ok(BlogFields {
            title,
            author: self.author,
            url,
            likes,
        })
    }
}

fn like_count(n: &Number) -> Result<u64, ValidationError> {
    if let Some(likes) = n.as_u64() {
        return Ok(likes);
    }
    match n.as_i64() {
        Some(negative) => Err(ValidationError::NegativeLikes(negative)),
        None => Err(ValidationError::InvalidLikes(n.to_string())),
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Author with the most blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogs {
    pub author: Option<String>,
    pub blogs: usize,
}

/// Author with the most cumulative likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: u64,
}

/// All aggregator results computed over one snapshot of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    /// Number of blogs in the snapshot.
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<BlogRecord>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Blog count and cumulative likes for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub author: Option<String>,
    pub blogs: usize,
    pub likes: u64,
}

/// Metadata about a statistics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the blogs were read from.
    pub source: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// A complete statistics report over one blog snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub metadata: ReportMetadata,
    pub stats: BlogStats,
    /// Authors ranked by blog count, then likes.
    pub authors: Vec<AuthorSummary>,
}

/// Display name for an optional author.
pub fn author_label(author: Option<&str>) -> &str {
    author.unwrap_or("(unknown)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, url: Option<&str>, likes: Option<i64>) -> BlogInput {
        BlogInput {
            title: title.map(String::from),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: url.map(String::from),
            likes: likes.map(Number::from),
        }
    }

    #[test]
    fn test_blog_id_roundtrip() {
        let id = BlogId::new(0x5a3d_5da5, 42);
        let text = id.to_string();
        assert_eq!(text.len(), 24);
        assert_eq!(text, "5a3d5da5000000000000002a");
        assert_eq!(text.parse::<BlogId>().unwrap(), id);
        assert_eq!(id.sequence(), 42);
    }

    #[test]
    fn test_blog_id_rejects_malformed() {
        // One character short of a valid id.
        assert!("5a3d5da59070081a82a3445".parse::<BlogId>().is_err());
        assert!("zzzzzzzzzzzzzzzzzzzzzzzz".parse::<BlogId>().is_err());
        assert!("".parse::<BlogId>().is_err());
    }

    #[test]
    fn test_blog_id_serializes_as_string() {
        let id = BlogId::new(1, 2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"000000010000000000000002\"");
        let back: BlogId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_validate_defaults_likes() {
        let fields = input(Some("Go To"), Some("http://example.com"), None)
            .validate()
            .unwrap();
        assert_eq!(fields.likes, 0);
        assert_eq!(fields.author.as_deref(), Some("Edsger W. Dijkstra"));
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            input(None, Some("http://example.com"), Some(1)).validate(),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            input(Some("Go To"), None, Some(1)).validate(),
            Err(ValidationError::MissingField("url"))
        );
        assert_eq!(
            input(Some("  "), Some("http://example.com"), Some(1)).validate(),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn test_validate_negative_likes() {
        assert_eq!(
            input(Some("Go To"), Some("http://example.com"), Some(-3)).validate(),
            Err(ValidationError::NegativeLikes(-3))
        );
    }

    #[test]
    fn test_validate_likes_full_range() {
        let body: BlogInput = serde_json::from_str(
            r#"{"title": "Go To", "url": "http://example.com", "likes": 18446744073709551615}"#,
        )
        .unwrap();
        assert_eq!(body.validate().unwrap().likes, u64::MAX);
    }

    #[test]
    fn test_validate_likes_out_of_range() {
        let too_big: BlogInput = serde_json::from_str(
            r#"{"title": "Go To", "url": "http://example.com", "likes": 18446744073709551616}"#,
        )
        .unwrap();
        assert!(matches!(
            too_big.validate(),
            Err(ValidationError::InvalidLikes(_))
        ));

        let fraction: BlogInput = serde_json::from_str(
            r#"{"title": "Go To", "url": "http://example.com", "likes": 2.5}"#,
        )
        .unwrap();
        assert!(matches!(
            fraction.validate(),
            Err(ValidationError::InvalidLikes(_))
        ));
    }

    #[test]
    fn test_empty_author_is_kept() {
        let mut body = input(Some("Go To"), Some("http://example.com"), None);
        body.author = Some(String::new());
        assert_eq!(body.validate().unwrap().author, Some(String::new()));

        let mut body = input(Some("Go To"), Some("http://example.com"), None);
        body.author = None;
        assert_eq!(body.validate().unwrap().author, None);
    }

    #[test]
    fn test_record_json_omits_missing_author() {
        let record = BlogRecord {
            id: BlogId::new(1, 1),
            title: "Type wars".to_string(),
            author: None,
            url: "http://blog.cleancoder.com".to_string(),
            likes: 2,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("author").is_none());
        assert_eq!(json["id"], "000000010000000000000001");
    }
}
