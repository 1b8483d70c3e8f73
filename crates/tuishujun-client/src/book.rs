//! Book record as returned by `GET /v1/books/{id}`.

use serde::{Deserialize, Deserializer};

/// One book's metadata. Missing keys and JSON `null` decode to the zero value; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "book_name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "book_status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "book_author_name", deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(rename = "book_words", deserialize_with = "null_as_default")]
    pub words: i64,
    #[serde(rename = "book_chapters", deserialize_with = "null_as_default")]
    pub chapters: i64,
    #[serde(rename = "book_category_name", deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "book_synopsis", deserialize_with = "null_as_default")]
    pub synopsis: String,
    /// Opaque timestamp string, passed through as-is.
    #[serde(rename = "book_updated_at", deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(rename = "book_img_url", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(rename = "book_author_source", deserialize_with = "null_as_default")]
    pub author_source: String,
    #[serde(rename = "book_star", deserialize_with = "null_as_default")]
    pub star: f64,
    #[serde(rename = "book_star_number", deserialize_with = "null_as_default")]
    pub star_number: i64,
    #[serde(rename = "book_latest_chapter_name", deserialize_with = "null_as_default")]
    pub latest_chapter_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_banned: bool,
    #[serde(rename = "book_source_id", deserialize_with = "null_as_default")]
    pub source_id: String,
    #[serde(rename = "book_source_url", deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(rename = "book_source_pc_url", deserialize_with = "null_as_default")]
    pub source_pc_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// Reader-assigned tag with its vote count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
